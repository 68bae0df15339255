//! Cartesian (x, y, z) point type

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// Cartesian (x, y, z) point.
///
/// Immutable after construction: the fields are private and no mutating
/// methods exist. Copies are fully independent values.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3<T> {
    x: T,
    y: T,
    z: T,
}

// The derive can't see through the generic field types, so the bytemuck
// impls are written out. `#[repr(C)]` over three identical Pod scalars
// leaves no padding.
unsafe impl<T: Scalar> Zeroable for Vector3<T> {}
unsafe impl<T: Scalar> Pod for Vector3<T> {}

impl<T: Scalar> Vector3<T> {
    /// Create a new point from components
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Create a point from another `Vector3`, possibly of a different precision
    #[inline]
    pub fn from_vector3<T2: Scalar>(v: Vector3<T2>) -> Self {
        Self::new(
            T::from_f64(v.x().to_f64()),
            T::from_f64(v.y().to_f64()),
            T::from_f64(v.z().to_f64()),
        )
    }

    /// The x component
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// The y component
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// The z component
    #[inline]
    pub fn z(&self) -> T {
        self.z
    }

    /// The components as an (x, y, z) tuple
    #[inline]
    pub fn tuple(&self) -> (T, T, T) {
        (self.x, self.y, self.z)
    }

    /// The components as an [x, y, z] array
    #[inline]
    pub fn array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Scalar> From<Vector3<T>> for (T, T, T) {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        v.tuple()
    }
}

impl<T: Scalar> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        v.array()
    }
}

impl<T: Scalar> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Cartesian point over 32-bit floats
pub type Vector3f = Vector3<f32>;
/// Cartesian point over higher precision 64-bit doubles
pub type Vector3d = Vector3<f64>;
