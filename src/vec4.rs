//! Tool-path vector type

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use crate::vec3::Vector3;

/// Cartesian (x, y, z) point plus an extruder coordinate `e`.
///
/// The `e` component is the material feed amount of a tool-path move and is
/// treated as an opaque scalar. Like [`Vector3`], the type is immutable after
/// construction and copies are fully independent values.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector4<T> {
    xyz: Vector3<T>,
    e: T,
}

unsafe impl<T: Scalar> Zeroable for Vector4<T> {}
unsafe impl<T: Scalar> Pod for Vector4<T> {}

impl<T: Scalar> Vector4<T> {
    /// Create a new vector from components
    #[inline]
    pub const fn new(x: T, y: T, z: T, e: T) -> Self {
        Self {
            xyz: Vector3::new(x, y, z),
            e,
        }
    }

    /// Create a vector from a cartesian point plus an extruder coordinate.
    ///
    /// The point and scalar may be of a different precision than the target;
    /// each component is converted, narrowing silently where it must.
    #[inline]
    pub fn from_vector3_and_scalar<T2: Scalar>(xyz: Vector3<T2>, e: T2) -> Self {
        Self {
            xyz: Vector3::from_vector3(xyz),
            e: T::from_f64(e.to_f64()),
        }
    }

    /// Create a vector from another `Vector4`, possibly of a different precision.
    ///
    /// Conversion is component-wise, never a reinterpretation of the storage.
    #[inline]
    pub fn from_vector4<T2: Scalar>(v: Vector4<T2>) -> Self {
        Self {
            xyz: Vector3::from_vector3(*v.xyz()),
            e: T::from_f64(v.e().to_f64()),
        }
    }

    /// The cartesian components as a borrowed [`Vector3`]
    #[inline]
    pub fn xyz(&self) -> &Vector3<T> {
        &self.xyz
    }

    /// The x component
    #[inline]
    pub fn x(&self) -> T {
        self.xyz.x()
    }

    /// The y component
    #[inline]
    pub fn y(&self) -> T {
        self.xyz.y()
    }

    /// The z component
    #[inline]
    pub fn z(&self) -> T {
        self.xyz.z()
    }

    /// The e (extruder) component
    #[inline]
    pub fn e(&self) -> T {
        self.e
    }

    /// The components as an (x, y, z, e) tuple
    #[inline]
    pub fn tuple(&self) -> (T, T, T, T) {
        (self.x(), self.y(), self.z(), self.e)
    }
}

impl<T: Scalar> From<Vector4<T>> for (T, T, T, T) {
    #[inline]
    fn from(v: Vector4<T>) -> Self {
        v.tuple()
    }
}

impl<T: Scalar> fmt::Display for Vector4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector4({}, {}, {}, {})",
            self.x(),
            self.y(),
            self.z(),
            self.e
        )
    }
}

/// Tool-path vector over 32-bit floats
pub type Vector4f = Vector4<f32>;
/// Tool-path vector over higher precision 64-bit doubles
pub type Vector4d = Vector4<f64>;
