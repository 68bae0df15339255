//! Tool-path math library
//!
//! This crate provides the vector types used in 3D-printer tool-path
//! generation: a cartesian point paired with an extruder coordinate.
//!
//! ## Core Types
//!
//! - [`Vector4`] - cartesian (x, y, z) point plus extruder coordinate e
//! - [`Vector3`] - cartesian (x, y, z) point
//! - [`Scalar`] - numeric bound for vector components (f32 and f64)
//!
//! Both vector types come in fixed 32-bit ([`Vector3f`], [`Vector4f`]) and
//! 64-bit ([`Vector3d`], [`Vector4d`]) instantiations, with explicit
//! cross-precision conversion between them.

mod scalar;
mod vec3;
mod vec4;

pub use scalar::Scalar;
pub use vec3::{Vector3, Vector3d, Vector3f};
pub use vec4::{Vector4, Vector4d, Vector4f};
