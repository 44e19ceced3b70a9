//! Math types
//!
//! Aliases over `nalgebra` used by the camera.

pub use nalgebra::{Matrix4, Point3, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3f = Point3<f32>;
