//! Vectors, matrices and quaternions for 3D graphics.
//!
//! All matrices store their elements in column-major order, and vectors are
//! transformed as column vectors (`M * v`).

#[macro_use]
mod macros;

#[cfg(feature = "benchmark")]
pub mod benchmark;
pub mod camera;
pub mod matrix;
pub mod quaternion;
pub mod ray;
pub mod size;
pub mod sphere;
pub mod vector;

#[cfg(feature = "fuzzing")]
pub use matrix::fuzzing;

pub use camera::{Camera3, ProjectionType};
pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use quaternion::Quaternion;
pub use ray::Ray3;
pub use size::{Size2, Size3};
pub use sphere::Sphere;
pub use vector::{Vector2, Vector3, Vector4};
