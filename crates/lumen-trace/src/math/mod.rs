//! Vector math shared by primitives, camera and renderer.
//!
//! World space:
//! - +X right, +Y up, +Z forward (away from a camera with zero yaw/pitch)

mod vec3;

pub use vec3::{cross, dot, sub, Vec3};
