//! GPU device and window surface.
//!
//! Responsibilities:
//! - wgpu Instance/Adapter/Device/Queue creation
//! - surface format selection and (re)configuration
//! - frame acquisition and submission

mod error;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
