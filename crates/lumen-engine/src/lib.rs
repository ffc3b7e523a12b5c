//! Lumen engine crate.
//!
//! Platform + GPU runtime for hosts that render on the CPU: one window, one
//! wgpu surface, and a presenter that puts an RGBA framebuffer on screen.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
