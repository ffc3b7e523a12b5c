//! Window + event loop.
//!
//! Owns the winit `EventLoop` and the single window, and wires them to the
//! GPU layer and the host [`App`](crate::core::App).

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
