//! Contract between the runtime and the host application.
//!
//! The host implements [`App`]; the runtime calls it once per redraw with a
//! [`FrameCtx`] carrying the window, GPU, input and timing for that frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
