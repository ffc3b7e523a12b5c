//! GPU presentation of CPU-rendered frames.
//!
//! The host renders into an RGBA8 buffer; [`FramePresenter`] uploads it to a
//! texture and stretches it over the whole surface with nearest sampling.

mod ctx;
mod present;

pub use ctx::{RenderCtx, RenderTarget};
pub use present::{FramePresenter, FrameView};
