//! Lumen trace crate.
//!
//! CPU raycaster core. Everything needed to turn a scene and a camera into a
//! frame of pixels lives here; windowing and presentation belong to the host.
//!
//! Responsibilities:
//! - ray/primitive intersection and nearest-hit scene queries
//! - camera orientation, movement and per-pixel ray generation
//! - adaptive render scale driven by measured frame rate
//! - per-frame step: trace, upscale, overlay remote players

pub mod camera;
pub mod error;
pub mod math;
pub mod overlay;
pub mod paint;
pub mod primitive;
pub mod remote;
pub mod render;
pub mod scale;
pub mod scene;
pub mod surface;

pub use camera::{Camera, Move, MoveMode, Turn};
pub use error::{ConfigError, RemoteError};
pub use math::Vec3;
pub use overlay::{RemotePlayer, RemotePlayers};
pub use paint::{Color, Material};
pub use primitive::{Facing, Plane, Primitive, Sphere, Square, Triangle};
pub use remote::{LoopbackChannel, PlayArea, PositionPublisher, PositionUpdate, RemoteChannel, SessionId};
pub use render::{render_frame, step, FrameResult, FrameStats, RenderContext, Shading};
pub use scale::{AdaptiveScale, RenderConfig, ScaleAdjustment};
pub use scene::{Hit, Scene};
pub use surface::{Framebuffer, Surface};
