use std::time::{Duration, Instant};

use crate::camera::Camera;
use crate::overlay::RemotePlayers;
use crate::paint::Color;
use crate::scale::{AdaptiveScale, ScaleAdjustment};
use crate::scene::{Hit, Scene};
use crate::surface::Surface;

/// Distance-to-brightness mapping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shading {
    /// Brightness lost per unit of distance, on the 0–255 scale.
    pub distance_to_shade: f32,
    /// Color of pixels whose ray hits nothing.
    pub background: Color,
}

impl Default for Shading {
    fn default() -> Self {
        Self { distance_to_shade: 20.0, background: Color::black() }
    }
}

impl Shading {
    /// `shade = max(0, 255 - distance · distance_to_shade)`, applied to the
    /// surface color as a `shade / 255` factor.
    pub fn shade(&self, hit: Option<&Hit>) -> Color {
        match hit {
            None => self.background,
            Some(hit) => {
                let shade = (255.0 - hit.distance * self.distance_to_shade).max(0.0);
                hit.color.scaled(shade / 255.0)
            }
        }
    }
}

/// Session state a frame is rendered from.
///
/// Created once; the host passes it by `&mut` into [`step`] every tick and
/// mutates `camera` from input in between.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub camera: Camera,
    pub scene: Scene,
    pub scale: AdaptiveScale,
    pub players: RemotePlayers,
    pub shading: Shading,
}

impl RenderContext {
    pub fn new(scene: Scene, camera: Camera) -> Self {
        Self {
            camera,
            scene,
            scale: AdaptiveScale::default(),
            players: RemotePlayers::new(),
            shading: Shading::default(),
        }
    }

    pub fn with_scale(mut self, scale: AdaptiveScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_players(mut self, players: RemotePlayers) -> Self {
        self.players = players;
        self
    }

    pub fn with_shading(mut self, shading: Shading) -> Self {
        self.shading = shading;
        self
    }
}

/// Geometry and work done by one scene pass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub image_width: u32,
    pub image_height: u32,
    /// Edge of the output block each traced pixel is upscaled to.
    pub pixel_size: u32,
    pub rays: u32,
    pub hits: u32,
}

/// Result of one [`step`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameResult {
    pub stats: FrameStats,
    /// Frame rate measured from the frame time fed to this step.
    pub fps: Option<f32>,
    pub adjustment: ScaleAdjustment,
    /// Render scale the frame was traced at.
    pub render_scale: f32,
}

/// Downsampled image size and block size for `scale` on a `width × height` canvas.
pub fn image_dimensions(width: u32, height: u32, scale: f32) -> (u32, u32, u32) {
    let image_w = (width as f32 * scale).floor() as u32;
    let image_h = (height as f32 * scale).floor() as u32;
    let pixel_size = if scale > 0.0 { ((1.0 / scale).floor() as u32).max(1) } else { 1 };
    (image_w, image_h, pixel_size)
}

/// Traces the scene at the current render scale and draws the overlay.
///
/// Each traced pixel becomes a `pixel_size × pixel_size` block (nearest
/// neighbour upscale). The surface is not cleared here.
pub fn render_frame(ctx: &RenderContext, surface: &mut impl Surface) -> FrameStats {
    let (image_w, image_h, pixel_size) =
        image_dimensions(surface.width(), surface.height(), ctx.scale.scale());

    let mut stats = FrameStats { image_width: image_w, image_height: image_h, pixel_size, ..FrameStats::default() };

    let origin = ctx.camera.position;
    let (fw, fh) = (image_w as f32, image_h as f32);

    for y in 0..image_h {
        for x in 0..image_w {
            let view = ctx.camera.ray_for_pixel(x as f32, y as f32, fw, fh);
            let direction = ctx.camera.rotate(view);

            let hit = ctx.scene.nearest_hit(origin, direction);
            stats.rays += 1;
            if hit.is_some() {
                stats.hits += 1;
            }

            let color = ctx.shading.shade(hit.as_ref());
            surface.set_pixel_block(x * pixel_size, y * pixel_size, pixel_size, pixel_size, color);
        }
    }

    ctx.players.draw(surface);
    stats
}

/// Runs one frame: adapt scale, expire peers, clear, render.
///
/// The clear uses `shading.background`, so the strip right of and below the
/// traced blocks matches pixels whose rays miss.
///
/// `frame_time` is the time since the previous frame; `now` timestamps peer
/// expiry. Both come from the host so ticks can be driven synchronously.
pub fn step(
    ctx: &mut RenderContext,
    surface: &mut impl Surface,
    frame_time: Duration,
    now: Instant,
) -> FrameResult {
    let (fps, adjustment) = ctx.scale.observe_frame_time(frame_time);
    ctx.players.prune(now);

    surface.clear();
    if ctx.shading.background != Color::black() {
        let (w, h) = (surface.width(), surface.height());
        surface.set_pixel_block(0, 0, w, h, ctx.shading.background);
    }
    let stats = render_frame(ctx, surface);

    FrameResult { stats, fps, adjustment, render_scale: ctx.scale.scale() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;
    use crate::primitive::Sphere;
    use crate::remote::PositionUpdate;
    use crate::scale::RenderConfig;
    use crate::surface::Framebuffer;

    const RED: Color = Color::new(255, 0, 0);

    fn sphere_context(scale: f32) -> RenderContext {
        let scene = Scene::default().with(Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, RED));
        let config = RenderConfig::default().with_bounds(0.1, 1.0).with_scale(scale);
        RenderContext::new(scene, Camera::default()).with_scale(AdaptiveScale::new(config).unwrap())
    }

    // ── image_dimensions ──────────────────────────────────────────────────

    #[test]
    fn dimensions_floor_scale() {
        assert_eq!(image_dimensions(640, 480, 0.25), (160, 120, 4));
        assert_eq!(image_dimensions(101, 99, 0.3), (30, 29, 3));
        assert_eq!(image_dimensions(10, 10, 1.0), (10, 10, 1));
        assert_eq!(image_dimensions(10, 10, 0.0), (0, 0, 1));
    }

    // ── shading ───────────────────────────────────────────────────────────

    #[test]
    fn shade_falls_off_with_distance() {
        let s = Shading { distance_to_shade: 51.0, background: Color::black() };
        let hit = |d| Hit { distance: d, color: Color::white(), index: 0 };
        assert_eq!(s.shade(Some(&hit(0.0))), Color::white());
        assert_eq!(s.shade(Some(&hit(1.0))), Color::gray(204));
        assert_eq!(s.shade(Some(&hit(10.0))), Color::black());
        assert_eq!(s.shade(None), Color::black());
    }

    // ── render_frame ──────────────────────────────────────────────────────

    #[test]
    fn center_pixel_sees_sphere_at_distance_two() {
        let ctx = sphere_context(0.5);
        let mut fb = Framebuffer::new(40, 40);
        let stats = render_frame(&ctx, &mut fb);

        assert_eq!((stats.image_width, stats.image_height, stats.pixel_size), (20, 20, 2));
        assert_eq!(stats.rays, 400);
        assert!(stats.hits > 0 && stats.hits < stats.rays);

        // Traced pixel (10, 10) is the image center: straight ahead, t = 2.
        let expected = ctx.shading.shade(Some(&Hit { distance: 2.0, color: RED, index: 0 }));
        assert_eq!(fb.pixel(20, 20), Some(expected));
        assert_eq!(fb.pixel(21, 21), Some(expected));
        // Corners look past the sphere.
        assert_eq!(fb.pixel(0, 0), Some(Color::black()));
    }

    #[test]
    fn camera_facing_away_sees_background() {
        let mut ctx = sphere_context(0.5);
        ctx.camera = Camera::default().with_orientation(core::f32::consts::PI, 0.0);
        let mut fb = Framebuffer::new(20, 20);
        let stats = render_frame(&ctx, &mut fb);
        assert_eq!(stats.hits, 0);
        assert!(fb.pixels().iter().all(|p| *p == [0, 0, 0, 255]));
    }

    #[test]
    fn overlay_is_drawn_over_scene() {
        let mut ctx = sphere_context(0.5);
        ctx.players.apply(PositionUpdate::new("p", 0.5, 0.5), Instant::now());
        let mut fb = Framebuffer::new(40, 40);
        render_frame(&ctx, &mut fb);
        assert_eq!(fb.pixel(20, 20), Some(ctx.players.marker_color));
    }

    // ── step ──────────────────────────────────────────────────────────────

    #[test]
    fn slow_frame_lowers_scale_before_tracing() {
        let mut ctx = sphere_context(0.5);
        let mut fb = Framebuffer::new(100, 100);
        let r = step(&mut ctx, &mut fb, Duration::from_millis(100), Instant::now());

        assert_eq!(r.adjustment, ScaleAdjustment::Decreased);
        assert!((r.render_scale - 0.48).abs() < 1e-5);
        assert!(r.stats.image_width < 50);
        assert_eq!(r.stats.pixel_size, 2);
    }

    #[test]
    fn zero_frame_time_still_renders() {
        let mut ctx = sphere_context(0.5);
        let mut fb = Framebuffer::new(10, 10);
        let r = step(&mut ctx, &mut fb, Duration::ZERO, Instant::now());
        assert_eq!(r.adjustment, ScaleAdjustment::Skipped);
        assert_eq!(r.fps, None);
        assert_eq!(r.stats.rays, 25);
    }

    #[test]
    fn uncovered_strip_takes_background() {
        let background = Color::gray(40);
        let mut ctx = sphere_context(0.1)
            .with_shading(Shading { background, ..Shading::default() });
        ctx.camera = Camera::default().with_orientation(core::f32::consts::PI, 0.0);
        let mut fb = Framebuffer::new(25, 25);
        step(&mut ctx, &mut fb, Duration::from_millis(25), Instant::now());
        assert_eq!(fb.pixel(0, 0), Some(background));
        assert_eq!(fb.pixel(24, 0), Some(background));
        assert_eq!(fb.pixel(24, 24), Some(background));
    }

    #[test]
    fn step_clears_previous_frame() {
        let mut ctx = sphere_context(0.1);
        let mut fb = Framebuffer::new(25, 25);
        fb.set_pixel_block(24, 24, 1, 1, Color::white());
        // 2 × 2 traced pixels of 10 px leave the last 5 columns/rows untouched.
        step(&mut ctx, &mut fb, Duration::from_millis(25), Instant::now());
        assert_eq!(fb.pixel(24, 24), Some(Color::black()));
    }
}
