use std::time::Duration;

use crate::error::ConfigError;

/// Render-scale bounds and frame-rate thresholds.
///
/// `render_scale` is the fraction of native resolution traced per frame.
/// Only [`AdaptiveScale`] changes it after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub render_scale: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub scale_step: f32,
    /// Below this frame rate the scale shrinks.
    pub target_min_fps: f32,
    /// Above this frame rate the scale grows.
    pub target_max_fps: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            render_scale: 0.3,
            min_scale: 0.1,
            max_scale: 0.5,
            scale_step: 0.02,
            target_min_fps: 30.0,
            target_max_fps: 50.0,
        }
    }
}

impl RenderConfig {
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.render_scale = scale;
        self
    }

    pub fn with_bounds(mut self, min_scale: f32, max_scale: f32) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.scale_step = step;
        self
    }

    pub fn with_fps_targets(mut self, min_fps: f32, max_fps: f32) -> Self {
        self.target_min_fps = min_fps;
        self.target_max_fps = max_fps;
        self
    }

    /// Checks bounds and thresholds; `render_scale` itself is clamped, not rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.render_scale,
            self.min_scale,
            self.max_scale,
            self.scale_step,
            self.target_min_fps,
            self.target_max_fps,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::new("all values must be finite"));
        }
        if self.min_scale <= 0.0 {
            return Err(ConfigError::new(format!("min_scale must be > 0, got {}", self.min_scale)));
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::new(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        if self.max_scale > 1.0 {
            return Err(ConfigError::new(format!("max_scale must be <= 1, got {}", self.max_scale)));
        }
        if self.scale_step <= 0.0 {
            return Err(ConfigError::new(format!("scale_step must be > 0, got {}", self.scale_step)));
        }
        if self.target_min_fps > self.target_max_fps {
            return Err(ConfigError::new(format!(
                "target_min_fps {} exceeds target_max_fps {}",
                self.target_min_fps, self.target_max_fps
            )));
        }
        Ok(())
    }
}

/// Outcome of one controller observation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ScaleAdjustment {
    Decreased,
    Increased,
    Unchanged,
    /// No usable measurement this frame (zero or non-finite frame time).
    Skipped,
}

/// Hysteretic step controller holding frame rate between two thresholds.
///
/// Each observation moves `render_scale` by at most one fixed step and never
/// outside `[min_scale, max_scale]`. There is no integral or derivative term.
#[derive(Debug, Clone)]
pub struct AdaptiveScale {
    config: RenderConfig,
}

impl Default for AdaptiveScale {
    fn default() -> Self {
        Self { config: RenderConfig::default() }
    }
}

impl AdaptiveScale {
    /// Validates `config` and clamps its initial scale into bounds.
    pub fn new(mut config: RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        config.render_scale = config.render_scale.clamp(config.min_scale, config.max_scale);
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.config.render_scale
    }

    /// Feeds the time elapsed since the previous frame.
    ///
    /// Returns the measured fps alongside the adjustment; a zero frame time
    /// yields `(None, Skipped)`.
    pub fn observe_frame_time(&mut self, dt: Duration) -> (Option<f32>, ScaleAdjustment) {
        let dt_ms = dt.as_secs_f32() * 1000.0;
        if dt_ms <= 0.0 {
            return (None, ScaleAdjustment::Skipped);
        }
        let fps = 1000.0 / dt_ms;
        (Some(fps), self.observe_fps(fps))
    }

    /// Feeds a frame-rate measurement directly.
    pub fn observe_fps(&mut self, fps: f32) -> ScaleAdjustment {
        if !fps.is_finite() {
            return ScaleAdjustment::Skipped;
        }

        let c = &mut self.config;
        let before = c.render_scale;
        if fps < c.target_min_fps {
            c.render_scale = (before - c.scale_step).max(c.min_scale);
        } else if fps > c.target_max_fps {
            c.render_scale = (before + c.scale_step).min(c.max_scale);
        }

        let after = c.render_scale;
        if after < before {
            log::debug!("render scale {before:.2} -> {after:.2} ({fps:.1} fps)");
            ScaleAdjustment::Decreased
        } else if after > before {
            log::debug!("render scale {before:.2} -> {after:.2} ({fps:.1} fps)");
            ScaleAdjustment::Increased
        } else {
            ScaleAdjustment::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(scale: f32) -> AdaptiveScale {
        AdaptiveScale::new(RenderConfig::default().with_scale(scale)).unwrap()
    }

    // ── observe_fps ───────────────────────────────────────────────────────

    #[test]
    fn slow_then_fast_moves_down_then_up() {
        let mut c = controller(0.3);
        let mut prev = c.scale();
        let mut seen = Vec::new();
        for fps in [20.0, 20.0, 55.0, 55.0] {
            let adj = c.observe_fps(fps);
            seen.push((adj, c.scale() - prev));
            prev = c.scale();
        }
        assert_eq!(seen[0].0, ScaleAdjustment::Decreased);
        assert_eq!(seen[1].0, ScaleAdjustment::Decreased);
        assert_eq!(seen[2].0, ScaleAdjustment::Increased);
        assert_eq!(seen[3].0, ScaleAdjustment::Increased);
        assert!(seen[0].1 < 0.0 && seen[1].1 < 0.0);
        assert!(seen[2].1 > 0.0 && seen[3].1 > 0.0);
        assert!((c.scale() - 0.3).abs() < 1e-5);
    }

    #[test]
    fn clamps_at_min() {
        let mut c = controller(0.11);
        assert_eq!(c.observe_fps(20.0), ScaleAdjustment::Decreased);
        assert_eq!(c.scale(), 0.1);
        assert_eq!(c.observe_fps(20.0), ScaleAdjustment::Unchanged);
        assert_eq!(c.scale(), 0.1);
    }

    #[test]
    fn clamps_at_max() {
        let mut c = controller(0.49);
        assert_eq!(c.observe_fps(55.0), ScaleAdjustment::Increased);
        assert_eq!(c.scale(), 0.5);
        assert_eq!(c.observe_fps(55.0), ScaleAdjustment::Unchanged);
        assert_eq!(c.scale(), 0.5);
    }

    #[test]
    fn within_band_is_unchanged() {
        let mut c = controller(0.3);
        for fps in [30.0, 40.0, 50.0] {
            assert_eq!(c.observe_fps(fps), ScaleAdjustment::Unchanged);
        }
        assert_eq!(c.scale(), 0.3);
    }

    #[test]
    fn stays_bounded_under_long_runs() {
        let mut c = controller(0.3);
        for i in 0..500 {
            c.observe_fps(if i % 7 < 3 { 5.0 } else { 500.0 });
            assert!((0.1..=0.5).contains(&c.scale()));
        }
    }

    // ── observe_frame_time ────────────────────────────────────────────────

    #[test]
    fn zero_frame_time_is_skipped() {
        let mut c = controller(0.3);
        assert_eq!(c.observe_frame_time(Duration::ZERO), (None, ScaleAdjustment::Skipped));
        assert_eq!(c.scale(), 0.3);
    }

    #[test]
    fn frame_time_converts_to_fps() {
        let mut c = controller(0.3);
        let (fps, adj) = c.observe_frame_time(Duration::from_millis(50));
        assert!((fps.unwrap() - 20.0).abs() < 1e-3);
        assert_eq!(adj, ScaleAdjustment::Decreased);
    }

    #[test]
    fn nan_fps_is_skipped() {
        assert_eq!(controller(0.3).observe_fps(f32::NAN), ScaleAdjustment::Skipped);
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn initial_scale_is_clamped() {
        assert_eq!(controller(0.9).scale(), 0.5);
        assert_eq!(controller(0.0).scale(), 0.1);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let cfg = RenderConfig::default().with_bounds(0.6, 0.2);
        assert!(AdaptiveScale::new(cfg).is_err());
    }

    #[test]
    fn rejects_bad_step_and_thresholds() {
        assert!(RenderConfig::default().with_step(0.0).validate().is_err());
        assert!(RenderConfig::default().with_fps_targets(60.0, 30.0).validate().is_err());
        assert!(RenderConfig::default().with_bounds(0.0, 0.5).validate().is_err());
        assert!(RenderConfig::default().with_scale(f32::NAN).validate().is_err());
    }
}
