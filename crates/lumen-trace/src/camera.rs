use core::f32::consts::FRAC_PI_2;

use crate::math::Vec3;

/// Translation commands accepted by [`Camera::move_by`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Move {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Rotation commands accepted by [`Camera::turn`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Turn {
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
}

/// How [`Move`] commands translate the camera.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum MoveMode {
    /// Forward/right follow the current yaw. Pitch never affects translation.
    #[default]
    Relative,
    /// Forward/backward along world Z, left/right along world X.
    Axis,
}

impl MoveMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            MoveMode::Relative => MoveMode::Axis,
            MoveMode::Axis => MoveMode::Relative,
        }
    }
}

/// Pinhole camera with yaw/pitch orientation.
///
/// Conventions:
/// - view space looks down +Z with +Y up; the image plane sits at `z = 1`
/// - positive yaw turns right (about +Y), positive pitch looks up
/// - pitch is clamped to `[-π/2, π/2]`; yaw is unbounded
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    pub mode: MoveMode,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::zero())
    }
}

impl Camera {
    #[inline]
    pub fn new(position: Vec3) -> Self {
        Self { position, yaw: 0.0, pitch: 0.0, mode: MoveMode::default() }
    }

    /// Sets the orientation, clamping `pitch`.
    #[inline]
    pub fn with_orientation(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.set_pitch(pitch);
        self
    }

    #[inline]
    pub fn with_mode(mut self, mode: MoveMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// View-space direction through pixel `(px, py)` of a `width × height` image.
    ///
    /// Maps the image to `[-1, 1]` on both axes at unit forward distance, so the
    /// field of view is 90° horizontally and vertically regardless of aspect.
    #[inline]
    pub fn ray_for_pixel(&self, px: f32, py: f32, width: f32, height: f32) -> Vec3 {
        Vec3::new((px / width) * 2.0 - 1.0, 1.0 - (py / height) * 2.0, 1.0)
    }

    /// Rotates a view-space direction into world space.
    ///
    /// The camera is yawed about world Y, then pitched about its own yawed
    /// horizontal axis. As a vector operation that is pitch about view X
    /// followed by yaw about Y, so "up" stays up at every yaw.
    pub fn rotate(&self, d: Vec3) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();

        // Pitch about the view's horizontal axis.
        let y = d.y * cp + d.z * sp;
        let z = -d.y * sp + d.z * cp;
        let x = d.x;

        // Yaw about the vertical axis.
        Vec3::new(x * cy + z * sy, y, -x * sy + z * cy)
    }

    /// Horizontal forward vector derived from yaw only.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        let (s, c) = self.yaw.sin_cos();
        Vec3::new(s, 0.0, c)
    }

    /// Horizontal right vector derived from yaw only.
    #[inline]
    pub fn right(&self) -> Vec3 {
        let (s, c) = self.yaw.sin_cos();
        Vec3::new(c, 0.0, -s)
    }

    /// Translates the camera by `step` world units according to `self.mode`.
    pub fn move_by(&mut self, tag: Move, step: f32) {
        let (forward, right) = match self.mode {
            MoveMode::Relative => (self.forward(), self.right()),
            MoveMode::Axis => (Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0)),
        };
        let up = Vec3::new(0.0, 1.0, 0.0);

        let delta = match tag {
            Move::Forward => forward * step,
            Move::Backward => forward * -step,
            Move::Right => right * step,
            Move::Left => right * -step,
            Move::Up => up * step,
            Move::Down => up * -step,
        };
        self.position = self.position + delta;
    }

    /// Rotates the camera by `step` radians.
    pub fn turn(&mut self, tag: Turn, step: f32) {
        match tag {
            Turn::YawLeft => self.yaw -= step,
            Turn::YawRight => self.yaw += step,
            Turn::PitchUp => self.set_pitch(self.pitch + step),
            Turn::PitchDown => self.set_pitch(self.pitch - step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::PI;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    // ── ray_for_pixel ─────────────────────────────────────────────────────

    #[test]
    fn image_center_looks_forward() {
        let cam = Camera::default();
        assert_eq!(cam.ray_for_pixel(50.0, 25.0, 100.0, 50.0), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn top_left_corner_maps_to_minus_one_plus_one() {
        let cam = Camera::default();
        assert_eq!(cam.ray_for_pixel(0.0, 0.0, 64.0, 48.0), Vec3::new(-1.0, 1.0, 1.0));
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn identity_orientation_leaves_ray() {
        let d = Vec3::new(0.3, -0.2, 1.0);
        assert_eq!(Camera::default().rotate(d), d);
    }

    #[test]
    fn positive_yaw_turns_right() {
        let cam = Camera::default().with_orientation(FRAC_PI_2, 0.0);
        assert!(close(cam.rotate(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn positive_pitch_looks_up() {
        let cam = Camera::default().with_orientation(0.0, FRAC_PI_2);
        assert!(close(cam.rotate(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn pitch_tilts_about_the_yawed_axis() {
        // Facing +X, pitching up raises the ray without turning it off +X.
        let cam = Camera::default().with_orientation(FRAC_PI_2, 0.5);
        let (sp, cp) = 0.5f32.sin_cos();
        assert!(close(cam.rotate(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(cp, sp, 0.0)));
    }

    #[test]
    fn positive_pitch_looks_up_at_any_yaw() {
        for yaw in [FRAC_PI_2, PI, -FRAC_PI_2, 2.5] {
            let up = Camera::default().with_orientation(yaw, 0.5).rotate(Vec3::new(0.0, 0.0, 1.0));
            assert!(up.y > 0.4, "yaw {yaw}: {up:?}");
            let down = Camera::default().with_orientation(yaw, -0.5).rotate(Vec3::new(0.0, 0.0, 1.0));
            assert!(down.y < -0.4, "yaw {yaw}: {down:?}");
        }
    }

    #[test]
    fn pitched_ray_keeps_heading() {
        // Horizontal component of the center ray follows `forward()`.
        let cam = Camera::default().with_orientation(PI, 0.7);
        let d = cam.rotate(Vec3::new(0.0, 0.0, 1.0));
        let flat = Vec3::new(d.x, 0.0, d.z);
        assert!(close(flat * (1.0 / flat.length()), cam.forward()));
    }

    // ── turn ──────────────────────────────────────────────────────────────

    #[test]
    fn pitch_is_clamped() {
        let mut cam = Camera::default();
        for _ in 0..100 {
            cam.turn(Turn::PitchUp, 0.1);
        }
        assert_eq!(cam.pitch(), FRAC_PI_2);
        for _ in 0..200 {
            cam.turn(Turn::PitchDown, 0.1);
        }
        assert_eq!(cam.pitch(), -FRAC_PI_2);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut cam = Camera::default();
        for _ in 0..100 {
            cam.turn(Turn::YawRight, 0.5);
        }
        assert!(cam.yaw() > 49.0);
        cam.turn(Turn::YawLeft, 60.0);
        assert!((cam.yaw() + 10.0).abs() < 1e-4);
    }

    // ── move_by ───────────────────────────────────────────────────────────

    #[test]
    fn relative_forward_follows_yaw() {
        let mut cam = Camera::default().with_orientation(FRAC_PI_2, 0.0);
        cam.move_by(Move::Forward, 2.0);
        assert!(close(cam.position, Vec3::new(2.0, 0.0, 0.0)));
        cam.move_by(Move::Right, 1.0);
        assert!(close(cam.position, Vec3::new(2.0, 0.0, -1.0)));
    }

    #[test]
    fn pitch_does_not_affect_translation() {
        let mut cam = Camera::default().with_orientation(0.0, 1.0);
        cam.move_by(Move::Forward, 1.0);
        assert!(close(cam.position, Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn axis_mode_ignores_yaw() {
        let mut cam = Camera::default()
            .with_orientation(1.2, 0.0)
            .with_mode(MoveMode::Axis);
        cam.move_by(Move::Forward, 1.0);
        cam.move_by(Move::Left, 3.0);
        cam.move_by(Move::Up, 0.5);
        assert_eq!(cam.position, Vec3::new(-3.0, 0.5, 1.0));
        cam.move_by(Move::Backward, 1.0);
        cam.move_by(Move::Down, 0.5);
        cam.move_by(Move::Right, 3.0);
        assert_eq!(cam.position, Vec3::zero());
    }

    #[test]
    fn mode_toggles() {
        assert_eq!(MoveMode::Relative.toggled(), MoveMode::Axis);
        assert_eq!(MoveMode::Axis.toggled(), MoveMode::Relative);
    }
}
