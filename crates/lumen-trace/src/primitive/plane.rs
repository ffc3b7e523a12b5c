use crate::math::{dot, Vec3};
use crate::paint::Material;

/// Rays with `|normal · direction|` at or below this are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Infinite plane through `point`, perpendicular to `normal`.
///
/// The normal does not need to be unit length and both sides are visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vec3,
    point: Vec3,
    material: Material,
}

impl Plane {
    #[inline]
    pub fn new(normal: Vec3, point: Vec3, material: impl Into<Material>) -> Self {
        Self { normal, point, material: material.into() }
    }

    /// Horizontal plane at height `y`.
    #[inline]
    pub fn floor(y: f32, material: impl Into<Material>) -> Self {
        Self::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, y, 0.0), material)
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    #[inline]
    pub fn point(&self) -> Vec3 {
        self.point
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let denom = dot(self.normal, direction);
        if !(denom.abs() > PARALLEL_EPSILON) {
            return None;
        }
        let t = dot(self.point - origin, self.normal) / denom;
        (t > 0.0).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn looking_down_hits_floor() {
        let p = Plane::floor(-1.0, Color::white());
        let t = p.intersect(Vec3::zero(), Vec3::new(0.0, -1.0, 1.0));
        assert_eq!(t, Some(1.0));
    }

    #[test]
    fn unnormalized_normal_gives_same_distance() {
        let a = Plane::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -2.0, 0.0), Color::white());
        let b = Plane::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -2.0, 0.0), Color::white());
        let d = Vec3::new(0.3, -1.0, 0.7);
        assert_eq!(a.intersect(Vec3::zero(), d), b.intersect(Vec3::zero(), d));
    }

    #[test]
    fn parallel_ray_misses() {
        let p = Plane::floor(-1.0, Color::white());
        assert_eq!(p.intersect(Vec3::zero(), Vec3::new(0.0, 0.0, 1.0)), None);
        assert_eq!(p.intersect(Vec3::zero(), Vec3::new(0.0, 1e-7, 1.0)), None);
    }

    #[test]
    fn denominator_at_epsilon_is_parallel() {
        let p = Plane::floor(1.0, Color::white());
        assert_eq!(p.intersect(Vec3::zero(), Vec3::new(0.0, PARALLEL_EPSILON, 1.0)), None);
        assert_eq!(p.intersect(Vec3::zero(), Vec3::new(0.0, -PARALLEL_EPSILON, 1.0)), None);

        let t = p.intersect(Vec3::zero(), Vec3::new(0.0, 2.0 * PARALLEL_EPSILON, 1.0));
        assert!(t.is_some_and(|t| (t - 5e5).abs() < 1.0));
    }

    #[test]
    fn plane_behind_misses() {
        let p = Plane::floor(-1.0, Color::white());
        assert_eq!(p.intersect(Vec3::zero(), Vec3::new(0.0, 1.0, 0.0)), None);
    }

    #[test]
    fn visible_from_below() {
        let p = Plane::floor(1.0, Color::white());
        assert_eq!(p.intersect(Vec3::zero(), Vec3::new(0.0, 1.0, 0.0)), Some(1.0));
    }
}
