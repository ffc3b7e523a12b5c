use crate::math::Vec3;
use crate::paint::Material;

use super::Triangle;

/// World axis a square's face points along.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Facing {
    /// Lies in the XY plane; a camera with zero yaw looks straight at it.
    #[default]
    Z,
    /// Lies in the XZ plane (floor tiles, ceilings).
    Y,
    /// Lies in the YZ plane (side walls).
    X,
}

/// Axis-aligned square made of two triangles sharing a diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    triangles: [Triangle; 2],
    facing: Facing,
}

impl Square {
    /// Square of edge `size` centred on `center`, facing the camera (`Facing::Z`).
    #[inline]
    pub fn new(center: Vec3, size: f32, material: impl Into<Material>) -> Self {
        Self::oriented(center, size, Facing::Z, material)
    }

    /// Square of edge `size` centred on `center`, perpendicular to `facing`.
    ///
    /// `size` must be positive.
    pub fn oriented(center: Vec3, size: f32, facing: Facing, material: impl Into<Material>) -> Self {
        debug_assert!(size > 0.0, "Square::oriented: size must be positive, got {size}");
        let material = material.into();
        let h = size * 0.5;

        // Corners in the square's local (a, b) frame, counter-clockwise.
        let corner = |a: f32, b: f32| match facing {
            Facing::Z => center + Vec3::new(a, b, 0.0),
            Facing::Y => center + Vec3::new(a, 0.0, b),
            Facing::X => center + Vec3::new(0.0, a, b),
        };
        let p0 = corner(-h, -h);
        let p1 = corner(h, -h);
        let p2 = corner(h, h);
        let p3 = corner(-h, h);

        Self {
            triangles: [
                Triangle::new(p0, p1, p2, material),
                Triangle::new(p0, p2, p3, material),
            ],
            facing,
        }
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle; 2] {
        &self.triangles
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[inline]
    pub fn material(&self) -> &Material {
        self.triangles[0].material()
    }

    /// Unit normal along the facing axis.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        match self.facing {
            Facing::Z => Vec3::new(0.0, 0.0, 1.0),
            Facing::Y => Vec3::new(0.0, 1.0, 0.0),
            Facing::X => Vec3::new(1.0, 0.0, 0.0),
        }
    }

    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let [a, b] = &self.triangles;
        match (a.intersect(origin, direction), b.intersect(origin, direction)) {
            (Some(ta), Some(tb)) => Some(ta.min(tb)),
            (hit, None) | (None, hit) => hit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn centered(facing: Facing) -> Square {
        Square::oriented(Vec3::zero(), 2.0, facing, Color::white())
    }

    #[test]
    fn hit_at_center_along_negative_normal() {
        for facing in [Facing::Z, Facing::Y, Facing::X] {
            let sq = centered(facing);
            let n = sq.normal();
            let t = sq.intersect(n * 5.0, -n);
            assert_eq!(t, Some(5.0), "{facing:?}");
        }
    }

    #[test]
    fn miss_outside_extent() {
        let sq = centered(Facing::Z);
        let d = Vec3::new(0.0, 0.0, -1.0);
        assert_eq!(sq.intersect(Vec3::new(1.5, 0.0, 5.0), d), None);
        assert_eq!(sq.intersect(Vec3::new(0.0, -1.01, 5.0), d), None);
        assert_eq!(sq.intersect(Vec3::new(1.2, 1.2, 5.0), d), None);
    }

    #[test]
    fn hits_both_halves() {
        let sq = centered(Facing::Z);
        let d = Vec3::new(0.0, 0.0, -1.0);
        // Below and above the shared diagonal.
        assert_eq!(sq.intersect(Vec3::new(0.5, -0.5, 3.0), d), Some(3.0));
        assert_eq!(sq.intersect(Vec3::new(-0.5, 0.5, 3.0), d), Some(3.0));
    }

    #[test]
    fn offset_center_moves_extent() {
        let sq = Square::new(Vec3::new(10.0, 0.0, 4.0), 2.0, Color::white());
        let d = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(sq.intersect(Vec3::new(10.5, 0.5, 0.0), d), Some(4.0));
        assert_eq!(sq.intersect(Vec3::new(0.0, 0.0, 0.0), d), None);
    }
}
