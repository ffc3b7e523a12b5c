//! Scene primitives.
//!
//! Responsibilities:
//! - one ray/primitive intersection test per shape, each in its own file
//! - a single `Primitive` sum type the scene scans without dynamic dispatch
//!
//! Contract shared by every shape: `intersect(origin, direction)` returns the
//! parametric distance `t > 0` along `direction` (not necessarily unit length)
//! to the nearest visible surface point, or `None`. Misses and degenerate
//! geometry are both `None`; nothing here fails.

mod plane;
mod sphere;
mod square;
mod triangle;

pub use plane::Plane;
pub use sphere::Sphere;
pub use square::{Facing, Square};
pub use triangle::Triangle;

use crate::math::Vec3;
use crate::paint::{Color, Material};

/// Any shape the scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
    Square(Square),
}

impl Primitive {
    #[inline]
    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        match self {
            Primitive::Sphere(s) => s.intersect(origin, direction),
            Primitive::Plane(p) => p.intersect(origin, direction),
            Primitive::Triangle(t) => t.intersect(origin, direction),
            Primitive::Square(q) => q.intersect(origin, direction),
        }
    }

    #[inline]
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => s.material(),
            Primitive::Plane(p) => p.material(),
            Primitive::Triangle(t) => t.material(),
            Primitive::Square(q) => q.material(),
        }
    }

    /// Surface color at a world-space point on this primitive.
    #[inline]
    pub fn color_at(&self, point: Vec3) -> Color {
        self.material().color_at(point)
    }

    /// Short shape name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Plane(_) => "plane",
            Primitive::Triangle(_) => "triangle",
            Primitive::Square(_) => "square",
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Plane> for Primitive {
    fn from(p: Plane) -> Self {
        Primitive::Plane(p)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}

impl From<Square> for Primitive {
    fn from(q: Square) -> Self {
        Primitive::Square(q)
    }
}
