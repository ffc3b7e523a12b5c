//! Surface appearance of primitives.
//!
//! Scope:
//! - output color representation (8-bit sRGB)
//! - materials resolved at a hit point

pub mod color;

pub use color::Color;

use crate::math::Vec3;

/// How a primitive is colored where a ray hits it.
///
/// Extend by adding variants while keeping `color_at` exhaustive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Material {
    Solid(Color),
    /// Alternating squares on the world XZ grid, `cell` units wide.
    Checker { even: Color, odd: Color, cell: f32 },
}

impl Material {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Material::Solid(color)
    }

    #[inline]
    pub fn checker(even: Color, odd: Color) -> Self {
        Material::Checker { even, odd, cell: 1.0 }
    }

    /// Resolves the material color at a world-space hit point.
    ///
    /// Checker parity is `(floor(p.x / cell) + floor(p.z / cell)) mod 2`. A
    /// non-positive or non-finite `cell` falls back to `even`.
    pub fn color_at(&self, point: Vec3) -> Color {
        match *self {
            Material::Solid(c) => c,
            Material::Checker { even, odd, cell } => {
                if cell <= 0.0 || !cell.is_finite() || !point.is_finite() {
                    return even;
                }
                let ix = (point.x / cell).floor() as i64;
                let iz = (point.z / cell).floor() as i64;
                if (ix + iz).rem_euclid(2) == 0 { even } else { odd }
            }
        }
    }
}

impl From<Color> for Material {
    fn from(c: Color) -> Self {
        Material::Solid(c)
    }
}
