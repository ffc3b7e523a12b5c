use crate::math::Vec3;
use crate::paint::Color;
use crate::primitive::Primitive;

/// Closest intersection along a ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hit {
    /// Parametric distance along the query direction.
    pub distance: f32,
    /// Surface color at the hit point (before distance shading).
    pub color: Color,
    /// Index of the primitive in scan order.
    pub index: usize,
}

/// Ordered, immutable collection of primitives.
///
/// Built once at setup; nearest-hit queries are a linear scan. Scan order only
/// matters for ties, where the earlier primitive wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    #[inline]
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    /// Builder-style append, used while assembling a scene.
    #[inline]
    pub fn with(mut self, primitive: impl Into<Primitive>) -> Self {
        self.primitives.push(primitive.into());
        self
    }

    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Nearest primitive hit by the ray, or `None` for background.
    pub fn nearest_hit(&self, origin: Vec3, direction: Vec3) -> Option<Hit> {
        let mut best: Option<(usize, f32)> = None;

        for (index, prim) in self.primitives.iter().enumerate() {
            let Some(t) = prim.intersect(origin, direction) else { continue };
            // Strict comparison keeps the first primitive on ties.
            if best.is_none_or(|(_, best_t)| t < best_t) {
                best = Some((index, t));
            }
        }

        let (index, distance) = best?;
        let point = origin + direction * distance;
        Some(Hit {
            distance,
            color: self.primitives[index].color_at(point),
            index,
        })
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
