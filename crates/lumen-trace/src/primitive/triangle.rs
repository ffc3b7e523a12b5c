use crate::math::{cross, dot, Vec3};
use crate::paint::Material;

const EPSILON: f32 = 1e-6;

/// Single triangle, visible from both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Vec3; 3],
    material: Material,
}

impl Triangle {
    #[inline]
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: impl Into<Material>) -> Self {
        Self { vertices: [v0, v1, v2], material: material.into() }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Geometric normal `(v1 - v0) × (v2 - v0)`; its sign follows the winding.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        cross(v1 - v0, v2 - v0)
    }

    /// Möller–Trumbore ray/triangle test.
    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let [v0, v1, v2] = self.vertices;
        let e1 = v1 - v0;
        let e2 = v2 - v0;

        let pvec = cross(direction, e2);
        let det = dot(e1, pvec);
        if !(det.abs() >= EPSILON) {
            return None; // parallel to the triangle, or degenerate
        }
        let inv_det = 1.0 / det;

        let tvec = origin - v0;
        let u = dot(tvec, pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = cross(tvec, e1);
        let v = dot(direction, qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = dot(e2, qvec) * inv_det;
        (t > 0.0).then_some(t)
    }
}
