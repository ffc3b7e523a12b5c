use crate::math::{dot, Vec3};
use crate::paint::Material;

/// Sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Creates a sphere. `radius` must be positive.
    #[inline]
    pub fn new(center: Vec3, radius: f32, material: impl Into<Material>) -> Self {
        debug_assert!(radius > 0.0, "Sphere::new: radius must be positive, got {radius}");
        Self { center, radius, material: material.into() }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Distance to the near surface along `direction`.
    ///
    /// Only the near root of the quadratic is considered. A tangent ray
    /// (discriminant exactly zero) misses, and so does a ray whose near root is
    /// behind or at the origin, which includes rays starting inside the sphere.
    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let oc = origin - self.center;
        let a = dot(direction, direction);
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * dot(oc, direction);
        let c = dot(oc, oc) - self.radius * self.radius;

        let disc = b * b - 4.0 * a * c;
        if !(disc > 0.0) {
            return None;
        }

        let t = (-b - disc.sqrt()) / (2.0 * a);
        (t > 0.0).then_some(t)
    }
}
