use crate::materials::MaterialId;
use crate::ray::Ray;
use crate::surface::{in_range, Surface, SurfaceIntersection};
use glam::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    pub material: MaterialId,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3, material: MaterialId) -> Plane {
        Plane { point, normal: normal.normalize(), material }
    }
}

impl Surface for Plane {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let denom = r.direction.dot(self.normal);

        // parallel to the plane
        if denom.abs() < f32::EPSILON {
            return None;
        }

        let t = (self.point - r.origin).dot(self.normal) / denom;

        if !in_range(t, t_min, t_max) {
            return None;
        }

        return Some(SurfaceIntersection::new(r, t, self.normal, self.material));
    }
}
