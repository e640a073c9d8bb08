use crate::materials::MaterialId;
use crate::ray::Ray;
use glam::*;

/// Hits are reported only for finite `t` strictly inside `(t_min, t_max)`.
pub trait Surface: Send + Sync {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection>;
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceIntersection {
    pub p: Vec3,
    pub normal: Vec3,
    pub facing: bool,
    pub material: MaterialId,
    pub t: f32,
}

impl SurfaceIntersection {
    pub fn new(r: &Ray, t: f32, normal: Vec3, material: MaterialId) -> SurfaceIntersection {
        let facing = r.direction.dot(normal) < 0.0;
        SurfaceIntersection { p: r.at(t), normal, facing, material, t }
    }

    pub fn shading_normal(&self) -> Vec3 {
        if self.facing {
            self.normal
        } else {
            -self.normal
        }
    }
}

pub(crate) fn in_range(t: f32, t_min: f32, t_max: f32) -> bool {
    t.is_finite() && t > t_min && t < t_max
}
