use glam::*;

use crate::ray::Ray;
use crate::util::is_near_zero;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    cu: Vec3,
    cv: Vec3,
    cw: Vec3,
    half_w: f32,
    half_h: f32,
    exposure: f32,
}

impl Camera {
    pub fn new(origin: Vec3, target: Vec3, up: Vec3, vertical_fov: f32, aspect_ratio: f32) -> Camera {
        let theta = vertical_fov.to_radians();

        let half_h = (theta * 0.5).tan();
        let half_w = half_h * aspect_ratio;

        let cw = (origin - target).normalize_or_zero();
        let cu = up.cross(cw).normalize_or_zero();
        let cv = cw.cross(cu);

        return Camera { origin, cu, cv, cw, half_w, half_h, exposure: 1.0 };
    }

    pub fn with_exposure(mut self, exposure: f32) -> Camera {
        self.exposure = exposure;
        self
    }

    pub fn exposure_time(&self) -> f32 {
        self.exposure
    }

    pub fn is_degenerate(&self) -> bool {
        is_near_zero(self.cw) || is_near_zero(self.cu)
    }

    // y grows upward, pixel (i, j) is centered at (i + 0.5, j + 0.5)
    pub fn gen_ray(&self, width: u32, height: u32, x: f32, y: f32) -> Ray {
        let s = (2.0 * x / width as f32 - 1.0) * self.half_w;
        let t = (2.0 * y / height as f32 - 1.0) * self.half_h;

        let direction = (s * self.cu + t * self.cv - self.cw).normalize();

        return Ray::new(self.origin, direction);
    }
}
