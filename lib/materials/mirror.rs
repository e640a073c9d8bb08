use crate::ray::Ray;
use crate::shade::{Shade, ShadingContext};
use crate::surface::SurfaceIntersection;
use crate::util::reflect;
use crate::Color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IdealMirror {
    pub albedo: Color,
}

impl IdealMirror {
    pub fn new(albedo: Color) -> IdealMirror {
        IdealMirror { albedo }
    }
}

impl Shade for IdealMirror {
    fn shade(&self, r: &Ray, intersection: &SurfaceIntersection, ctx: &ShadingContext) -> Color {
        let reflected_direction = reflect(r.direction, intersection.normal);
        let reflected = Ray::new(intersection.p, reflected_direction);

        return self.albedo * ctx.trace(&reflected);
    }
}
