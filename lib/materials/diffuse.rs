use crate::ray::Ray;
use crate::shade::{Shade, ShadingContext};
use crate::surface::SurfaceIntersection;
use crate::Color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Diffuse {
    pub albedo: Color,
}

impl Diffuse {
    pub fn new(albedo: Color) -> Diffuse {
        Diffuse { albedo }
    }
}

impl Shade for Diffuse {
    fn shade(&self, _r: &Ray, intersection: &SurfaceIntersection, ctx: &ShadingContext) -> Color {
        let normal = intersection.shading_normal();
        let mut color = Color::ZERO;

        for light in ctx.lights() {
            let to_light = (light.position - intersection.p).normalize_or_zero();
            let cos_theta = normal.dot(to_light);

            if cos_theta <= 0.0 || !ctx.is_lit(intersection.p, light) {
                continue;
            }

            color += self.albedo * light.color * cos_theta;
        }

        return color;
    }
}
