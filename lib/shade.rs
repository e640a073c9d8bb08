use crate::light::PointLight;
use crate::ray::Ray;
use crate::surface::SurfaceIntersection;
use crate::tracer::WhittedTracer;
use crate::world::World;
use crate::Color;
use glam::*;

pub trait Shade: Send + Sync {
    fn shade(&self, r: &Ray, intersection: &SurfaceIntersection, ctx: &ShadingContext) -> Color;
}

pub struct ShadingContext<'a> {
    pub world: &'a World,
    pub tracer: &'a WhittedTracer,
    pub depth: u32,
}

impl<'a> ShadingContext<'a> {
    pub fn lights(&self) -> &'a [PointLight] {
        &self.world.lights
    }

    pub fn trace(&self, r: &Ray) -> Color {
        self.tracer.trace_ray(r, self.world, self.depth + 1)
    }

    pub fn is_lit(&self, p: Vec3, light: &PointLight) -> bool {
        if !self.tracer.shadows {
            return true;
        }

        let to_light = light.position - p;
        let dist = to_light.length();
        if dist <= 2.0 * self.tracer.epsilon {
            return true;
        }

        let shadow_ray = Ray::new(p, to_light / dist);
        self.world.raycast_any(&shadow_ray, self.tracer.epsilon, dist - self.tracer.epsilon).is_none()
    }
}
