use crate::ray::Ray;
use crate::shade::{Shade, ShadingContext};
use crate::surface::Surface;
use crate::world::World;
use crate::Color;

pub const DEFAULT_MAX_DEPTH: u32 = 16;
pub const DEFAULT_EPSILON: f32 = 1e-3;
pub const DEFAULT_BACKGROUND: Color = Color::new(0.1, 0.1, 0.1);

#[derive(Debug, Clone, PartialEq)]
pub struct WhittedTracer {
    pub max_depth: u32,
    pub background: Color,
    pub epsilon: f32,
    pub shadows: bool,
}

impl Default for WhittedTracer {
    fn default() -> Self {
        WhittedTracer::new(DEFAULT_MAX_DEPTH, DEFAULT_BACKGROUND)
    }
}

impl WhittedTracer {
    pub fn new(max_depth: u32, background: Color) -> WhittedTracer {
        WhittedTracer { max_depth, background, epsilon: DEFAULT_EPSILON, shadows: true }
    }

    pub fn trace_ray(&self, ray: &Ray, world: &World, depth: u32) -> Color {
        if depth > self.max_depth {
            return self.background;
        }

        let Some(intersection) = world.raycast(ray, self.epsilon, f32::INFINITY) else {
            return self.background;
        };

        // only reachable for a world that skipped validate()
        let Some(material) = world.material(intersection.material) else {
            log::warn!("hit references unknown material {}", intersection.material.0);
            return self.background;
        };

        let ctx = ShadingContext { world, tracer: self, depth };
        return material.shade(ray, &intersection, &ctx);
    }
}
