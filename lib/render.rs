use std::path::Path;

use rand::Rng;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::{RenderResult, SceneError};
use crate::film::{Film, PpmFormat};
use crate::tracer::{WhittedTracer, DEFAULT_BACKGROUND, DEFAULT_EPSILON, DEFAULT_MAX_DEPTH};
use crate::world::World;
use crate::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// One sample hits the pixel center, more are jittered.
    pub samples: u32,
    pub max_depth: u32,
    pub background: Color,
    pub epsilon: f32,
    pub shadows: bool,
    pub format: PpmFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            samples: 1,
            max_depth: DEFAULT_MAX_DEPTH,
            background: DEFAULT_BACKGROUND,
            epsilon: DEFAULT_EPSILON,
            shadows: true,
            format: PpmFormat::Binary,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn tracer(&self) -> WhittedTracer {
        WhittedTracer {
            max_depth: self.max_depth,
            background: self.background,
            epsilon: self.epsilon,
            shadows: self.shadows,
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidResolution { width: self.width, height: self.height });
        }
        if self.samples == 0 {
            return Err(SceneError::NoSamples);
        }
        Ok(())
    }
}

pub fn render(world: &World, camera: &Camera, config: &RenderConfig) -> RenderResult<Film> {
    config.validate()?;
    world.validate()?;
    if camera.is_degenerate() {
        return Err(SceneError::DegenerateCamera.into());
    }
    if world.lights.is_empty() {
        log::warn!("scene has no lights, diffuse surfaces will render black");
    }

    log::info!(
        "rendering {}x{} with {} samples per pixel, {} shapes, {} lights",
        config.width,
        config.height,
        config.samples,
        world.surfaces.len(),
        world.lights.len()
    );

    let tracer = config.tracer();
    let mut film = Film::new(config.width, config.height);

    // disjoint rows, read-only world
    film.pixels.par_chunks_mut(config.width as usize).enumerate().for_each(|(y, row)| {
        // film rows run top to bottom, camera rows bottom to top
        let cam_y = config.height - 1 - y as u32;
        log::debug!("scanline {}", cam_y);

        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = render_pixel(world, camera, &tracer, config, x as u32, cam_y);
        }
    });

    log::info!("render finished");
    Ok(film)
}

pub fn render_pixel(
    world: &World,
    camera: &Camera,
    tracer: &WhittedTracer,
    config: &RenderConfig,
    x: u32,
    y: u32,
) -> Color {
    let mut c = Color::ZERO;

    for _ in 0..config.samples {
        let (jx, jy) = if config.samples == 1 {
            (0.5, 0.5)
        } else {
            let mut rng = rand::thread_rng();
            (rng.gen::<f32>(), rng.gen::<f32>())
        };

        let ray = camera.gen_ray(config.width, config.height, x as f32 + jx, y as f32 + jy);
        c += tracer.trace_ray(&ray, world, 0);
    }

    return c / config.samples as f32 * camera.exposure_time();
}

pub fn render_to_file(
    world: &World,
    camera: &Camera,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> RenderResult<Film> {
    let film = render(world, camera, config)?;
    film.save_ppm(path, config.format)?;
    Ok(film)
}
