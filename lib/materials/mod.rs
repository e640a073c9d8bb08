mod diffuse;
mod mirror;

pub use diffuse::Diffuse;
pub use mirror::IdealMirror;

use crate::ray::Ray;
use crate::shade::{Shade, ShadingContext};
use crate::surface::SurfaceIntersection;
use crate::Color;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Material {
    IdealMirror(IdealMirror),
    Diffuse(Diffuse),
}

impl Material {
    pub fn mirror(albedo: Color) -> Material {
        Material::IdealMirror(IdealMirror::new(albedo))
    }

    pub fn diffuse(albedo: Color) -> Material {
        Material::Diffuse(Diffuse::new(albedo))
    }
}

impl Shade for Material {
    fn shade(&self, r: &Ray, intersection: &SurfaceIntersection, ctx: &ShadingContext) -> Color {
        match self {
            Material::IdealMirror(m) => m.shade(r, intersection, ctx),
            Material::Diffuse(m) => m.shade(r, intersection, ctx),
        }
    }
}
