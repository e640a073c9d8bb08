use crate::error::SceneError;
use crate::light::PointLight;
use crate::materials::{Material, MaterialId};
use crate::ray::Ray;
use crate::shapes::Shape;
use crate::surface::{Surface, SurfaceIntersection};

#[derive(Debug, Clone, Default)]
pub struct World {
    pub surfaces: Vec<Shape>,
    pub materials: Vec<Material>,
    pub lights: Vec<PointLight>,
}

impl World {
    pub fn new() -> World {
        World { surfaces: Vec::new(), materials: Vec::new(), lights: Vec::new() }
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn add(&mut self, shape: impl Into<Shape>) -> Result<(), SceneError> {
        let shape = shape.into();
        self.check_material(&shape, self.surfaces.len())?;
        log::debug!("added {} #{}", shape.kind(), self.surfaces.len());
        self.surfaces.push(shape);
        Ok(())
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    // surfaces is public, shapes may bypass add
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, shape) in self.surfaces.iter().enumerate() {
            self.check_material(shape, index)?;
        }
        Ok(())
    }

    fn check_material(&self, shape: &Shape, index: usize) -> Result<(), SceneError> {
        let material = shape.material();
        if self.material(material).is_none() {
            return Err(SceneError::UnknownMaterial {
                shape: shape.kind(),
                index,
                material: material.0,
                available: self.materials.len(),
            });
        }
        Ok(())
    }

    /// First hit found in `(t_min, t_max)`, not necessarily the nearest.
    pub fn raycast_any(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        self.surfaces.iter().find_map(|obj| obj.raycast(r, t_min, t_max))
    }
}

impl Surface for World {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let mut result = None;
        let mut t_nearest = t_max;

        for obj in &self.surfaces {
            if let Some(intersection) = obj.raycast(r, t_min, t_nearest) {
                t_nearest = intersection.t;
                result = Some(intersection);
            }
        }

        return result;
    }
}
