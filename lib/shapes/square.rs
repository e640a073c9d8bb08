use crate::materials::MaterialId;
use crate::ray::Ray;
use crate::shapes::Plane;
use crate::surface::{Surface, SurfaceIntersection};
use glam::*;

/// Patch spanning `[0, len]` along both in-plane axes from `plane.point`.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub plane: Plane,
    pub len: f32,
    u_axis: Vec3,
    v_axis: Vec3,
}

impl Square {
    pub fn new(point: Vec3, normal: Vec3, len: f32, material: MaterialId) -> Square {
        let plane = Plane::new(point, normal, material);
        let (u_axis, v_axis) = plane_frame(plane.normal);
        Square { plane, len, u_axis, v_axis }
    }

    pub fn local(&self, p: Vec3) -> Vec2 {
        let offset = p - self.plane.point;
        Vec2::new(offset.dot(self.u_axis), offset.dot(self.v_axis)) / self.len
    }
}

// For a +Z normal this yields (X, Y).
fn plane_frame(normal: Vec3) -> (Vec3, Vec3) {
    let helper = if normal.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let u = (helper - normal * helper.dot(normal)).normalize();
    let v = normal.cross(u);
    (u, v)
}

impl Surface for Square {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let hit = self.plane.raycast(r, t_min, t_max)?;
        let uv = self.local(hit.p);

        if uv.x < 0.0 || uv.y < 0.0 || uv.x > 1.0 || uv.y > 1.0 {
            return None;
        }

        return Some(hit);
    }
}
