use crate::materials::MaterialId;
use crate::ray::Ray;
use crate::surface::{in_range, Surface, SurfaceIntersection};
use glam::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Parallelepiped {
    pub min: Vec3,
    pub max: Vec3,
    pub material: MaterialId,
}

impl Parallelepiped {
    pub fn new(a: Vec3, b: Vec3, material: MaterialId) -> Parallelepiped {
        Parallelepiped { min: a.min(b), max: a.max(b), material }
    }

    // (t_enter, t_exit, entry axis)
    fn slabs(&self, r: &Ray) -> Option<(f32, f32, usize)> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut enter_axis = 0;

        for axis in 0..3 {
            let origin = r.origin[axis];
            let direction = r.direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if direction == 0.0 {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / direction;
            let t1 = (lo - origin) * inv;
            let t2 = (hi - origin) * inv;
            let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };

            if near > t_enter {
                t_enter = near;
                enter_axis = axis;
            }
            t_exit = t_exit.min(far);
        }

        return Some((t_enter, t_exit, enter_axis));
    }
}

impl Surface for Parallelepiped {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let (t_enter, t_exit, axis) = self.slabs(r)?;

        if t_enter > t_exit || t_exit <= 0.0 || !in_range(t_enter, t_min, t_max) {
            return None;
        }

        let mut normal = Vec3::ZERO;
        normal[axis] = -r.direction[axis].signum();

        return Some(SurfaceIntersection::new(r, t_enter, normal, self.material));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> Parallelepiped {
        Parallelepiped::new(Vec3::splat(-1.0), Vec3::splat(1.0), MaterialId(0))
    }

    #[test]
    fn test_box_hit_front_face() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = cube().raycast(&ray, 0.001, f32::INFINITY).expect("ray should hit the box");

        assert!((hit.t - 4.0).abs() < 1e-6);
        assert!((hit.p - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
        assert_eq!(hit.normal, Vec3::Z);
        assert!(hit.facing);
    }

    #[test]
    fn test_box_ray_pointing_away() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(cube().raycast(&ray, 0.001, f32::INFINITY).is_none());
    }

    #[test]
    fn test_box_side_face_normal() {
        let ray = Ray::new(Vec3::new(-4.0, 0.5, 0.0), Vec3::X);
        let hit = cube().raycast(&ray, 0.001, f32::INFINITY).expect("ray should hit the box");

        assert!((hit.t - 3.0).abs() < 1e-6);
        assert_eq!(hit.normal, Vec3::NEG_X);
    }

    #[test]
    fn test_box_axis_parallel_miss() {
        // zero x/y direction components outside the slab must not produce NaN hits
        let ray = Ray::new(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(cube().raycast(&ray, 0.001, f32::INFINITY).is_none());
    }

    #[test]
    fn test_box_origin_on_slab_boundary() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = cube().raycast(&ray, 0.001, f32::INFINITY).expect("grazing ray should hit");
        assert!((hit.t - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_box_from_inside_is_rejected() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(cube().raycast(&ray, 0.001, f32::INFINITY).is_none());
    }

    #[test]
    fn test_box_corners_are_sorted() {
        let b = Parallelepiped::new(Vec3::new(1.0, -1.0, 2.0), Vec3::new(-1.0, 1.0, 0.0), MaterialId(0));
        assert_eq!(b.min, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_box_respects_interval() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(cube().raycast(&ray, 0.001, 3.0).is_none());
    }
}
