use crate::materials::MaterialId;
use crate::ray::Ray;
use crate::surface::{in_range, Surface, SurfaceIntersection};
use glam::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> Sphere {
        return Sphere { center, radius, material };
    }
}

impl Surface for Sphere {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let oc = r.origin - self.center;
        let a = r.direction.length_squared();
        let b = (2.0 * r.direction).dot(oc);
        let c = oc.length_squared() - (self.radius * self.radius);

        if a == 0.0 {
            return None;
        }

        let discriminant = (b * b) - (4.0 * a * c);

        if discriminant < 0.0 {
            return None;
        }

        let discriminant_sqrt = discriminant.sqrt();

        let root_lower = (-b - discriminant_sqrt) / (2.0 * a);
        let root_upper = (-b + discriminant_sqrt) / (2.0 * a);

        let t = if in_range(root_lower, t_min, t_max) {
            root_lower
        } else if in_range(root_upper, t_min, t_max) {
            root_upper
        } else {
            return None;
        };

        let p = r.at(t);
        let normal = (p - self.center).normalize();

        return Some(SurfaceIntersection::new(r, t, normal, self.material));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, MaterialId(0))
    }

    #[test]
    fn test_sphere_reports_near_root() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = unit_sphere().raycast(&ray, 0.001, f32::INFINITY).expect("ray should hit");

        assert!((hit.t - 4.0).abs() < 1e-5);
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
        assert!(hit.facing);
    }

    #[test]
    fn test_sphere_unnormalized_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));
        let hit = unit_sphere().raycast(&ray, 0.001, f32::INFINITY).expect("ray should hit");

        assert!((hit.t - 2.0).abs() < 1e-5);
        assert!((hit.p - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-5);
    }

    #[test]
    fn test_sphere_far_root_when_near_clipped() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = unit_sphere().raycast(&ray, 4.5, f32::INFINITY).expect("far side should hit");

        assert!((hit.t - 6.0).abs() < 1e-5);
        assert!(!hit.facing);
    }

    #[test]
    fn test_sphere_from_inside() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::X);
        let hit = unit_sphere().raycast(&ray, 0.001, f32::INFINITY).expect("inside ray should hit");

        assert!((hit.t - 1.0).abs() < 1e-5);
        assert!((hit.normal - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let past = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Z);
        let away = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(unit_sphere().raycast(&past, 0.001, f32::INFINITY).is_none());
        assert!(unit_sphere().raycast(&away, 0.001, f32::INFINITY).is_none());
    }

    #[test]
    fn test_sphere_zero_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(unit_sphere().raycast(&ray, 0.001, f32::INFINITY).is_none());
    }
}
