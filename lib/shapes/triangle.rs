use crate::materials::MaterialId;
use crate::ray::Ray;
use crate::surface::{in_range, Surface, SurfaceIntersection};
use glam::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub material: MaterialId,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Barycentric {
    pub t: f32,
    pub u: f32,
    pub v: f32,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3, material: MaterialId) -> Triangle {
        Triangle { a, b, c, material }
    }

    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a).normalize()
    }

    /// Möller–Trumbore. The interval only feeds the determinant filter.
    pub fn solve(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<Barycentric> {
        let t_vec = r.origin - self.a;
        let e1 = self.b - self.a;
        let e2 = self.c - self.a;
        let q = t_vec.cross(e1);
        let w = r.direction.cross(e2);
        let det = e1.dot(w);

        // legacy filter on det against the ray interval, fires only when t_min > t_max
        if det < t_min && det > t_max {
            return None;
        }

        // ray parallel to the triangle plane, or degenerate triangle
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let u = t_vec.dot(w) / det;
        let v = r.direction.dot(q) / det;

        if !(u.is_finite() && v.is_finite()) || u < 0.0 || v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = e2.dot(q) / det;

        return Some(Barycentric { t, u, v });
    }
}

impl Surface for Triangle {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let bary = self.solve(r, t_min, t_max)?;

        if !in_range(bary.t, t_min, t_max) {
            return None;
        }

        return Some(SurfaceIntersection::new(r, bary.t, self.normal(), self.material));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y, MaterialId(0))
    }

    #[test]
    fn test_triangle_hit() {
        let ray = Ray::new(Vec3::new(0.2, 0.2, 5.0), Vec3::NEG_Z);
        let tri = unit_triangle();

        let bary = tri.solve(&ray, 0.001, f32::INFINITY).expect("ray should hit");
        assert!(bary.u >= 0.0 && bary.v >= 0.0 && bary.u + bary.v <= 1.0);
        assert!((bary.u - 0.2).abs() < 1e-6);
        assert!((bary.v - 0.2).abs() < 1e-6);

        let hit = tri.raycast(&ray, 0.001, f32::INFINITY).expect("ray should hit");
        assert!((hit.t - 5.0).abs() < 1e-6);
        assert!((hit.p - Vec3::new(0.2, 0.2, 0.0)).length() < 1e-6);
        assert!((hit.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_triangle_miss_outside() {
        let ray = Ray::new(Vec3::new(0.8, 0.8, 5.0), Vec3::NEG_Z);
        assert!(unit_triangle().raycast(&ray, 0.001, f32::INFINITY).is_none());

        let ray = Ray::new(Vec3::new(-0.1, 0.5, 5.0), Vec3::NEG_Z);
        assert!(unit_triangle().raycast(&ray, 0.001, f32::INFINITY).is_none());
    }

    #[test]
    fn test_triangle_back_side_hits() {
        let ray = Ray::new(Vec3::new(0.2, 0.2, -5.0), Vec3::Z);
        let hit = unit_triangle().raycast(&ray, 0.001, f32::INFINITY).expect("back side should hit");

        assert!((hit.t - 5.0).abs() < 1e-6);
        assert!(!hit.facing);
    }

    #[test]
    fn test_triangle_parallel_ray() {
        let ray = Ray::new(Vec3::new(0.2, 0.2, 0.0), Vec3::X);
        assert!(unit_triangle().raycast(&ray, f32::NEG_INFINITY, f32::INFINITY).is_none());
    }

    #[test]
    fn test_triangle_degenerate() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0, MaterialId(0));
        let ray = Ray::new(Vec3::new(0.5, 0.0, 5.0), Vec3::NEG_Z);

        assert!(tri.raycast(&ray, 0.001, f32::INFINITY).is_none());
    }

    #[test]
    fn test_triangle_respects_interval() {
        let ray = Ray::new(Vec3::new(0.2, 0.2, 5.0), Vec3::NEG_Z);
        assert!(unit_triangle().raycast(&ray, 0.001, 4.0).is_none());
    }

    #[test]
    fn test_triangle_determinant_filter_inverted_interval() {
        // det is 1.0 here, so an interval with t_min above and t_max below it trips the filter
        let ray = Ray::new(Vec3::new(0.2, 0.2, 5.0), Vec3::NEG_Z);
        assert!(unit_triangle().solve(&ray, 2.0, 0.5).is_none());
        assert!(unit_triangle().solve(&ray, 0.5, 2.0).is_some());
    }
}
