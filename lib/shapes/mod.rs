mod parallelepiped;
mod plane;
mod sphere;
mod square;
mod triangle;

pub use parallelepiped::Parallelepiped;
pub use plane::Plane;
pub use sphere::Sphere;
pub use square::Square;
pub use triangle::{Barycentric, Triangle};

use crate::materials::MaterialId;
use crate::ray::Ray;
use crate::surface::{Surface, SurfaceIntersection};

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
    Square(Square),
    Parallelepiped(Parallelepiped),
}

impl Shape {
    pub fn material(&self) -> MaterialId {
        match self {
            Shape::Plane(s) => s.material,
            Shape::Sphere(s) => s.material,
            Shape::Triangle(s) => s.material,
            Shape::Square(s) => s.plane.material,
            Shape::Parallelepiped(s) => s.material,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Plane(_) => "plane",
            Shape::Sphere(_) => "sphere",
            Shape::Triangle(_) => "triangle",
            Shape::Square(_) => "square",
            Shape::Parallelepiped(_) => "parallelepiped",
        }
    }
}

impl Surface for Shape {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        match self {
            Shape::Plane(s) => s.raycast(r, t_min, t_max),
            Shape::Sphere(s) => s.raycast(r, t_min, t_max),
            Shape::Triangle(s) => s.raycast(r, t_min, t_max),
            Shape::Square(s) => s.raycast(r, t_min, t_max),
            Shape::Parallelepiped(s) => s.raycast(r, t_min, t_max),
        }
    }
}

impl From<Plane> for Shape {
    fn from(s: Plane) -> Shape {
        Shape::Plane(s)
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Shape {
        Shape::Sphere(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Shape {
        Shape::Triangle(s)
    }
}

impl From<Square> for Shape {
    fn from(s: Square) -> Shape {
        Shape::Square(s)
    }
}

impl From<Parallelepiped> for Shape {
    fn from(s: Parallelepiped) -> Shape {
        Shape::Parallelepiped(s)
    }
}
