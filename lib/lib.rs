pub mod camera;
pub mod error;
pub mod film;
pub mod light;
pub mod materials;
pub mod ray;
pub mod render;
pub mod shade;
pub mod shapes;
pub mod surface;
pub mod tracer;
pub mod util;
pub mod world;

pub type Color = glam::Vec3;

pub use camera::Camera;
pub use error::{FilmError, RenderError, RenderResult, SceneError};
pub use film::{Film, PpmFormat};
pub use light::PointLight;
pub use materials::{Material, MaterialId};
pub use ray::Ray;
pub use render::{render, render_to_file, RenderConfig};
pub use shapes::{Parallelepiped, Plane, Shape, Sphere, Square, Triangle};
pub use surface::{Surface, SurfaceIntersection};
pub use tracer::WhittedTracer;
pub use world::World;
