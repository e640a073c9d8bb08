use anyhow::{Context, Result};
use glam::Vec3;

use whitted_rt::{
    render_to_file, Camera, Color, Material, Parallelepiped, Plane, PointLight, RenderConfig, Sphere, Square,
    Triangle, World,
};

fn create_world() -> Result<World> {
    let mut world = World::new();

    let floor = world.add_material(Material::mirror(Color::new(0.5, 0.5, 0.5)));
    world.add(Plane::new(Vec3::new(-2.0, -1.0, 0.0), Vec3::Y, floor))?;

    let gold = world.add_material(Material::mirror(Color::new(5.0, 4.0, 0.36)));
    world.add(Sphere::new(Vec3::new(1.0, 1.6, 6.0), 5.5, gold))?;

    let white = world.add_material(Material::diffuse(Color::new(1.0, 1.0, 1.0)));
    world.add(Sphere::new(Vec3::new(8.0, 0.6, 9.0), 1.5, white))?;

    let green = world.add_material(Material::diffuse(Color::new(3.0, 7.0, 2.36)));
    world.add(Triangle::new(Vec3::new(2.0, 10.0, 6.0), Vec3::new(5.0, 15.0, 4.0), Vec3::new(8.0, 10.0, 5.0), green))?;

    let blue = world.add_material(Material::diffuse(Color::new(3.0, 4.0, 7.0)));
    world.add(Square::new(Vec3::new(-4.0, 10.0, 1.0), Vec3::Z, 5.3, blue))?;

    let teal = world.add_material(Material::mirror(Color::new(2.0, 5.0, 4.36)));
    world.add(Parallelepiped::new(Vec3::new(-15.0, 0.0, -10.0), Vec3::new(-11.0, 6.0, -2.0), teal))?;

    world.add_light(PointLight::new(Vec3::new(-15.0, 16.0, 5.0), Color::ONE));

    return Ok(world);
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "image.ppm".to_string());

    let config = RenderConfig::default();
    let world = create_world().context("building scene")?;

    let camera_origin = Vec3::new(0.0, 2.0, 20.0);
    let camera_target = Vec3::new(0.0, 2.0, 0.0);
    let camera_vertical_fov = 90.0;

    let camera = Camera::new(camera_origin, camera_target, Vec3::Y, camera_vertical_fov, config.aspect_ratio());

    render_to_file(&world, &camera, &config, &path).with_context(|| format!("rendering to {}", path))?;

    Ok(())
}
