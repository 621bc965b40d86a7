//! Renders a pyramid standing on a checkerboard ground and saves it as PNG.
//!
//! ```text
//! cargo run --example pyramid -- [output.png] [--heatmap] [--cook-torrance]
//! ```

use std::env;
use std::error::Error;

use glam::{uvec2, vec3, vec4, Mat4, Vec3, Vec4};
use glimmer::{
    BvhNode, Camera, CameraMode, Engine, EngineConfig, Frame, Scene,
    ShadingModel, Texture, World,
};
use log::info;

const SIZE: (u32, u32) = (640, 480);

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut output = String::from("pyramid.png");
    let mut mode = CameraMode::Image;
    let mut shading_model = ShadingModel::BlinnPhong;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--heatmap" => mode = CameraMode::BvhHeatmap,
            "--cook-torrance" => shading_model = ShadingModel::CookTorrance,
            _ => output = arg,
        }
    }

    let scene = pyramid()?;

    let world = World::default()
        .with_light(vec3(-3.0, 6.0, -4.0), 1.0)
        .with_shininess(40.0)
        .with_shading_model(shading_model);

    let camera = {
        let size = uvec2(SIZE.0, SIZE.1);
        let view = Mat4::look_at_rh(vec3(3.0, 2.0, -4.0), Vec3::ZERO, Vec3::Y);

        let projection = Mat4::perspective_rh_gl(
            45.0_f32.to_radians(),
            size.x as f32 / size.y as f32,
            0.1,
            100.0,
        );

        Camera::new(view.inverse(), projection.inverse(), size).with_mode(mode)
    };

    let engine = Engine::new(EngineConfig::default())?;
    let mut frame = Frame::new(camera.screen_size());

    engine.render(&scene, &world, &camera, &checkerboard()?, &mut frame)?;
    frame.to_image().save(&output)?;

    info!("Saved `{output}`");

    Ok(())
}

fn pyramid() -> Result<Scene, Box<dyn Error>> {
    let apex = vec3(0.0, 1.0, 0.0);

    let base = [
        vec3(-1.0, -1.0, -1.0),
        vec3(1.0, -1.0, -1.0),
        vec3(1.0, -1.0, 1.0),
        vec3(-1.0, -1.0, 1.0),
    ];

    let colors = [
        vec4(0.9, 0.3, 0.2, 1.0),
        vec4(0.2, 0.8, 0.3, 1.0),
        vec4(0.2, 0.4, 0.9, 1.0),
        vec4(0.9, 0.8, 0.2, 1.0),
    ];

    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut vertex_colors = Vec::new();

    // Four flat-shaded faces, each with its own vertices
    for (face, color) in colors.into_iter().enumerate() {
        let a = base[face];
        let b = base[(face + 1) % base.len()];
        let normal = (apex - a).cross(b - a).normalize();

        for position in [a, b, apex] {
            vertices.push(position.extend(1.0));
            normals.push(normal.extend(0.0));
            vertex_colors.push(color);
        }
    }

    let indices = (0..vertices.len() as u32).collect();
    let (min, max) = bounds(&vertices);

    // First two faces on the left, remaining two on the right
    let bvh = vec![
        BvhNode::interior(min, max, 2),
        leaf(&vertices[0..6], 0, 2),
        leaf(&vertices[6..12], 2, 2),
    ];

    let scene = Scene::builder()
        .with_vertices(vertices)
        .with_normals(normals)
        .with_colors(vertex_colors)
        .with_indices(indices)
        .with_bvh(bvh)
        .build()?;

    Ok(scene)
}

fn leaf(vertices: &[Vec4], first: u32, count: u32) -> BvhNode {
    let (min, max) = bounds(vertices);

    BvhNode::leaf(min, max, first, count)
}

fn bounds(vertices: &[Vec4]) -> (Vec3, Vec3) {
    vertices.iter().fold(
        (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
        |(min, max), vertex| {
            (min.min(vertex.truncate()), max.max(vertex.truncate()))
        },
    )
}

fn checkerboard() -> Result<Texture, Box<dyn Error>> {
    const CELLS: u32 = 8;

    let texels = (0..CELLS * CELLS)
        .map(|idx| {
            if (idx % CELLS + idx / CELLS) % 2 == 0 {
                vec4(0.9, 0.9, 0.9, 1.0)
            } else {
                vec4(0.2, 0.2, 0.2, 1.0)
            }
        })
        .collect();

    Ok(Texture::new(uvec2(CELLS, CELLS), texels)?)
}
