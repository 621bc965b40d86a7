use glimmer_gpu::prelude::*;

/// Color written for rays that escape the scene.
pub const BACKGROUND: Vec4 = vec4(0.0, 0.0, 0.0, 1.0);

pub fn main(
    global_id: UVec2,
    scene: SceneView,
    camera: &Camera,
    ground_tex: &impl GroundTexture,
    out: &mut impl Framebuffer,
) {
    let screen_pos = global_id;

    if !camera.contains(screen_pos) {
        return;
    }

    let world = scene.world;
    let ray = camera.ray(screen_pos);
    let (hit, _) = scene.first_intersection(ray);
    let ground = scene.ground();

    let color = Surface::resolve(scene.triangles, ground, ground_tex, ray, hit)
        .map(|surface| {
            world
                .shading_model()
                .eval(world, &surface, -ray.direction())
                .extend(surface.color.w)
        })
        .unwrap_or(BACKGROUND);

    out.write(screen_pos, color);
}
