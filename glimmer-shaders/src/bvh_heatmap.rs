use glimmer_gpu::prelude::*;

/// Number of visited nodes that maps onto the last color of the gradient.
pub const MAX_TRAVERSED_NODES: f32 = 128.0;

pub fn main(
    global_id: UVec2,
    scene: SceneView,
    camera: &Camera,
    out: &mut impl Framebuffer,
) {
    let screen_pos = global_id;

    if !camera.contains(screen_pos) {
        return;
    }

    let (_, traversed_nodes) =
        scene.first_intersection(camera.ray(screen_pos));

    let color = gradient(
        [
            vec3(0.0, 0.0, 1.0),
            vec3(0.0, 1.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 0.0, 0.0),
        ],
        traversed_nodes as f32 / MAX_TRAVERSED_NODES,
    );

    out.write(screen_pos, color.extend(1.0));
}

/// Maps the traversal cost onto a color ramp.
///
/// `colors` are the ramp's stops, spaced evenly over `0.0..=1.0`; `progress`
/// below zero picks the first stop and above one picks the last stop.
pub fn gradient<const N: usize>(colors: [Vec3; N], progress: f32) -> Vec3 {
    if progress <= 0.0 {
        return colors[0];
    }

    let step = 1.0 / (N as f32 - 1.0);

    for i in 0..(N - 1) {
        let min = step * (i as f32);
        let max = step * (i as f32 + 1.0);

        if progress >= min && progress <= max {
            let rhs = (progress - min) / step;
            let lhs = 1.0 - rhs;

            return lhs * colors[i] + rhs * colors[i + 1];
        }
    }

    colors[N - 1]
}
