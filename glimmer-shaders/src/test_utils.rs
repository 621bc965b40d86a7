use core::f32::consts::FRAC_PI_2;

use glimmer_gpu::prelude::*;

/// Framebuffer that remembers every write.
#[derive(Default)]
pub struct Recorder {
    pub writes: Vec<(UVec2, Vec4)>,
}

impl Recorder {
    pub fn get(&self, screen_pos: UVec2) -> Option<Vec4> {
        self.writes
            .iter()
            .find(|(pos, _)| *pos == screen_pos)
            .map(|(_, color)| *color)
    }
}

impl Framebuffer for Recorder {
    fn write(&mut self, screen_pos: UVec2, color: Vec4) {
        self.writes.push((screen_pos, color));
    }
}

/// A single triangle at `z = 5` that covers the entire view of [`camera()`].
pub const VERTICES: [Vec4; 3] = [
    Vec4::new(-20.0, -20.0, 5.0, 1.0),
    Vec4::new(20.0, -20.0, 5.0, 1.0),
    Vec4::new(0.0, 20.0, 5.0, 1.0),
];

pub const NORMALS: [Vec4; 3] = [Vec4::new(0.0, 0.0, -1.0, 0.0); 3];

pub const INDICES: [u32; 3] = [0, 1, 2];

pub fn nodes() -> [BvhNode; 1] {
    [BvhNode::leaf(
        vec3(-20.0, -20.0, 5.0),
        vec3(20.0, 20.0, 5.0),
        0,
        1,
    )]
}

/// Scene made of the triangle above.
pub fn wall<'a>(nodes: &'a [BvhNode], world: &'a World) -> SceneView<'a> {
    SceneView::new(
        TrianglesView::new(&VERTICES, &NORMALS, &[], &INDICES),
        BvhView::new(nodes),
        world,
    )
}

/// Scene without any meshes, only the ground.
pub fn empty(world: &World) -> SceneView<'_> {
    SceneView::new(
        TrianglesView::new(&[], &[], &[], &[]),
        BvhView::new(&[]),
        world,
    )
}

/// Ground far enough not to be visible in front of the triangle.
pub fn world() -> World {
    World::default().with_ground(100.0, 10.0)
}

/// 8x8 camera at the origin with a 90° field of view.
pub fn camera(target: Vec3) -> Camera {
    let view = Mat4::look_at_rh(Vec3::ZERO, target, Vec3::Y);
    let projection = Mat4::perspective_rh_gl(FRAC_PI_2, 1.0, 0.1, 100.0);

    Camera::new(view.inverse(), projection.inverse(), uvec2(8, 8))
}

/// Screen positions of a 2x2 grid of 8x8 workgroups.
pub fn dispatch_grid() -> impl Iterator<Item = UVec2> {
    (0..16).flat_map(|y| (0..16).map(move |x| uvec2(x, y)))
}
