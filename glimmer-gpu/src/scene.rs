use crate::{BvhView, Ground, Hit, Ray, TrianglesView, World};

/// Everything a pixel needs to know to intersect rays with the scene.
///
/// The mesh and the ground are two independent candidate surfaces: the
/// ground is never a part of the BVH and both get merged by distance.
#[derive(Clone, Copy)]
pub struct SceneView<'a> {
    pub triangles: TrianglesView<'a>,
    pub bvh: BvhView<'a>,
    pub world: &'a World,
}

impl<'a> SceneView<'a> {
    pub fn new(
        triangles: TrianglesView<'a>,
        bvh: BvhView<'a>,
        world: &'a World,
    ) -> Self {
        Self {
            triangles,
            bvh,
            world,
        }
    }

    pub fn ground(&self) -> Ground {
        Ground::new(self.world)
    }

    /// Returns the nearest hit of given ray and the number of BVH nodes
    /// visited while looking for it.
    pub fn first_intersection(&self, ray: Ray) -> (Hit, u32) {
        let max_distance = self.world.max_distance();

        let (mut hit, traversed_nodes) =
            ray.trace_nearest(self.triangles, self.bvh, max_distance);

        if let Some(ground_hit) = self.ground().hit(ray) {
            if ground_hit.distance < hit.distance {
                hit = ground_hit;
            }
        }

        (hit, traversed_nodes)
    }

    /// Returns whether given ray hits anything at all.
    pub fn is_intersected(&self, ray: Ray) -> bool {
        let max_distance = self.world.max_distance();

        if let Some(ground_hit) = self.ground().hit(ray) {
            if ground_hit.distance < max_distance {
                return true;
            }
        }

        ray.trace_any(self.triangles, self.bvh, max_distance)
    }
}
