use glam::Vec3;

use crate::{BvhStack, BvhView, Hit, TrianglesView};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    inv_direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            inv_direction: 1.0 / direction,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Returns the distance at which this ray enters given box, or zero if
    /// the ray starts inside of it.
    ///
    /// Zero direction-components produce infinities which the min/max
    /// reduction takes care of.
    pub fn intersect_bounding_box(
        &self,
        bb_min: Vec3,
        bb_max: Vec3,
    ) -> Option<f32> {
        let hit_min = (bb_min - self.origin) * self.inv_direction;
        let hit_max = (bb_max - self.origin) * self.inv_direction;

        let t_near = hit_min.min(hit_max).max_element().max(0.0);
        let t_far = hit_min.max(hit_max).min_element();

        if t_near <= t_far {
            Some(t_near)
        } else {
            None
        }
    }

    /// Traces this ray and returns its nearest hit closer than
    /// `max_distance`, together with the number of visited nodes.
    pub fn trace_nearest(
        self,
        triangles: TrianglesView,
        bvh: BvhView,
        max_distance: f32,
    ) -> (Hit, u32) {
        let mut hit = Hit {
            distance: max_distance,
            ..Hit::none()
        };

        let mut traversed_nodes = 0;

        if bvh.is_empty() {
            return (hit, traversed_nodes);
        }

        let root = bvh.get(0);

        let Some(root_distance) =
            self.intersect_bounding_box(root.bb_min(), root.bb_max())
        else {
            return (hit, traversed_nodes);
        };

        let mut stack = BvhStack::<(u32, f32)>::new();

        stack.push((0, root_distance));

        while let Some((bvh_ptr, entry_distance)) = stack.pop() {
            // A node we entered further than our current best shot can't
            // contain anything closer
            if entry_distance >= hit.distance {
                continue;
            }

            traversed_nodes += 1;

            let node = bvh.get(bvh_ptr);

            if node.is_leaf() {
                for triangle_id in node.triangles() {
                    let triangle = triangles.get(triangle_id);

                    let Some(triangle_hit) = triangle.hit(self) else {
                        continue;
                    };

                    if triangle_hit.distance < hit.distance {
                        hit = Hit::triangle(triangle_id, triangle_hit);
                    }
                }

                continue;
            }

            let left_ptr = bvh_ptr + 1;
            let right_ptr = node.right_ptr();
            let left = bvh.get(left_ptr);
            let right = bvh.get(right_ptr);

            let left_distance =
                self.intersect_bounding_box(left.bb_min(), left.bb_max());

            let right_distance =
                self.intersect_bounding_box(right.bb_min(), right.bb_max());

            match (left_distance, right_distance) {
                (Some(left_distance), Some(right_distance)) => {
                    let mut near = (left_ptr, left_distance);
                    let mut far = (right_ptr, right_distance);

                    if far.1 < near.1 {
                        (near, far) = (far, near);
                    }

                    // Nearer child goes on top
                    stack.push(far);
                    stack.push(near);
                }

                (Some(left_distance), None) => {
                    stack.push((left_ptr, left_distance));
                }

                (None, Some(right_distance)) => {
                    stack.push((right_ptr, right_distance));
                }

                (None, None) => {}
            }
        }

        (hit, traversed_nodes)
    }

    /// Traces this ray and returns whether it hits anything closer than
    /// `max_distance`.
    pub fn trace_any(
        self,
        triangles: TrianglesView,
        bvh: BvhView,
        max_distance: f32,
    ) -> bool {
        if bvh.is_empty() {
            return false;
        }

        let mut stack = BvhStack::<u32>::new();

        stack.push(0);

        while let Some(bvh_ptr) = stack.pop() {
            let node = bvh.get(bvh_ptr);

            if self
                .intersect_bounding_box(node.bb_min(), node.bb_max())
                .is_none()
            {
                continue;
            }

            if node.is_leaf() {
                for triangle_id in node.triangles() {
                    if let Some(hit) = triangles.get(triangle_id).hit(self) {
                        if hit.distance < max_distance {
                            return true;
                        }
                    }
                }
            } else {
                stack.push(node.right_ptr());
                stack.push(bvh_ptr + 1);
            }
        }

        false
    }
}
