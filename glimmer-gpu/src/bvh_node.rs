use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4, Vec4Swizzles};

use crate::TriangleId;

/// Node of a flattened bounding volume hierarchy.
///
/// Nodes are stored depth-first: an interior node's left child immediately
/// follows it, while its right child is addressed explicitly.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct BvhNode {
    /// x, y, z - bounding box min
    /// w - (as u32) right child pointer or first triangle
    pub d0: Vec4,

    /// x, y, z - bounding box max
    /// w - (as u32) number of triangles; zero for interior nodes
    pub d1: Vec4,
}

impl BvhNode {
    pub fn interior(bb_min: Vec3, bb_max: Vec3, right_ptr: u32) -> Self {
        Self {
            d0: bb_min.extend(f32::from_bits(right_ptr)),
            d1: bb_max.extend(f32::from_bits(0)),
        }
    }

    /// Creates a leaf owning triangles `first_triangle..first_triangle +
    /// triangle_count`.
    ///
    /// `triangle_count` must be non-zero, since zero marks interior nodes.
    pub fn leaf(
        bb_min: Vec3,
        bb_max: Vec3,
        first_triangle: u32,
        triangle_count: u32,
    ) -> Self {
        debug_assert!(triangle_count > 0, "leaf nodes must own triangles");

        Self {
            d0: bb_min.extend(f32::from_bits(first_triangle)),
            d1: bb_max.extend(f32::from_bits(triangle_count)),
        }
    }

    pub fn bb_min(&self) -> Vec3 {
        self.d0.xyz()
    }

    pub fn bb_max(&self) -> Vec3 {
        self.d1.xyz()
    }

    pub fn index(&self) -> u32 {
        self.d0.w.to_bits()
    }

    pub fn triangle_count(&self) -> u32 {
        self.d1.w.to_bits()
    }

    pub fn is_leaf(&self) -> bool {
        self.triangle_count() > 0
    }

    pub fn right_ptr(&self) -> u32 {
        self.index()
    }

    /// Returns triangles owned by this node; empty for interior nodes.
    pub fn triangles(&self) -> impl Iterator<Item = TriangleId> {
        let first = self.index();

        (first..first + self.triangle_count()).map(TriangleId::new)
    }
}
