//! Common structs, algorithms etc. used by Glimmer's passes and renderer.

#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]

mod brdf;
mod bvh_node;
mod bvh_stack;
mod bvh_view;
mod camera;
mod framebuffer;
mod ground;
mod hit;
mod ray;
mod scene;
mod surface;
mod texture;
mod triangle;
mod triangles;
mod utils;
mod world;

pub use self::brdf::*;
pub use self::bvh_node::*;
pub use self::bvh_stack::*;
pub use self::bvh_view::*;
pub use self::camera::*;
pub use self::framebuffer::*;
pub use self::ground::*;
pub use self::hit::*;
pub use self::ray::*;
pub use self::scene::*;
pub use self::surface::*;
pub use self::texture::*;
pub use self::triangle::*;
pub use self::triangles::*;
pub use self::utils::*;
pub use self::world::*;

pub mod prelude {
    pub use core::f32::consts::PI;

    pub use glam::*;

    pub use crate::*;
}

/// Maximum number of entries on the stack used when traversing the BVH.
///
/// Affects the maximum depth of the BVH tree: a tree deeper than
/// `BVH_STACK_SIZE - 1` levels overflows the stack during traversal.
pub const BVH_STACK_SIZE: usize = 64;

/// Threshold used to reject near-parallel rays and near-zero distances.
pub const EPSILON: f32 = 1e-6;

/// Multiplier of the scene's radius that bounds the distance of any hit.
pub const MAX_SCENE_BOUNDS: f32 = 100.0;
