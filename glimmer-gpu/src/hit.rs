use glam::Vec2;

use crate::{TriangleHit, TriangleId};

/// Surface that got hit by a ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Triangle(TriangleId),
    Ground,
}

/// Nearest intersection found for a ray; lives only for one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub primitive: Option<Primitive>,
    pub distance: f32,

    /// For triangles, barycentric weights of the second and the third vertex;
    /// for the ground, texture coordinates.
    pub uv: Vec2,

    /// For triangles, barycentric weight of the first vertex.
    pub w: f32,
}

impl Hit {
    pub fn none() -> Self {
        Self {
            primitive: None,
            distance: f32::MAX,
            uv: Default::default(),
            w: Default::default(),
        }
    }

    pub fn triangle(id: TriangleId, hit: TriangleHit) -> Self {
        Self {
            primitive: Some(Primitive::Triangle(id)),
            distance: hit.distance,
            uv: Vec2::new(hit.u, hit.v),
            w: hit.w,
        }
    }

    pub fn ground(distance: f32, uv: Vec2) -> Self {
        Self {
            primitive: Some(Primitive::Ground),
            distance,
            uv,
            w: 0.0,
        }
    }

    pub fn is_some(&self) -> bool {
        self.primitive.is_some()
    }

    pub fn is_none(&self) -> bool {
        !self.is_some()
    }
}

impl Default for Hit {
    fn default() -> Self {
        Self::none()
    }
}
