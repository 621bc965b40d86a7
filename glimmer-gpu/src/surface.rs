use glam::{vec3, vec4, Vec3, Vec4};

use crate::{Ground, GroundTexture, Hit, Primitive, Ray, TrianglesView};

/// Local surface at a hit point, as seen by the shading models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub point: Vec3,
    pub normal: Vec3,
    pub color: Vec4,
}

impl Surface {
    /// Color used for meshes without per-vertex colors.
    pub const FALLBACK_COLOR: Vec4 = vec4(0.5, 0.5, 0.5, 1.0);

    /// Normal used for meshes without per-vertex normals.
    pub const FALLBACK_NORMAL: Vec3 = Vec3::Y;

    /// Interpolates attributes of whatever `hit` points at; returns `None`
    /// for misses.
    pub fn resolve(
        triangles: TrianglesView,
        ground: Ground,
        ground_tex: &impl GroundTexture,
        ray: Ray,
        hit: Hit,
    ) -> Option<Self> {
        let point = ray.at(hit.distance);

        match hit.primitive? {
            Primitive::Triangle(triangle_id) => {
                let [u, v, w] = [hit.uv.x, hit.uv.y, hit.w];

                let normal = triangles
                    .normals(triangle_id)
                    .and_then(|[n0, n1, n2]| {
                        (w * n0 + u * n1 + v * n2).try_normalize()
                    })
                    .unwrap_or(Self::FALLBACK_NORMAL);

                let color = triangles
                    .colors(triangle_id)
                    .map(|[c0, c1, c2]| w * c0 + u * c1 + v * c2)
                    .unwrap_or(Self::FALLBACK_COLOR);

                Some(Self {
                    point,
                    normal,
                    color,
                })
            }

            Primitive::Ground => Some(Self {
                // Snapped to avoid z-fighting caused by the drift in `at()`
                point: vec3(point.x, ground.height(), point.z),
                normal: Ground::NORMAL,
                color: ground_tex.sample(hit.uv),
            }),
        }
    }
}
