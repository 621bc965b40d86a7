use glam::{Vec3, Vec4, Vec4Swizzles};

use crate::{Triangle, TriangleId};

/// Read-only view over the mesh buffers.
///
/// Every consecutive triple of `indices` names one triangle; `normals` and
/// `colors` are either empty or indexed the same way as `vertices`.
#[derive(Clone, Copy)]
pub struct TrianglesView<'a> {
    vertices: &'a [Vec4],
    normals: &'a [Vec4],
    colors: &'a [Vec4],
    indices: &'a [u32],
}

impl<'a> TrianglesView<'a> {
    pub fn new(
        vertices: &'a [Vec4],
        normals: &'a [Vec4],
        colors: &'a [Vec4],
        indices: &'a [u32],
    ) -> Self {
        Self {
            vertices,
            normals,
            colors,
            indices,
        }
    }

    pub fn get(self, id: TriangleId) -> Triangle {
        Triangle::new(self.indices_of(id).map(|idx| self.vertices[idx].xyz()))
    }

    /// Returns vertex normals of given triangle, if the mesh has any.
    pub fn normals(self, id: TriangleId) -> Option<[Vec3; 3]> {
        if self.normals.is_empty() {
            return None;
        }

        Some(self.indices_of(id).map(|idx| self.normals[idx].xyz()))
    }

    /// Returns vertex colors of given triangle, if the mesh has any.
    pub fn colors(self, id: TriangleId) -> Option<[Vec4; 3]> {
        if self.colors.is_empty() {
            return None;
        }

        Some(self.indices_of(id).map(|idx| self.colors[idx]))
    }

    /// Returns the number of triangles.
    pub fn len(self) -> usize {
        self.indices.len() / 3
    }

    fn indices_of(self, id: TriangleId) -> [usize; 3] {
        let vptr = id.vptr();

        [
            self.indices[vptr] as usize,
            self.indices[vptr + 1] as usize,
            self.indices[vptr + 2] as usize,
        ]
    }
}

#[cfg(test)]
mod tests {
    use glam::{vec3, vec4};

    use super::*;

    const VERTICES: [Vec4; 4] = [
        Vec4::new(0.0, 0.0, 0.0, 1.0),
        Vec4::new(1.0, 0.0, 0.0, 1.0),
        Vec4::new(0.0, 1.0, 0.0, 1.0),
        Vec4::new(1.0, 1.0, 0.0, 1.0),
    ];

    const INDICES: [u32; 6] = [0, 1, 2, 2, 1, 3];

    #[test]
    fn get() {
        let target = TrianglesView::new(&VERTICES, &[], &[], &INDICES);

        assert_eq!(2, target.len());

        assert_eq!(
            [vec3(0.0, 1.0, 0.0), vec3(1.0, 0.0, 0.0), vec3(1.0, 1.0, 0.0)],
            target.get(TriangleId::new(1)).positions
        );
    }

    #[test]
    fn attributes() {
        let colors = [
            vec4(1.0, 0.0, 0.0, 1.0),
            vec4(0.0, 1.0, 0.0, 1.0),
            vec4(0.0, 0.0, 1.0, 1.0),
            vec4(1.0, 1.0, 1.0, 1.0),
        ];

        let target = TrianglesView::new(&VERTICES, &[], &colors, &INDICES);

        assert_eq!(None, target.normals(TriangleId::new(0)));

        assert_eq!(
            Some([colors[2], colors[1], colors[3]]),
            target.colors(TriangleId::new(1))
        );
    }
}
