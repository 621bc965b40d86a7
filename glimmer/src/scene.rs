use glam::Vec4;
use glimmer_gpu::{
    BvhNode, BvhView, SceneView, TrianglesView, World, BVH_STACK_SIZE,
};
use log::{info, warn};

use crate::SceneError;

/// Validated geometry buffers, ready to be rendered.
///
/// The BVH is expected to be laid out in depth-first order: an interior
/// node's left child directly follows it and its right child comes after
/// the whole left subtree.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    vertices: Vec<Vec4>,
    normals: Vec<Vec4>,
    colors: Vec<Vec4>,
    indices: Vec<u32>,
    bvh: Vec<BvhNode>,
}

impl Scene {
    pub fn new(
        vertices: Vec<Vec4>,
        indices: Vec<u32>,
        bvh: Vec<BvhNode>,
    ) -> Result<Self, SceneError> {
        Self::builder()
            .with_vertices(vertices)
            .with_indices(indices)
            .with_bvh(bvh)
            .build()
    }

    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    pub fn triangles(&self) -> TrianglesView<'_> {
        TrianglesView::new(
            &self.vertices,
            &self.normals,
            &self.colors,
            &self.indices,
        )
    }

    pub fn bvh(&self) -> BvhView<'_> {
        BvhView::new(&self.bvh)
    }

    pub fn view<'a>(&'a self, world: &'a World) -> SceneView<'a> {
        SceneView::new(self.triangles(), self.bvh(), world)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn validate(&self) -> Result<(), SceneError> {
        self.validate_indices()?;
        self.validate_attributes()?;

        if self.bvh.is_empty() {
            if self.triangle_count() > 0 {
                warn!(
                    "Scene has {} triangles, but no BVH - they won't be \
                     visible",
                    self.triangle_count()
                );
            }

            return Ok(());
        }

        let depth = self.validate_bvh()?;

        info!(
            "Scene validated; triangles={}, bvh_nodes={}, bvh_depth={}",
            self.triangle_count(),
            self.bvh.len(),
            depth,
        );

        Ok(())
    }

    fn validate_indices(&self) -> Result<(), SceneError> {
        if self.indices.len() % 3 != 0 {
            return Err(SceneError::IncompleteTriangle {
                len: self.indices.len(),
            });
        }

        for (position, &index) in self.indices.iter().enumerate() {
            if index as usize >= self.vertices.len() {
                return Err(SceneError::IndexOutOfBounds {
                    position,
                    index,
                    vertices: self.vertices.len(),
                });
            }
        }

        Ok(())
    }

    fn validate_attributes(&self) -> Result<(), SceneError> {
        for (attribute, buffer) in
            [("normal", &self.normals), ("color", &self.colors)]
        {
            if !buffer.is_empty() && buffer.len() != self.vertices.len() {
                return Err(SceneError::AttributeLengthMismatch {
                    attribute,
                    actual: buffer.len(),
                    expected: self.vertices.len(),
                });
            }
        }

        Ok(())
    }

    /// Walks the entire tree and returns its depth.
    fn validate_bvh(&self) -> Result<usize, SceneError> {
        let len = self.bvh.len();
        let mut visited = vec![false; len];
        let mut pending = vec![(0u32, 0usize)];
        let mut max_depth = 0;

        while let Some((ptr, depth)) = pending.pop() {
            if visited[ptr as usize] {
                return Err(SceneError::SharedNode { node: ptr });
            }

            visited[ptr as usize] = true;
            max_depth = max_depth.max(depth);

            // Nearest-hit traversal keeps at most `depth + 1` nodes on its
            // stack
            if depth + 1 > BVH_STACK_SIZE {
                return Err(SceneError::BvhTooDeep {
                    depth,
                    max: BVH_STACK_SIZE - 1,
                });
            }

            let node = self.bvh[ptr as usize];

            if node.is_leaf() {
                let end = node.index() as u64 + node.triangle_count() as u64;

                if end > self.triangle_count() as u64 {
                    return Err(SceneError::LeafOutOfBounds {
                        node: ptr,
                        first: node.index(),
                        end,
                        triangles: self.triangle_count(),
                    });
                }

                continue;
            }

            let left_ptr = ptr + 1;
            let right_ptr = node.right_ptr();

            for child in [left_ptr, right_ptr] {
                if child <= ptr || child as usize >= len {
                    return Err(SceneError::ChildOutOfBounds {
                        node: ptr,
                        child,
                        len,
                    });
                }
            }

            pending.push((right_ptr, depth + 1));
            pending.push((left_ptr, depth + 1));
        }

        Ok(max_depth)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    /// Vertex positions; `w` is ignored.
    pub fn with_vertices(mut self, vertices: Vec<Vec4>) -> Self {
        self.scene.vertices = vertices;
        self
    }

    /// Per-vertex normals; `w` is ignored.
    pub fn with_normals(mut self, normals: Vec<Vec4>) -> Self {
        self.scene.normals = normals;
        self
    }

    /// Per-vertex RGBA colors.
    pub fn with_colors(mut self, colors: Vec<Vec4>) -> Self {
        self.scene.colors = colors;
        self
    }

    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.scene.indices = indices;
        self
    }

    pub fn with_bvh(mut self, bvh: Vec<BvhNode>) -> Self {
        self.scene.bvh = bvh;
        self
    }

    pub fn build(self) -> Result<Scene, SceneError> {
        self.scene.validate()?;

        Ok(self.scene)
    }
}
