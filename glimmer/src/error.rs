use glam::UVec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("index buffer has {len} entries, which is not a multiple of three")]
    IncompleteTriangle { len: usize },

    #[error(
        "index #{position} points at vertex {index}, but there are only \
         {vertices} vertices"
    )]
    IndexOutOfBounds {
        position: usize,
        index: u32,
        vertices: usize,
    },

    #[error(
        "{attribute} buffer has {actual} entries, but it must be either \
         empty or as long as the vertex buffer ({expected})"
    )]
    AttributeLengthMismatch {
        attribute: &'static str,
        actual: usize,
        expected: usize,
    },

    #[error(
        "BVH node {node} points at triangles {first}..{end}, but there are \
         only {triangles} triangles"
    )]
    LeafOutOfBounds {
        node: u32,
        first: u32,
        end: u64,
        triangles: usize,
    },

    #[error(
        "BVH node {node} points at child {child}, which is either not after \
         its parent or past the last node ({len} nodes)"
    )]
    ChildOutOfBounds { node: u32, child: u32, len: usize },

    #[error("BVH node {node} is reachable through more than one parent")]
    SharedNode { node: u32 },

    #[error(
        "BVH is {depth} levels deep, but traversal supports at most {max} \
         levels"
    )]
    BvhTooDeep { depth: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("couldn't read image")]
    Image(#[from] image::ImageError),

    #[error("texture must be at least 1x1, got {size}")]
    Empty { size: UVec2 },

    #[error(
        "texture of size {size} needs {expected} texels, but got {actual}"
    )]
    SizeMismatch {
        size: UVec2,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("couldn't spawn the thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("camera renders at {camera}, but the frame is {frame}")]
    FrameSizeMismatch { camera: UVec2, frame: UVec2 },
}
