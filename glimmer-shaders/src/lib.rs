//! Per-pixel passes of the renderer.
//!
//! Each pass exposes a `main()` that's invoked once per pixel of the dispatch
//! grid; invocations outside of the camera's screen are no-ops.

pub mod bvh_heatmap;
pub mod ray_tracing;

#[cfg(test)]
mod test_utils;
