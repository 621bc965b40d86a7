//! CPU renderer that evaluates Glimmer's per-pixel passes over a thread pool.

mod dispatcher;
mod error;
mod frame;
mod scene;
mod texture;

use std::time::Instant;

pub use glimmer_gpu as gpu;
pub use glimmer_gpu::{
    BvhNode, Camera, CameraMode, GroundTexture, ShadingModel, World,
};
use glimmer_shaders::{bvh_heatmap, ray_tracing};
use log::{debug, info, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};

pub use self::dispatcher::*;
pub use self::error::*;
pub use self::frame::*;
pub use self::scene::*;
pub use self::texture::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of worker threads; defaults to the number of logical cores.
    pub threads: Option<usize>,
}

impl EngineConfig {
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

pub struct Engine {
    pool: ThreadPool,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let mut builder = ThreadPoolBuilder::new()
            .thread_name(|idx| format!("glimmer-worker-{idx}"));

        if let Some(threads) = config.threads {
            builder = builder.num_threads(threads);
        }

        let pool = builder.build()?;

        info!("Initializing; threads={}", pool.current_num_threads());

        Ok(Self { pool })
    }

    /// Renders a single frame of `scene` as seen through `camera`.
    ///
    /// Depending on camera's mode, either shades the scene or visualizes
    /// the cost of traversing its BVH.
    pub fn render<T>(
        &self,
        scene: &Scene,
        world: &World,
        camera: &Camera,
        ground_tex: &T,
        frame: &mut Frame,
    ) -> Result<(), EngineError>
    where
        T: GroundTexture + Sync + ?Sized,
    {
        if camera.screen_size() != frame.size() {
            return Err(EngineError::FrameSizeMismatch {
                camera: camera.screen_size(),
                frame: frame.size(),
            });
        }

        if frame.size().x == 0 || frame.size().y == 0 {
            warn!("Skipping frame of size {}", frame.size());
            return Ok(());
        }

        let tt = Instant::now();
        let mode = camera.mode();
        let scene = scene.view(world);

        match mode {
            CameraMode::Image => {
                dispatch(&self.pool, frame, |global_id, out| {
                    ray_tracing::main(
                        global_id,
                        scene,
                        camera,
                        &ground_tex,
                        out,
                    );
                });
            }

            CameraMode::BvhHeatmap => {
                dispatch(&self.pool, frame, |global_id, out| {
                    bvh_heatmap::main(global_id, scene, camera, out);
                });
            }
        }

        debug!(
            "Frame rendered; mode={:?}, size={}, workgroups={}, tt={:?}",
            mode,
            frame.size(),
            workgroups(frame.size()),
            tt.elapsed(),
        );

        Ok(())
    }
}
