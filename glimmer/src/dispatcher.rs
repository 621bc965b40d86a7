use glam::{uvec2, UVec2, Vec4};
use glimmer_gpu::Framebuffer;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::Frame;

/// Width and height of a single workgroup, in pixels.
pub const WORKGROUP_SIZE: u32 = 8;

/// Returns the number of workgroups needed to cover an image of given size.
pub fn workgroups(size: UVec2) -> UVec2 {
    (size + WORKGROUP_SIZE - 1) / WORKGROUP_SIZE
}

/// Invokes `pass` once for every pixel of the dispatch grid covering `frame`.
///
/// Each row of workgroups owns a distinct band of the frame, so bands are
/// processed in parallel without any synchronization.
pub fn dispatch<F>(pool: &ThreadPool, frame: &mut Frame, pass: F)
where
    F: Fn(UVec2, &mut FrameBand<'_>) + Sync,
{
    let size = frame.size();

    if size.x == 0 || size.y == 0 {
        return;
    }

    let workgroups = workgroups(size);
    let band_len = (size.x * WORKGROUP_SIZE) as usize;

    pool.install(|| {
        frame
            .pixels_mut()
            .par_chunks_mut(band_len)
            .enumerate()
            .for_each(|(band_idx, pixels)| {
                let mut band = FrameBand {
                    width: size.x,
                    first_row: band_idx as u32 * WORKGROUP_SIZE,
                    pixels,
                };

                for group_x in 0..workgroups.x {
                    for local_y in 0..WORKGROUP_SIZE {
                        for local_x in 0..WORKGROUP_SIZE {
                            let global_id = uvec2(
                                group_x * WORKGROUP_SIZE + local_x,
                                band.first_row + local_y,
                            );

                            pass(global_id, &mut band);
                        }
                    }
                }
            });
    });
}

/// Rows of the frame covered by a single row of workgroups.
pub struct FrameBand<'a> {
    width: u32,
    first_row: u32,
    pixels: &'a mut [Vec4],
}

impl Framebuffer for FrameBand<'_> {
    fn write(&mut self, screen_pos: UVec2, color: Vec4) {
        if screen_pos.x >= self.width || screen_pos.y < self.first_row {
            return;
        }

        let idx = (screen_pos.y - self.first_row) * self.width + screen_pos.x;

        if let Some(pixel) = self.pixels.get_mut(idx as usize) {
            *pixel = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use glam::vec4;
    use rayon::ThreadPoolBuilder;

    use super::*;

    fn pool() -> ThreadPool {
        ThreadPoolBuilder::new().num_threads(4).build().unwrap()
    }

    #[test]
    fn workgroups() {
        assert_eq!(uvec2(1, 1), super::workgroups(uvec2(1, 1)));
        assert_eq!(uvec2(1, 1), super::workgroups(uvec2(8, 8)));
        assert_eq!(uvec2(2, 3), super::workgroups(uvec2(9, 17)));
    }

    #[test]
    fn covers_whole_grid() {
        let mut frame = Frame::new(uvec2(13, 9));
        let invocations = AtomicU32::new(0);

        dispatch(&pool(), &mut frame, |global_id, band| {
            invocations.fetch_add(1, Ordering::Relaxed);

            band.write(
                global_id,
                vec4(global_id.x as f32, global_id.y as f32, 0.0, 1.0),
            );
        });

        // 2x2 workgroups
        assert_eq!(256, invocations.into_inner());

        for y in 0..9 {
            for x in 0..13 {
                assert_eq!(
                    Some(vec4(x as f32, y as f32, 0.0, 1.0)),
                    frame.get(uvec2(x, y))
                );
            }
        }
    }

    #[test]
    fn empty_frame() {
        let mut frame = Frame::new(uvec2(0, 5));

        dispatch(&pool(), &mut frame, |_, _| {
            panic!("nothing to dispatch");
        });
    }
}
