use bytemuck::{Pod, Zeroable};
use glam::{vec2, vec4, Mat4, UVec2, Vec2, Vec3, Vec4, Vec4Swizzles};

use crate::Ray;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Camera {
    pub inverse_view: Mat4,

    /// Inverse of an OpenGL-style projection matrix (clip-space depth in
    /// `-1..=1`), e.g. `Mat4::perspective_rh_gl(...).inverse()`
    pub inverse_projection: Mat4,

    /// x, y - screen size
    pub screen: Vec4,

    /// x - (as u32) camera mode, see [`CameraMode`]
    pub data: Vec4,
}

impl Camera {
    /// NDC depth of the near view plane.
    const NEAR_PLANE: f32 = -1.0;

    pub fn new(
        inverse_view: Mat4,
        inverse_projection: Mat4,
        screen_size: UVec2,
    ) -> Self {
        Self {
            inverse_view,
            inverse_projection,
            screen: screen_size.as_vec2().extend(0.0).extend(0.0),
            data: vec4(
                f32::from_bits(CameraMode::Image.into_raw()),
                0.0,
                0.0,
                0.0,
            ),
        }
    }

    pub fn with_mode(mut self, mode: CameraMode) -> Self {
        self.data.x = f32::from_bits(mode.into_raw());
        self
    }

    pub fn mode(&self) -> CameraMode {
        CameraMode::from_raw(self.data.x.to_bits())
    }

    pub fn screen_size(&self) -> UVec2 {
        self.screen.xy().as_uvec2()
    }

    /// Returns whether given pixel is a part of the image.
    pub fn contains(&self, pos: UVec2) -> bool {
        let screen_size = self.screen_size();

        pos.x < screen_size.x && pos.y < screen_size.y
    }

    /// Returns the eye position in world-coordinates.
    pub fn origin(&self) -> Vec3 {
        self.inverse_view.transform_point3(Vec3::ZERO)
    }

    /// Casts a ray from the eye through the center of given pixel.
    ///
    /// Pixel rows grow downwards, so the first row looks at the top of the
    /// view plane.
    pub fn ray(&self, screen_pos: UVec2) -> Ray {
        let ndc = (screen_pos.as_vec2() + 0.5) * 2.0 / self.screen.xy()
            - Vec2::ONE;

        let ndc = vec2(ndc.x, -ndc.y);

        let near_plane =
            self.inverse_projection * ndc.extend(Self::NEAR_PLANE).extend(1.0);

        let direction = (near_plane.xyz() / near_plane.w).normalize();
        let direction = self.inverse_view.transform_vector3(direction);

        Ray::new(self.origin(), direction.normalize())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    /// Shaded image
    #[default]
    Image,

    /// Number of BVH nodes visited per pixel
    BvhHeatmap,
}

impl CameraMode {
    const IMAGE: u32 = 0;
    const BVH_HEATMAP: u32 = 1;

    pub fn from_raw(raw: u32) -> Self {
        if raw == Self::BVH_HEATMAP {
            Self::BvhHeatmap
        } else {
            Self::Image
        }
    }

    pub fn into_raw(self) -> u32 {
        match self {
            Self::Image => Self::IMAGE,
            Self::BvhHeatmap => Self::BVH_HEATMAP,
        }
    }
}
