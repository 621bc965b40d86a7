use std::path::Path;

use glam::{ivec2, uvec2, IVec2, UVec2, Vec2, Vec4};
use glimmer_gpu::GroundTexture;
use image::RgbaImage;
use log::debug;

use crate::TextureError;

/// Ground texture, sampled bilinearly and repeated in both directions.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    size: UVec2,
    texels: Vec<Vec4>,
}

impl Texture {
    /// Creates a texture out of row-major texels.
    pub fn new(size: UVec2, texels: Vec<Vec4>) -> Result<Self, TextureError> {
        if size.x == 0 || size.y == 0 {
            return Err(TextureError::Empty { size });
        }

        let expected = (size.x as usize) * (size.y as usize);

        if texels.len() != expected {
            return Err(TextureError::SizeMismatch {
                size,
                expected,
                actual: texels.len(),
            });
        }

        Ok(Self { size, texels })
    }

    pub fn solid(color: Vec4) -> Self {
        Self {
            size: UVec2::ONE,
            texels: vec![color],
        }
    }

    pub fn from_image(image: &RgbaImage) -> Result<Self, TextureError> {
        let (width, height) = image.dimensions();

        let texels = image
            .pixels()
            .map(|pixel| Vec4::from_array(pixel.0.map(|c| c as f32 / 255.0)))
            .collect();

        Self::new(uvec2(width, height), texels)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();

        debug!("Loading texture `{}`", path.display());

        Self::from_image(&image::open(path)?.to_rgba8())
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    fn texel(&self, pos: IVec2) -> Vec4 {
        let size = self.size.as_ivec2();
        let x = pos.x.rem_euclid(size.x);
        let y = pos.y.rem_euclid(size.y);

        self.texels[(y * size.x + x) as usize]
    }
}

impl GroundTexture for Texture {
    fn sample(&self, uv: Vec2) -> Vec4 {
        // Repeat addressing; keeps the texel coordinates within `i32`
        let uv = uv - uv.floor();

        // Texel centers lay at half-integer coordinates
        let pos = uv * self.size.as_vec2() - 0.5;
        let p00 = pos.floor();
        let weights = pos - p00;
        let p00 = p00.as_ivec2();

        let s00 = self.texel(p00);
        let s10 = self.texel(p00 + ivec2(1, 0));
        let s01 = self.texel(p00 + ivec2(0, 1));
        let s11 = self.texel(p00 + ivec2(1, 1));

        let top = s00.lerp(s10, weights.x);
        let bottom = s01.lerp(s11, weights.x);

        top.lerp(bottom, weights.y)
    }
}
