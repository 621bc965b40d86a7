use glam::{Vec2, Vec4};

/// Source of the ground's color.
pub trait GroundTexture {
    /// Samples the texture at given normalized coordinates.
    fn sample(&self, uv: Vec2) -> Vec4;
}

/// Solid color.
impl GroundTexture for Vec4 {
    fn sample(&self, _: Vec2) -> Vec4 {
        *self
    }
}

impl<T> GroundTexture for &T
where
    T: GroundTexture + ?Sized,
{
    fn sample(&self, uv: Vec2) -> Vec4 {
        (**self).sample(uv)
    }
}
