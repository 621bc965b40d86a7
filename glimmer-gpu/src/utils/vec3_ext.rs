use glam::Vec3;

pub trait Vec3Ext
where
    Self: Sized,
{
    /// Normalizes the sum of two unit vectors, falling back to `fallback`
    /// when they cancel each other out.
    fn half_vector(self, other: Self, fallback: Self) -> Self;
}

impl Vec3Ext for Vec3 {
    fn half_vector(self, other: Self, fallback: Self) -> Self {
        (self + other).try_normalize().unwrap_or(fallback)
    }
}
