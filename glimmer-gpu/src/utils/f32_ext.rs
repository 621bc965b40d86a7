pub trait F32Ext
where
    Self: Sized,
{
    fn sqr(self) -> Self;
    fn saturate(self) -> Self;

    /// Returns `tan²(θ)` for `self = cos(θ)`.
    fn tan_sqr_from_cos(self) -> Self;
}

impl F32Ext for f32 {
    fn sqr(self) -> Self {
        self * self
    }

    fn saturate(self) -> Self {
        self.clamp(0.0, 1.0)
    }

    fn tan_sqr_from_cos(self) -> Self {
        let cos_sqr = self.sqr();

        (1.0 - cos_sqr) / cos_sqr
    }
}
