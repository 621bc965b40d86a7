use core::f32::consts::PI;

use glam::{Vec3, Vec4Swizzles};

use crate::{F32Ext, Surface, Vec3Ext, World};

/// Ambient factor.
pub const KA: f32 = 0.5;

/// Diffuse factor.
pub const KD: f32 = 0.3;

/// Local illumination model used to shade hit points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadingModel {
    #[default]
    BlinnPhong,
    CookTorrance,
}

impl ShadingModel {
    const BLINN_PHONG: u32 = 0;
    const COOK_TORRANCE: u32 = 1;

    pub fn from_raw(raw: u32) -> Self {
        if raw == Self::COOK_TORRANCE {
            Self::CookTorrance
        } else {
            Self::BlinnPhong
        }
    }

    pub fn into_raw(self) -> u32 {
        match self {
            Self::BlinnPhong => Self::BLINN_PHONG,
            Self::CookTorrance => Self::COOK_TORRANCE,
        }
    }

    /// Computes direct illumination of `surface` by the world's point light,
    /// as seen from `v` (the direction from the surface towards the eye).
    ///
    /// The light is never tested for occluders.
    pub fn eval(self, world: &World, surface: &Surface, v: Vec3) -> Vec3 {
        let color = surface.color.xyz();
        let n = surface.normal;
        let l = (world.light_position() - surface.point).normalize();
        let intensity = world.light_intensity();

        let ambient = color * KA * intensity;
        let diffuse = KD * color * n.dot(l).max(0.0) * intensity;

        let specular = match self {
            Self::BlinnPhong => BlinnPhong::new(world).eval(color, n, l, v),
            Self::CookTorrance => CookTorrance::new(world).eval(color, n, l, v),
        };

        ambient + diffuse + specular * intensity
    }
}

#[derive(Clone, Copy, Debug)]
pub struct BlinnPhong {
    pub shininess: f32,
    pub eta: f32,
}

impl BlinnPhong {
    pub fn new(world: &World) -> Self {
        Self {
            shininess: world.shininess,
            eta: world.eta,
        }
    }

    pub fn eval(self, color: Vec3, n: Vec3, l: Vec3, v: Vec3) -> Vec3 {
        let h = v.half_vector(l, n);
        let cos_theta = n.dot(v);

        fresnel(cos_theta, self.eta)
            * color
            * n.dot(h).max(0.0).powf(self.shininess)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CookTorrance {
    /// Roughness of the geometric term
    pub alpha_g: f32,

    /// Roughness of the normal distribution term
    pub alpha_d: f32,

    pub eta: f32,
}

impl CookTorrance {
    pub fn new(world: &World) -> Self {
        Self {
            alpha_g: world.shininess / 400.0,
            alpha_d: world.shininess / 200.0,
            eta: world.eta,
        }
    }

    pub fn eval(self, color: Vec3, n: Vec3, l: Vec3, v: Vec3) -> Vec3 {
        let cos_in = n.dot(l);
        let cos_out = n.dot(v);

        if cos_in <= 0.0 || cos_out <= 0.0 {
            return Vec3::ZERO;
        }

        let h = v.half_vector(l, n);
        let f = fresnel(h.dot(l), self.eta);
        let d = d_ggx(n.dot(h), self.alpha_d);
        let g_in = g1(cos_in, self.alpha_g);
        let g_out = g1(cos_out, self.alpha_g);

        color * f * d * g_in * g_out / (4.0 * cos_in * cos_out)
    }
}

/// Dielectric Fresnel reflectance, averaged over the s- and p-polarization.
///
/// In the total internal reflection regime (`eta < 1`, steep angles) the
/// radicand is clamped to zero, which yields a reflectance of one; the same
/// goes for grazing angles where both terms degenerate.
pub fn fresnel(cos_theta: f32, eta: f32) -> f32 {
    let cos_theta = cos_theta.saturate();
    let eta_sqr = eta.sqr();
    let ci = (eta_sqr - 1.0 + cos_theta.sqr()).max(0.0).sqrt();

    let fs_den = cos_theta + ci;
    let fp_den = eta_sqr * cos_theta + ci;

    if fs_den <= 0.0 || fp_den <= 0.0 {
        return 1.0;
    }

    let fs = ((cos_theta - ci) / fs_den).sqr();
    let fp = ((eta_sqr * cos_theta - ci) / fp_den).sqr();

    (fs + fp) / 2.0
}

/// Smith shadowing-masking term for one direction.
pub fn g1(cos_theta: f32, alpha: f32) -> f32 {
    2.0 / (1.0 + (1.0 + alpha.sqr() * cos_theta.tan_sqr_from_cos()).sqrt())
}

/// GGX normal distribution.
pub fn d_ggx(cos_theta_h: f32, alpha: f32) -> f32 {
    if cos_theta_h <= 0.0 {
        return 0.0;
    }

    let alpha_sqr = alpha.sqr();
    let den = PI
        * cos_theta_h.sqr().sqr()
        * (alpha_sqr + cos_theta_h.tan_sqr_from_cos()).sqr();

    if den <= 0.0 {
        0.0
    } else {
        alpha_sqr / den
    }
}
