use bytemuck::{Pod, Zeroable};
use glam::{vec3, Vec3, Vec4, Vec4Swizzles};

use crate::{ShadingModel, MAX_SCENE_BOUNDS};

/// Per-frame scene constants.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct World {
    /// x, y, z - light position
    /// w - light intensity
    pub light: Vec4,

    /// Specular exponent (Blinn-Phong) or roughness scale (Cook-Torrance)
    pub shininess: f32,

    /// Relative index of refraction used by the Fresnel term
    pub eta: f32,

    /// Ground lays at `y = -ground_distance`
    pub ground_distance: f32,

    /// Ground texture scale; also bounds the distance of any hit
    pub radius: f32,

    /// See: [`ShadingModel`]
    pub shading_model: u32,

    /// Non-zero if the mesh is transparent; single-bounce shading treats
    /// every surface as opaque
    pub transparent: u32,

    pub _pad0: u32,
    pub _pad1: u32,
}

impl World {
    pub fn with_light(mut self, position: Vec3, intensity: f32) -> Self {
        self.light = position.extend(intensity);
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_eta(mut self, eta: f32) -> Self {
        self.eta = eta;
        self
    }

    pub fn with_ground(mut self, distance: f32, radius: f32) -> Self {
        self.ground_distance = distance;
        self.radius = radius;
        self
    }

    pub fn with_shading_model(mut self, model: ShadingModel) -> Self {
        self.shading_model = model.into_raw();
        self
    }

    pub fn with_transparency(mut self, transparent: bool) -> Self {
        self.transparent = transparent as u32;
        self
    }

    pub fn light_position(&self) -> Vec3 {
        self.light.xyz()
    }

    pub fn light_intensity(&self) -> f32 {
        self.light.w
    }

    pub fn shading_model(&self) -> ShadingModel {
        ShadingModel::from_raw(self.shading_model)
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent != 0
    }

    /// Returns the distance beyond which nothing is considered a hit.
    pub fn max_distance(&self) -> f32 {
        self.radius * MAX_SCENE_BOUNDS
    }
}

impl Default for World {
    fn default() -> Self {
        Self {
            light: vec3(0.0, 10.0, 0.0).extend(1.0),
            shininess: 20.0,
            eta: 1.5,
            ground_distance: 1.0,
            radius: 10.0,
            shading_model: ShadingModel::BlinnPhong.into_raw(),
            transparent: 0,
            _pad0: 0,
            _pad1: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let target = World::default()
            .with_light(vec3(1.0, 2.0, 3.0), 0.5)
            .with_ground(2.0, 4.0)
            .with_shading_model(ShadingModel::CookTorrance);

        assert_eq!(vec3(1.0, 2.0, 3.0), target.light_position());
        assert_eq!(0.5, target.light_intensity());
        assert_eq!(ShadingModel::CookTorrance, target.shading_model());
        assert_eq!(4.0 * MAX_SCENE_BOUNDS, target.max_distance());
        assert!(!target.is_transparent());
    }

    #[test]
    fn layout() {
        assert_eq!(48, core::mem::size_of::<World>());
    }
}
