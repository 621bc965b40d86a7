use glam::{vec3, Vec2, Vec3, Vec3Swizzles};

use crate::{Hit, Ray, World, EPSILON};

/// Infinite horizontal plane at `y = -distance`, textured with UVs scaled by
/// `1 / radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ground {
    pub distance: f32,
    pub radius: f32,
}

impl Ground {
    pub const NORMAL: Vec3 = vec3(0.0, 1.0, 0.0);

    pub fn new(world: &World) -> Self {
        Self {
            distance: world.ground_distance,
            radius: world.radius,
        }
    }

    pub fn height(&self) -> f32 {
        -self.distance
    }

    pub fn hit(&self, ray: Ray) -> Option<Hit> {
        if ray.direction().y.abs() < EPSILON {
            return None;
        }

        let distance = (self.height() - ray.origin().y) / ray.direction().y;

        if distance < EPSILON {
            return None;
        }

        Some(Hit::ground(distance, self.uv(ray.at(distance))))
    }

    /// Maps a point on the plane into texture coordinates.
    pub fn uv(&self, point: Vec3) -> Vec2 {
        (point.xz() / self.radius) * 0.5 + 0.5
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec2;

    use super::*;
    use crate::Primitive;

    #[test]
    fn hit_straight_down() {
        let target = Ground {
            distance: 0.0,
            radius: 1000.0,
        };

        let hit = target.hit(Ray::new(vec3(0.0, 10.0, 0.0), -Vec3::Y)).unwrap();

        assert_eq!(Some(Primitive::Ground), hit.primitive);
        assert_relative_eq!(10.0, hit.distance);
        assert_relative_eq!(0.5, hit.uv.x);
        assert_relative_eq!(0.5, hit.uv.y);
    }

    #[test]
    fn hit_angled() {
        let target = Ground {
            distance: 1.0,
            radius: 2.0,
        };

        let ray =
            Ray::new(vec3(0.0, 1.0, 0.0), vec3(1.0, -1.0, 0.0).normalize());
        let hit = target.hit(ray).unwrap();

        assert_relative_eq!(2.0 * 2.0f32.sqrt(), hit.distance, epsilon = 1e-5);
        assert!(hit.uv.abs_diff_eq(vec2(1.0, 0.5), 1e-5));
    }

    #[test]
    fn miss_parallel() {
        let target = Ground {
            distance: 1.0,
            radius: 1.0,
        };

        assert!(target.hit(Ray::new(Vec3::ZERO, Vec3::X)).is_none());
    }

    #[test]
    fn miss_upwards() {
        let target = Ground {
            distance: 1.0,
            radius: 1.0,
        };

        assert!(target.hit(Ray::new(Vec3::ZERO, Vec3::Y)).is_none());
    }

    #[test]
    fn miss_on_plane() {
        let target = Ground {
            distance: 1.0,
            radius: 1.0,
        };

        let ray = Ray::new(vec3(0.0, -1.0, 0.0), -Vec3::Y);

        assert!(target.hit(ray).is_none());
    }
}
