use glam::Vec3;

use crate::{Ray, EPSILON};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle {
    pub positions: [Vec3; 3],
}

impl Triangle {
    pub fn new(positions: [Vec3; 3]) -> Self {
        Self { positions }
    }

    pub fn center(&self) -> Vec3 {
        self.positions.into_iter().sum::<Vec3>() / 3.0
    }

    /// Returns the geometric normal, wound counter-clockwise.
    pub fn normal(&self) -> Vec3 {
        let [p0, p1, p2] = self.positions;

        (p1 - p0).cross(p2 - p0).normalize()
    }

    /// Intersects given ray with this triangle (Möller-Trumbore).
    ///
    /// Each barycentric coordinate is rejected as soon as it's known, before
    /// the rest of the arithmetic is done.
    pub fn hit(&self, ray: Ray) -> Option<TriangleHit> {
        let [p0, p1, p2] = self.positions;
        let e1 = p1 - p0;
        let e2 = p2 - p0;

        let pvec = ray.direction().cross(e2);
        let det = e1.dot(pvec);

        if det.abs() < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let tvec = ray.origin() - p0;
        let u = tvec.dot(pvec) * inv_det;

        if u < 0.0 || u > 1.0 {
            return None;
        }

        let qvec = tvec.cross(e1);
        let v = ray.direction().dot(qvec) * inv_det;

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let distance = e2.dot(qvec) * inv_det;

        if distance <= EPSILON {
            return None;
        }

        Some(TriangleHit {
            distance,
            u,
            v,
            w: 1.0 - u - v,
        })
    }
}

/// Barycentric coordinates of a ray-triangle intersection.
///
/// `w` weighs the first vertex, `u` and `v` the second and the third one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleHit {
    pub distance: f32,
    pub u: f32,
    pub v: f32,
    pub w: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TriangleId(u32);

impl TriangleId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns offset of this triangle's first index in the index buffer.
    pub fn vptr(self) -> usize {
        3 * self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;

    fn target() -> Triangle {
        Triangle::new([
            vec3(-1.0, -1.0, 5.0),
            vec3(1.0, -1.0, 5.0),
            vec3(0.0, 1.0, 5.0),
        ])
    }

    #[test]
    fn hit_through_center() {
        let target = target();
        let ray = Ray::new(
            target.center() - 3.0 * target.normal(),
            target.normal(),
        );
        let hit = target.hit(ray).unwrap();

        assert_relative_eq!(3.0, hit.distance, epsilon = 1e-5);
        assert_relative_eq!(1.0, hit.u + hit.v + hit.w, epsilon = 1e-6);
        assert_relative_eq!(1.0 / 3.0, hit.u, epsilon = 1e-5);
        assert_relative_eq!(1.0 / 3.0, hit.v, epsilon = 1e-5);
        assert_relative_eq!(1.0 / 3.0, hit.w, epsilon = 1e-5);
    }

    #[test]
    fn hit_from_both_sides() {
        let target = target();
        let front = Ray::new(vec3(0.0, 0.0, 0.0), Vec3::Z);
        let back = Ray::new(vec3(0.0, 0.0, 10.0), -Vec3::Z);

        assert_relative_eq!(5.0, target.hit(front).unwrap().distance);
        assert_relative_eq!(5.0, target.hit(back).unwrap().distance);
    }

    #[test]
    fn hit_at_vertex() {
        let target = target();
        let ray = Ray::new(vec3(1.0, -1.0, 0.0), Vec3::Z);
        let hit = target.hit(ray).unwrap();

        assert_relative_eq!(1.0, hit.u, epsilon = 1e-6);
        assert_relative_eq!(0.0, hit.v, epsilon = 1e-6);
        assert_relative_eq!(0.0, hit.w, epsilon = 1e-6);
    }

    #[test]
    fn miss_outside() {
        let target = target();

        // u < 0
        assert!(target.hit(Ray::new(vec3(-2.0, 0.0, 0.0), Vec3::Z)).is_none());

        // u > 1
        assert!(target.hit(Ray::new(vec3(2.0, -0.5, 0.0), Vec3::Z)).is_none());

        // v < 0
        assert!(target.hit(Ray::new(vec3(0.0, -1.5, 0.0), Vec3::Z)).is_none());

        // u + v > 1
        assert!(target.hit(Ray::new(vec3(1.0, 0.5, 0.0), Vec3::Z)).is_none());
    }

    #[test]
    fn miss_parallel() {
        let target = target();
        let ray = Ray::new(vec3(-5.0, 0.0, 5.0), Vec3::X);

        assert!(target.hit(ray).is_none());
    }

    #[test]
    fn miss_behind() {
        let target = target();
        let ray = Ray::new(vec3(0.0, 0.0, 10.0), Vec3::Z);

        assert!(target.hit(ray).is_none());
    }

    #[test]
    fn miss_at_origin() {
        let target = target();
        let ray = Ray::new(vec3(0.0, 0.0, 5.0), Vec3::Z);

        assert!(target.hit(ray).is_none());
    }

    #[test]
    fn vptr() {
        assert_eq!(0, TriangleId::new(0).vptr());
        assert_eq!(12, TriangleId::new(4).vptr());
    }
}
