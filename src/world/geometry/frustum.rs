// ============================================
// Frustum - Пирамида видимости и отсечение
// ============================================

use ultraviolet::{Mat4, Vec3, Vec4};

use super::plane::{Aabb, Plane};

/// Шесть плоскостей с нормалями внутрь
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub back: Plane,
    pub front: Plane,
    pub top: Plane,
    pub bottom: Plane,
    pub left: Plane,
    pub right: Plane,
}

impl Frustum {
    /// Frustum камеры: позиция, направление взгляда и параметры перспективы
    pub fn from_view(position: Vec3, forward: Vec3, near: f32, far: f32, aspect: f32, fovy: f32) -> Self {
        let forward = forward.normalized();
        // Боковой вектор up × forward и ортогональный ему верх
        let side = Vec3::unit_y().cross(forward).normalized();
        let up = forward.cross(side).normalized();

        let half_height = far * (fovy / 2.0).tan();
        let half_width = half_height * aspect;
        let far_center = forward * far;

        Self {
            back: Plane::from_point(position + forward * near, forward),
            front: Plane::from_point(position + far_center, -forward),
            top: Plane::from_point(position, side.cross(far_center + up * half_height)),
            bottom: Plane::from_point(position, (far_center - up * half_height).cross(side)),
            left: Plane::from_point(position, up.cross(far_center - side * half_width)),
            right: Plane::from_point(position, (far_center + side * half_width).cross(up)),
        }
    }

    /// Извлекает плоскости из view-projection матрицы с глубиной 0..1 (wgpu)
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let component = |v: Vec4, r: usize| match r {
            0 => v.x,
            1 => v.y,
            2 => v.z,
            _ => v.w,
        };
        let row = |r: usize| {
            let c = &vp.cols;
            Vec4::new(component(c[0], r), component(c[1], r), component(c[2], r), component(c[3], r))
        };
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        // a·x + b·y + c·z + w >= 0 внутри
        let plane = |v: Vec4| {
            let n = Vec3::new(v.x, v.y, v.z);
            let len = n.mag();
            Plane { norm: n / len, d: -v.w / len }
        };

        Self {
            back: plane(r2),
            front: plane(r3 - r2),
            top: plane(r3 - r1),
            bottom: plane(r3 + r1),
            left: plane(r3 + r0),
            right: plane(r3 - r0),
        }
    }

    pub fn planes(&self) -> [&Plane; 6] {
        [&self.back, &self.front, &self.left, &self.right, &self.top, &self.bottom]
    }

    pub fn contains_point(&self, pos: Vec3) -> bool {
        self.planes().iter().all(|p| p.in_front(pos))
    }
}

/// Пересекает ли бокс frustum (консервативно: ложных "невидим" нет)
pub fn intersects_frustum(frustum: &Frustum, aabb: &Aabb) -> bool {
    frustum.planes().iter().all(|p| p.aabb_in_front(aabb))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_frustum() -> Frustum {
        Frustum::from_view(
            Vec3::zero(),
            Vec3::new(0.0, 0.0, -1.0),
            0.1,
            100.0,
            1.5,
            70f32.to_radians(),
        )
    }

    fn vp_frustum() -> Frustum {
        let view = Mat4::look_at(Vec3::zero(), Vec3::new(0.0, 0.0, -1.0), Vec3::unit_y());
        let proj = ultraviolet::projection::perspective_wgpu_dx(70f32.to_radians(), 1.5, 0.1, 100.0);
        Frustum::from_view_projection(&(proj * view))
    }

    #[test]
    fn test_point_ahead_visible() {
        for f in [camera_frustum(), vp_frustum()] {
            assert!(f.contains_point(Vec3::new(0.0, 0.0, -10.0)));
            assert!(f.contains_point(Vec3::new(2.0, -1.0, -50.0)));
        }
    }

    #[test]
    fn test_points_outside() {
        for f in [camera_frustum(), vp_frustum()] {
            assert!(!f.contains_point(Vec3::new(0.0, 0.0, 10.0)), "behind");
            assert!(!f.contains_point(Vec3::new(0.0, 0.0, -150.0)), "past far plane");
            assert!(!f.contains_point(Vec3::new(0.0, 500.0, -10.0)), "above");
            assert!(!f.contains_point(Vec3::new(0.0, -500.0, -10.0)), "below");
            assert!(!f.contains_point(Vec3::new(500.0, 0.0, -10.0)), "right");
            assert!(!f.contains_point(Vec3::new(-500.0, 0.0, -10.0)), "left");
        }
    }

    #[test]
    fn test_aabb_culling() {
        let f = camera_frustum();
        let ahead = Aabb::new(Vec3::new(0.0, 0.0, -30.0), Vec3::new(10.0, 10.0, 10.0));
        let behind = Aabb::new(Vec3::new(0.0, 0.0, 30.0), Vec3::new(10.0, 10.0, 10.0));
        let around_camera = Aabb::new(Vec3::zero(), Vec3::new(10.0, 10.0, 10.0));
        assert!(intersects_frustum(&f, &ahead));
        assert!(!intersects_frustum(&f, &behind));
        assert!(intersects_frustum(&f, &around_camera));
    }
}
