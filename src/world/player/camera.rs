// ============================================
// Camera - Свободная камера наблюдателя
// ============================================
// Камера летит над террейном; её позиция это позиция наблюдателя
// для потоковой генерации, а frustum используется для отсечения чанков.

use ultraviolet::{Mat4, Vec3};

use crate::world::geometry::Frustum;

pub struct FlyCamera {
    pub position: Vec3,
    /// Поворот вокруг Y (радианы)
    pub yaw: f32,
    /// Наклон (радианы), ограничен ±89°
    pub pitch: f32,

    /// Параметры проекции
    pub aspect: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl FlyCamera {
    pub fn new(aspect: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 200.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            aspect,
            fov: 75.0_f32.to_radians(),
            near: 2.0,
            far,
        }
    }

    /// Направление взгляда камеры
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalized()
    }

    /// Вектор вправо
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::unit_y()).normalized()
    }

    pub fn rotate(&mut self, dyaw: f32, dpitch: f32) {
        let limit = 89.0_f32.to_radians();
        self.yaw += dyaw;
        self.pitch = (self.pitch + dpitch).clamp(-limit, limit);
    }

    /// Сдвиг вдоль направления взгляда
    pub fn fly(&mut self, distance: f32) {
        self.position += self.forward() * distance;
    }

    /// Сдвиг по горизонтали, высота не меняется
    pub fn fly_level(&mut self, distance: f32) {
        let f = self.forward();
        let flat = Vec3::new(f.x, 0.0, f.z);
        if flat.mag() > f32::EPSILON {
            self.position += flat.normalized() * distance;
        }
    }

    /// Матрица вида (View Matrix)
    pub fn view_matrix(&self) -> Mat4 {
        let target = self.position + self.forward();
        Mat4::look_at(self.position, target, Vec3::unit_y())
    }

    /// Матрица проекции (глубина 0..1)
    pub fn projection_matrix(&self) -> Mat4 {
        ultraviolet::projection::perspective_wgpu_dx(self.fov, self.aspect, self.near, self.far)
    }

    /// Комбинированная матрица View-Projection
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Пирамида видимости для отсечения чанков
    pub fn view_frustum(&self) -> Frustum {
        Frustum::from_view(self.position, self.forward(), self.near, self.far, self.aspect, self.fov)
    }
}
