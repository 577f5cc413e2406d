// ============================================
// Shader Program - Граница с рендер-бэкендом
// ============================================
// Ядро решает только какие слоты видимы и с каким transform.
// Сам draw call выполняет реализация этого трейта.

use std::collections::HashMap;

use ultraviolet::{Mat4, Vec2, Vec3};

pub trait ShaderProgram {
    fn uniform_mat4(&mut self, name: &str, value: Mat4);
    fn uniform_vec3(&mut self, name: &str, value: Vec3);
    fn uniform_vec2(&mut self, name: &str, value: Vec2);
    fn uniform_f32(&mut self, name: &str, value: f32);

    /// Нарисовать слот чанка с текущими uniform-ами
    fn draw_chunk(&mut self, slot: usize, index_count: u32);
}

/// Значение uniform-а, как его увидел бы шейдер
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Mat4(Mat4),
    Vec3(Vec3),
    Vec2(Vec2),
    Float(f32),
}

/// Один вызов отрисовки чанка
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub slot: usize,
    pub index_count: u32,
    pub transform: Option<Mat4>,
}

/// Шейдер без GPU: запоминает uniform-ы и вызовы отрисовки.
/// Используется headless режимом и тестами.
#[derive(Debug, Default)]
pub struct RecordingShader {
    uniforms: HashMap<String, UniformValue>,
    draws: Vec<DrawCall>,
    total_draws: u64,
}

impl RecordingShader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms.get(name).copied()
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.uniform(name)? {
            UniformValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn vec2(&self, name: &str) -> Option<Vec2> {
        match self.uniform(name)? {
            UniformValue::Vec2(v) => Some(v),
            _ => None,
        }
    }

    /// Вызовы с последнего clear()
    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Вызовы за всё время жизни
    pub fn total_draws(&self) -> u64 {
        self.total_draws
    }

    /// Начать новый кадр
    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl ShaderProgram for RecordingShader {
    fn uniform_mat4(&mut self, name: &str, value: Mat4) {
        self.uniforms.insert(name.to_string(), UniformValue::Mat4(value));
    }

    fn uniform_vec3(&mut self, name: &str, value: Vec3) {
        self.uniforms.insert(name.to_string(), UniformValue::Vec3(value));
    }

    fn uniform_vec2(&mut self, name: &str, value: Vec2) {
        self.uniforms.insert(name.to_string(), UniformValue::Vec2(value));
    }

    fn uniform_f32(&mut self, name: &str, value: f32) {
        self.uniforms.insert(name.to_string(), UniformValue::Float(value));
    }

    fn draw_chunk(&mut self, slot: usize, index_count: u32) {
        let transform = match self.uniforms.get("transform") {
            Some(UniformValue::Mat4(m)) => Some(*m),
            _ => None,
        };
        self.draws.push(DrawCall { slot, index_count, transform });
        self.total_draws += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_captures_transform() {
        let mut shader = RecordingShader::new();
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        shader.uniform_mat4("transform", m);
        shader.uniform_f32("chunksz", 64.0);
        shader.draw_chunk(3, 96);

        assert_eq!(shader.draws(), &[DrawCall { slot: 3, index_count: 96, transform: Some(m) }]);
        assert_eq!(shader.float("chunksz"), Some(64.0));
        assert_eq!(shader.vec2("chunksz"), None);

        shader.clear();
        assert!(shader.draws().is_empty());
        assert_eq!(shader.total_draws(), 1);
    }
}
