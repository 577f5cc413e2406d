// ============================================
// Render - Контракт шейдера для отрисовки чанков
// ============================================

pub mod shader;

pub use shader::{DrawCall, RecordingShader, ShaderProgram, UniformValue};
