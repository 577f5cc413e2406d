// ============================================
// Player - Наблюдатель
// ============================================

pub mod camera;

pub use camera::FlyCamera;
