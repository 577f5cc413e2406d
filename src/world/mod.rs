// ============================================
// World Module - Бесконечный LOD террейн
// ============================================
// Шум -> поле высот -> меши чанков -> окна чанков по LOD,
// плюс декорации, отсечение по frustum и headless запуск.

pub mod core;
pub mod terrain;
pub mod decorations;
pub mod geometry;
pub mod render;
pub mod player;

pub use core::{run, TerrainConfig, WorldContext, WorldError};
