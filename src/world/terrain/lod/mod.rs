// ============================================
// LOD - Уровни детализации террейна
// ============================================

pub mod levels;

pub use levels::TerrainLods;
