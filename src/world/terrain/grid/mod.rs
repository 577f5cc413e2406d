// ============================================
// Grid - Решётка чанков и перевод координат
// ============================================

pub mod chunk_pos;

pub use chunk_pos::{cell_size, clamp_center, grid_to_world, window, world_to_grid, ChunkPos};
