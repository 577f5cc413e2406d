// ============================================
// Chunk Table - Потоковое окно чанков
// ============================================

pub mod slot;
pub mod chunk_table;
pub mod draw;

pub use slot::Slot;
pub use chunk_table::{ChunkTable, RecenterStep};
