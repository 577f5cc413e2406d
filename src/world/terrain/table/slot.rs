// ============================================
// Slot - Ячейка арены чанков
// ============================================

use crate::world::terrain::grid::ChunkPos;

/// Стабильный хендл хранилища и текущая позиция чанка в нём
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<H> {
    pub id: H,
    pub pos: ChunkPos,
}

impl<H> Slot<H> {
    pub fn new(id: H) -> Self {
        Self { id, pos: ChunkPos::default() }
    }
}
