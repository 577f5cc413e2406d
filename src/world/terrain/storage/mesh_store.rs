// ============================================
// Mesh Store - Слоты в памяти CPU
// ============================================

use std::sync::Arc;

use crate::world::core::TerrainConfig;
use crate::world::terrain::mesh::{chunk_indices, ChunkVertex};
use super::ChunkStorage;

/// Арена вершинных массивов; хендл = индекс в арене
pub struct MeshStore {
    slots: Vec<Option<Vec<ChunkVertex>>>,
    indices: Arc<[u32]>,
    writes: u64,
}

impl MeshStore {
    pub fn new(config: &TerrainConfig) -> Self {
        Self::with_indices(chunk_indices(config.prec).into())
    }

    /// Несколько хранилищ (по одному на LOD) могут делить один индексный буфер
    pub fn with_indices(indices: Arc<[u32]>) -> Self {
        Self {
            slots: Vec::new(),
            indices,
            writes: 0,
        }
    }

    pub fn vertices(&self, handle: usize) -> Option<&[ChunkVertex]> {
        self.slots.get(handle)?.as_deref()
    }

    pub fn indices(&self) -> &Arc<[u32]> {
        &self.indices
    }

    /// Сколько раз слоты перезаписывались
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    /// Живые (не освобождённые) слоты
    pub fn live_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl ChunkStorage for MeshStore {
    type Handle = usize;

    fn allocate(&mut self) -> usize {
        self.slots.push(Some(Vec::new()));
        self.slots.len() - 1
    }

    fn write(&mut self, handle: usize, vertices: &[ChunkVertex]) {
        let slot = self.slots[handle]
            .as_mut()
            .unwrap_or_else(|| panic!("write to released slot {}", handle));
        slot.clear();
        slot.extend_from_slice(vertices);
        self.writes += 1;
    }

    fn release(&mut self, handle: usize) {
        self.slots[handle] = None;
    }

    fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
