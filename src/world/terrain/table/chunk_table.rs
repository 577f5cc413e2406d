// ============================================
// Chunk Table - Окно чанков одного LOD
// ============================================
// (2·range+1)² слотов вокруг центра. При смене центра вышедшие из окна
// слоты ставятся в очередь и перестраиваются по одному за вызов.

use log::{debug, trace};

use crate::world::core::TerrainConfig;
use crate::world::terrain::generation::WorldSeed;
use crate::world::terrain::grid::{self, window, ChunkPos};
use crate::world::terrain::mesh::{build_chunk, ChunkData};
use crate::world::terrain::storage::ChunkStorage;

use super::slot::Slot;

/// Что сделал один вызов generate_new_chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecenterStep {
    /// Наблюдатель в той же ячейке, очередь пуста
    Idle,
    /// Центр сдвинут, в очередь поставлено queued перестроек
    Recentered { queued: usize },
    /// Перестроен один слот из очереди
    Rebuilt { slot: usize, pos: ChunkPos },
}

pub struct ChunkTable<S: ChunkStorage> {
    slots: Vec<Slot<S::Handle>>,
    range: u32,
    chunkscale: f32,
    maxheight: f32,
    center: ChunkPos,
    /// Освобождённые слоты и новые позиции; всегда одинаковой длины
    indices: Vec<usize>,
    new_chunks: Vec<ChunkPos>,
    storage: S,
    config: TerrainConfig,
}

impl<S: ChunkStorage> ChunkTable<S> {
    /// Резервирует слоты без содержимого, центр в (0, 0)
    pub fn new(range: u32, chunkscale: f32, maxheight: f32, mut storage: S, config: &TerrainConfig) -> Self {
        let size = (2 * range + 1) as usize;
        let slots = (0..size * size).map(|_| Slot::new(storage.allocate())).collect();

        Self {
            slots,
            range,
            chunkscale,
            maxheight,
            center: ChunkPos::default(),
            indices: Vec::new(),
            new_chunks: Vec::new(),
            storage,
            config: *config,
        }
    }

    /// Первичная загрузка чанка в слот
    pub fn add_chunk(&mut self, index: usize, chunk: &ChunkData) {
        self.update_chunk(index, chunk);
    }

    /// Перезапись слота на месте
    pub fn update_chunk(&mut self, index: usize, chunk: &ChunkData) {
        let slot = &mut self.slots[index];
        slot.pos = chunk.pos;
        self.storage.write(slot.id, &chunk.vertices);
    }

    pub fn flush(&mut self) {
        self.storage.flush();
    }

    pub fn pos(&self, index: usize) -> ChunkPos {
        self.slots[index].pos
    }

    pub fn count(&self) -> usize {
        self.slots.len()
    }

    pub fn center(&self) -> ChunkPos {
        self.center
    }

    /// Половина ширины чанка этого LOD
    pub fn scale(&self) -> f32 {
        self.chunkscale
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    /// Сколько перестроек ещё в очереди
    pub fn pending(&self) -> usize {
        self.indices.len()
    }

    pub fn slots(&self) -> &[Slot<S::Handle>] {
        &self.slots
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Ячейка этой решётки под мировой точкой (x, z); окно вокруг неё всегда в пределах i32
    pub fn world_to_grid(&self, x: f32, z: f32) -> ChunkPos {
        let cell = grid::world_to_grid(x, z, self.chunkscale * self.config.overlap(), self.config.scale);
        grid::clamp_center(cell, self.range)
    }

    /// Вызывается раз в кадр с мировой позицией наблюдателя
    pub fn generate_new_chunks(&mut self, x: f32, z: f32, seed: &WorldSeed) -> RecenterStep {
        if let (Some(index), Some(pos)) = (self.indices.pop(), self.new_chunks.pop()) {
            let chunk = build_chunk(seed, pos, self.maxheight, self.chunkscale, &self.config);
            self.update_chunk(index, &chunk);
            self.flush();
            trace!("Rebuilt chunk {:?} in slot {} (scale {})", pos, index, self.chunkscale);
            return RecenterStep::Rebuilt { slot: index, pos };
        }

        let target = self.world_to_grid(x, z);
        if target == self.center {
            return RecenterStep::Idle;
        }

        let old_center = self.center;
        let range = self.range;

        self.new_chunks
            .extend(window(target, range).filter(|p| !p.within(old_center, range)));
        self.indices.extend(
            self.slots
                .iter()
                .enumerate()
                .filter(|(_, slot)| !slot.pos.within(target, range))
                .map(|(i, _)| i),
        );
        debug_assert_eq!(self.indices.len(), self.new_chunks.len());

        self.center = target;
        debug!(
            "Chunk table (scale {}) recentered {:?} -> {:?}, {} chunks queued",
            self.chunkscale,
            old_center,
            target,
            self.indices.len()
        );

        RecenterStep::Recentered { queued: self.indices.len() }
    }
}

impl<S: ChunkStorage> Drop for ChunkTable<S> {
    fn drop(&mut self) {
        for slot in &self.slots {
            self.storage.release(slot.id);
        }
    }
}
