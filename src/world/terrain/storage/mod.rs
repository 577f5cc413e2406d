// ============================================
// Chunk Storage - Хранилище данных слотов
// ============================================
// Граница с рендером: таблица чанков владеет хендлами слотов,
// а что за ними стоит (память CPU или буферы GPU) решает хранилище.
// Запись всегда идёт из одного потока-владельца.

mod mesh_store;
mod gpu_store;

pub use mesh_store::MeshStore;
pub use gpu_store::{GpuChunkSlot, GpuChunkStore};

use std::fmt::Debug;

use crate::world::terrain::mesh::ChunkVertex;

pub trait ChunkStorage {
    type Handle: Copy + Debug;

    /// Зарезервировать место под один слот (содержимого ещё нет)
    fn allocate(&mut self) -> Self::Handle;

    /// Перезаписать содержимое слота на месте
    fn write(&mut self, handle: Self::Handle, vertices: &[ChunkVertex]);

    /// Освободить слот
    fn release(&mut self, handle: Self::Handle);

    /// Длина общего индексного буфера
    fn index_count(&self) -> u32;

    /// Завершить пачку записей
    fn flush(&mut self) {}
}
