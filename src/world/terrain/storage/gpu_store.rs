// ============================================
// GPU Chunk Store - Буферы слотов на GPU
// ============================================

use std::sync::Arc;
use wgpu::util::DeviceExt;

use crate::world::core::TerrainConfig;
use crate::world::terrain::mesh::{chunk_indices, ChunkVertex};
use super::ChunkStorage;

/// Вершинный буфер одного слота (размер фиксирован при создании)
pub struct GpuChunkSlot {
    pub vertex_buffer: wgpu::Buffer,
}

/// Слоты чанков на GPU и один общий индексный буфер
pub struct GpuChunkStore {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    slots: Vec<Option<GpuChunkSlot>>,
    index_buffer: Arc<wgpu::Buffer>,
    index_count: u32,
    slot_size: wgpu::BufferAddress,
}

impl GpuChunkStore {
    pub fn new(device: Arc<wgpu::Device>, queue: Arc<wgpu::Queue>, config: &TerrainConfig) -> Self {
        let indices = chunk_indices(config.prec);
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Chunk Indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self::with_index_buffer(device, queue, Arc::new(index_buffer), indices.len() as u32, config)
    }

    /// Хранилище, разделяющее индексный буфер с другим LOD
    pub fn with_index_buffer(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        index_buffer: Arc<wgpu::Buffer>,
        index_count: u32,
        config: &TerrainConfig,
    ) -> Self {
        let slot_size = (config.vertices_per_chunk() * std::mem::size_of::<ChunkVertex>()) as wgpu::BufferAddress;
        Self {
            device,
            queue,
            slots: Vec::new(),
            index_buffer,
            index_count,
            slot_size,
        }
    }

    /// Новое хранилище на том же устройстве и с тем же индексным буфером
    pub fn sibling(&self, config: &TerrainConfig) -> Self {
        Self::with_index_buffer(
            self.device.clone(),
            self.queue.clone(),
            self.index_buffer.clone(),
            self.index_count,
            config,
        )
    }
}

impl ChunkStorage for GpuChunkStore {
    type Handle = usize;

    fn allocate(&mut self) -> usize {
        let vertex_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("Chunk Slot {} Vertices", self.slots.len())),
            size: self.slot_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        self.slots.push(Some(GpuChunkSlot { vertex_buffer }));
        self.slots.len() - 1
    }

    fn write(&mut self, handle: usize, vertices: &[ChunkVertex]) {
        let slot = self.slots[handle]
            .as_ref()
            .unwrap_or_else(|| panic!("write to released slot {}", handle));
        debug_assert!(
            (std::mem::size_of_val(vertices) as wgpu::BufferAddress) <= self.slot_size,
            "chunk larger than its slot"
        );
        self.queue.write_buffer(&slot.vertex_buffer, 0, bytemuck::cast_slice(vertices));
    }

    fn release(&mut self, handle: usize) {
        if let Some(slot) = self.slots[handle].take() {
            slot.vertex_buffer.destroy();
        }
    }

    fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Отправить накопленные write_buffer в очередь
    fn flush(&mut self) {
        self.queue.submit(std::iter::empty());
    }
}
