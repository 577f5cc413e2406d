// ============================================
// Mesh - Данные меша чанка
// ============================================

pub mod vertex;
pub mod normal;
pub mod builder;

pub use vertex::ChunkVertex;
pub use normal::{compress_normal, decompress_normal};
pub use builder::{build_chunk, build_chunk_mesh, chunk_indices, ChunkData};
