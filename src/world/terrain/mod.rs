// ============================================
// Terrain - Бесконечный heightmap террейн
// ============================================
// generation -> mesh -> table, builder -> lod

pub mod generation;
pub mod mesh;
pub mod grid;
pub mod storage;
pub mod table;
pub mod builder;
pub mod lod;

pub use generation::{get_height, noise, Permutation, WorldSeed};
pub use grid::ChunkPos;
pub use mesh::{build_chunk, build_chunk_mesh, chunk_indices, ChunkData, ChunkVertex};
pub use storage::{ChunkStorage, GpuChunkStore, MeshStore};
pub use table::{ChunkTable, RecenterStep, Slot};
pub use builder::WorldBuilder;
pub use lod::TerrainLods;
