pub mod world;

pub use world::core::{TerrainConfig, WorldContext, WorldError};
pub use world::terrain::{ChunkPos, ChunkTable, TerrainLods, WorldBuilder, WorldSeed};
