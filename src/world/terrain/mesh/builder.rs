// ============================================
// Chunk Mesh Builder - Построение меша чанка
// ============================================
// Чистая функция: читает только WorldSeed, пишет только свой результат.
// Поэтому чанки можно строить параллельно без синхронизации.

use crate::world::core::TerrainConfig;
use crate::world::terrain::generation::{terrain_vertex, WorldSeed};
use crate::world::terrain::grid::ChunkPos;

use super::normal::compress_normal;
use super::vertex::ChunkVertex;

/// Готовые данные чанка для загрузки в слот
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkData {
    pub pos: ChunkPos,
    pub vertices: Vec<ChunkVertex>,
}

/// Вершины (PREC+1)² точек в [-chunkscale, chunkscale]² со смещением позиции чанка
pub fn build_chunk_mesh(
    seed: &WorldSeed,
    pos: ChunkPos,
    maxheight: f32,
    chunkscale: f32,
    config: &TerrainConfig,
) -> Vec<ChunkVertex> {
    let prec = config.prec;
    let eps = config.normal_epsilon;
    // Копия конфигурации с высотой этого уровня
    let config = TerrainConfig { height: maxheight, ..*config };

    let mut vertices = Vec::with_capacity(config.vertices_per_chunk());

    for i in 0..=prec {
        for j in 0..=prec {
            let x = -chunkscale + i as f32 / prec as f32 * chunkscale * 2.0;
            let z = -chunkscale + j as f32 / prec as f32 * chunkscale * 2.0;
            let tx = x + pos.x as f32 * chunkscale * 2.0;
            let tz = z + pos.z as f32 * chunkscale * 2.0;

            let vertex = terrain_vertex(tx, tz, seed, &config);
            let v1 = terrain_vertex(tx + eps, tz, seed, &config);
            let v2 = terrain_vertex(tx, tz + eps, seed, &config);
            let normal = (v2 - vertex).cross(v1 - vertex).normalized();

            vertices.push(ChunkVertex::new(vertex.y / maxheight, compress_normal(normal)));
        }
    }

    vertices
}

pub fn build_chunk(
    seed: &WorldSeed,
    pos: ChunkPos,
    maxheight: f32,
    chunkscale: f32,
    config: &TerrainConfig,
) -> ChunkData {
    ChunkData {
        pos,
        vertices: build_chunk_mesh(seed, pos, maxheight, chunkscale, config),
    }
}

/// Общий индексный буфер: два треугольника на ячейку, одинаков для всех чанков и LOD
pub fn chunk_indices(prec: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity((prec * prec * 6) as usize);
    let row = prec + 1;

    for i in 0..prec {
        for j in 0..prec {
            let index = i * row + j;
            indices.extend_from_slice(&[index + row, index + 1, index]);
            indices.extend_from_slice(&[index + 1, index + row, index + row + 1]);
        }
    }

    indices
}
