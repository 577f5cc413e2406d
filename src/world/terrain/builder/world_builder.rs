// ============================================
// World Builder - Параллельная первичная постройка
// ============================================
// Меши считаются пачками по threads штук в пуле rayon, после join
// пачка загружается в таблицу последовательно из вызывающего потока.
// Паника воркера пробрасывается наружу и не перехватывается.

use std::time::Instant;

use log::info;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::world::core::{TerrainConfig, WorldError};
use crate::world::terrain::generation::WorldSeed;
use crate::world::terrain::grid::{window, ChunkPos};
use crate::world::terrain::mesh::{build_chunk, ChunkData};
use crate::world::terrain::storage::ChunkStorage;
use crate::world::terrain::table::ChunkTable;

/// Минимальное число потоков, даже на машинах с меньшим числом ядер
pub const MIN_BUILD_THREADS: usize = 4;

pub struct WorldBuilder {
    pool: ThreadPool,
    threads: usize,
}

impl WorldBuilder {
    /// max(число ядер, 4) потоков
    pub fn new() -> Result<Self, WorldError> {
        Self::with_threads(num_cpus::get().max(MIN_BUILD_THREADS))
    }

    pub fn with_threads(threads: usize) -> Result<Self, WorldError> {
        let threads = threads.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("chunk-builder-{}", i))
            .build()?;

        Ok(Self { pool, threads })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Построить все (2·range+1)² чанков окна вокруг (0, 0)
    pub fn build_world<S: ChunkStorage>(
        &self,
        range: u32,
        seed: &WorldSeed,
        maxheight: f32,
        chunkscale: f32,
        storage: S,
        config: &TerrainConfig,
    ) -> ChunkTable<S> {
        let start = Instant::now();
        let mut table = ChunkTable::new(range, chunkscale, maxheight, storage, config);
        let positions: Vec<ChunkPos> = window(ChunkPos::default(), range).collect();

        let mut index = 0;
        for batch in positions.chunks(self.threads) {
            let built: Vec<ChunkData> = self.pool.install(|| {
                batch
                    .par_iter()
                    .map(|&pos| build_chunk(seed, pos, maxheight, chunkscale, config))
                    .collect()
            });

            // Загрузка только после join всей пачки, в порядке воркеров
            for chunk in &built {
                table.add_chunk(index, chunk);
                index += 1;
            }
            table.flush();
        }

        info!(
            "Time to generate world (scale {}, {} chunks): {:.3}s",
            chunkscale,
            table.count(),
            start.elapsed().as_secs_f32()
        );

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::world::terrain::storage::MeshStore;

    fn config() -> TerrainConfig {
        TerrainConfig { prec: 4, octaves: 3, ..TerrainConfig::default() }
    }

    #[test]
    fn test_thread_count_floor() {
        assert!(WorldBuilder::new().unwrap().threads() >= MIN_BUILD_THREADS);
        assert_eq!(WorldBuilder::with_threads(0).unwrap().threads(), 1);
    }

    #[test]
    fn test_build_world_fills_window() {
        let config = config();
        let seed = WorldSeed::new(42, config.octaves);
        let builder = WorldBuilder::with_threads(3).unwrap();
        let table = builder.build_world(2, &seed, config.height, config.chunk_size, MeshStore::new(&config), &config);

        assert_eq!(table.count(), 25);
        let positions: HashSet<_> = (0..25).map(|i| table.pos(i)).collect();
        assert_eq!(positions.len(), 25);
        assert!(positions.iter().all(|p| p.within(ChunkPos::default(), 2)));
        assert_eq!(table.storage().write_count(), 25);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = config();
        let seed = WorldSeed::new(17, config.octaves);
        let parallel = WorldBuilder::with_threads(4)
            .unwrap()
            .build_world(1, &seed, config.height, config.chunk_size, MeshStore::new(&config), &config);
        let sequential = WorldBuilder::with_threads(1)
            .unwrap()
            .build_world(1, &seed, config.height, config.chunk_size, MeshStore::new(&config), &config);

        for i in 0..parallel.count() {
            assert_eq!(parallel.pos(i), sequential.pos(i));
            let a = parallel.storage().vertices(parallel.slots()[i].id);
            let b = sequential.storage().vertices(sequential.slots()[i].id);
            assert_eq!(a, b);
        }
    }
}
