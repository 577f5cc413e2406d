// ============================================
// Resources - Контекст мира
// ============================================
// Всё состояние мира в одном объекте, передаётся явно по ссылке.

use std::time::Instant;

use log::{debug, info};
use ultraviolet::Vec3;

use crate::world::decorations::{DecorationLayer, DecorationTable};
use crate::world::geometry::Frustum;
use crate::world::render::ShaderProgram;
use crate::world::terrain::builder::WorldBuilder;
use crate::world::terrain::generation::WorldSeed;
use crate::world::terrain::lod::TerrainLods;
use crate::world::terrain::storage::ChunkStorage;

use super::config::TerrainConfig;

/// Что изменилось за один update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateStats {
    /// Уровни, сдвинувшие центр в этом кадре
    pub recentered: usize,
    /// Перестроенные чанки (не больше одного на уровень)
    pub rebuilt: usize,
    pub decorations_changed: bool,
}

pub struct WorldContext<S: ChunkStorage> {
    pub seed: WorldSeed,
    pub lods: TerrainLods<S>,
    pub decorations: DecorationTable,
    pub layers: Vec<DecorationLayer>,
    pub config: TerrainConfig,
}

impl<S: ChunkStorage> WorldContext<S> {
    /// Строит все LOD и декорации вокруг (0, 0)
    pub fn build<F>(seed: i32, range: u32, config: &TerrainConfig, builder: &WorldBuilder, make_storage: F) -> Self
    where
        F: FnMut(usize) -> S,
    {
        let start = Instant::now();
        let seed = WorldSeed::new(seed, config.octaves);
        info!("Seed: {}", seed.seed());

        let lods = TerrainLods::build(builder, range, &seed, config, make_storage);

        let mut decorations = DecorationTable::new(config.decoration_range, config.chunk_size, config);
        decorations.generate_all(&seed);

        let mut layers = DecorationLayer::default_layers();
        for layer in &mut layers {
            layer.refresh(&decorations, config.scale);
        }

        info!(
            "World ready in {:.3}s: {} LODs, {} decorations",
            start.elapsed().as_secs_f32(),
            lods.levels().len(),
            decorations.total()
        );

        Self { seed, lods, decorations, layers, config: *config }
    }

    /// Шаг кадра: потоковая генерация террейна и декораций
    pub fn update(&mut self, observer: Vec3) -> UpdateStats {
        use crate::world::terrain::table::RecenterStep;

        let mut stats = UpdateStats::default();
        for step in self.lods.update(observer.x, observer.z, &self.seed) {
            match step {
                RecenterStep::Recentered { .. } => stats.recentered += 1,
                RecenterStep::Rebuilt { .. } => stats.rebuilt += 1,
                RecenterStep::Idle => {}
            }
        }

        if self.decorations.gen_new_decorations(observer.x, observer.z, &self.seed) {
            for layer in &mut self.layers {
                layer.refresh(&self.decorations, self.config.scale);
            }
            debug!(
                "Decoration layers refreshed: {:?}",
                self.layers.iter().map(|l| (l.name, l.instance_count())).collect::<Vec<_>>()
            );
            stats.decorations_changed = true;
        }

        stats
    }

    pub fn draw<P: ShaderProgram>(&self, shader: &mut P, frustum: &Frustum) -> u32 {
        self.lods.draw(shader, frustum)
    }

    pub fn decoration_instances(&self) -> usize {
        self.layers.iter().map(|l| l.instance_count()).sum()
    }
}
