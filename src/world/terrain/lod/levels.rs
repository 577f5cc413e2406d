// ============================================
// LOD Levels - Стек таблиц чанков разной детализации
// ============================================
// Уровень i имеет половину ширины чанка chunk_size · lod_scale^i.
// Все уровни используют одинаковый range, поэтому каждый следующий
// покрывает в lod_scale раз большую площадь.

use ultraviolet::Vec2;

use crate::world::core::TerrainConfig;
use crate::world::geometry::Frustum;
use crate::world::render::ShaderProgram;
use crate::world::terrain::builder::WorldBuilder;
use crate::world::terrain::generation::WorldSeed;
use crate::world::terrain::storage::ChunkStorage;
use crate::world::terrain::table::{ChunkTable, RecenterStep};

pub struct TerrainLods<S: ChunkStorage> {
    levels: Vec<ChunkTable<S>>,
    range: u32,
    config: TerrainConfig,
}

impl<S: ChunkStorage> TerrainLods<S> {
    /// Строит lod_count уровней; make_storage создаёт хранилище для уровня
    pub fn build<F>(builder: &WorldBuilder, range: u32, seed: &WorldSeed, config: &TerrainConfig, mut make_storage: F) -> Self
    where
        F: FnMut(usize) -> S,
    {
        let mut chunkscale = config.chunk_size;
        let mut levels = Vec::with_capacity(config.lod_count);

        for level in 0..config.lod_count {
            levels.push(builder.build_world(range, seed, config.height, chunkscale, make_storage(level), config));
            chunkscale *= config.lod_scale;
        }

        Self { levels, range, config: *config }
    }

    pub fn levels(&self) -> &[ChunkTable<S>] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Option<&ChunkTable<S>> {
        self.levels.get(index)
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    /// Перестройки, ожидающие во всех уровнях
    pub fn pending(&self) -> usize {
        self.levels.iter().map(|t| t.pending()).sum()
    }

    /// Один шаг потоковой генерации на каждом уровне
    pub fn update(&mut self, x: f32, z: f32, seed: &WorldSeed) -> Vec<RecenterStep> {
        self.levels
            .iter_mut()
            .map(|table| table.generate_new_chunks(x, z, seed))
            .collect()
    }

    /// Дальность видимости самого грубого уровня в мировых единицах
    pub fn view_distance(&self) -> f32 {
        let exponent = self.config.lod_count as i32 - 2;
        self.config.chunk_size
            * self.config.scale
            * 2.0
            * self.range as f32
            * self.config.lod_scale.powi(exponent)
    }

    /// Граница, за которой уровень level уступает следующему: (center, maxrange)
    fn blend_uniforms(&self, level: usize) -> (Vec2, f32) {
        let Some(next) = self.levels.get(level + 1) else {
            return (Vec2::zero(), -1.0);
        };

        let overlap = self.config.overlap();
        let scale = self.config.scale;
        let next_size = next.scale() * 2.0 * overlap;
        let next_range = next.range() as f32 / self.config.lod_scale - 0.5;
        // Небольшой нахлёст против трещин, растущий с грубостью уровня
        let seam = 8.0 * level as f32 + 4.0;
        let maxrange = next_size * next_range * scale + seam;

        let center = next.center();
        let center = Vec2::new(center.x as f32, center.z as f32) * overlap * next.scale() * scale * 2.0;

        (center, maxrange)
    }

    /// Рисует все уровни; уровни > 0 пропускают кольцо предыдущего
    pub fn draw<P: ShaderProgram>(&self, shader: &mut P, frustum: &Frustum) -> u32 {
        shader.uniform_f32("viewdist", self.view_distance());
        shader.uniform_f32("maxheight", self.config.height);

        let lod_scale = (self.config.lod_scale as u32).max(1);
        let mut drawn = 0;

        for (i, table) in self.levels.iter().enumerate() {
            shader.uniform_f32("chunksz", table.scale());
            let (center, maxrange) = self.blend_uniforms(i);
            shader.uniform_vec2("center", center);
            shader.uniform_f32("maxrange", maxrange);

            drawn += if i == 0 {
                table.draw(shader, frustum)
            } else {
                let min_range = self.levels[i - 1].range() / lod_scale;
                table.draw_outside(shader, min_range, frustum)
            };
        }

        drawn
    }
}
