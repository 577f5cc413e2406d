// ============================================
// Decoration Table - Окно ячеек с деревьями
// ============================================
// Тот же принцип окна, что у таблицы чанков, но ячейка
// перегенерируется целиком и сразу (без очереди).

use log::debug;
use ultraviolet::Vec3;

use crate::world::core::TerrainConfig;
use crate::world::terrain::generation::{get_height, hash_coords, noise, Lcg, WorldSeed};
use crate::world::terrain::grid::{self, window, ChunkPos};

use super::types::{Decoration, DecorationType};

/// Масштаб шума, определяющего "лесные" области
const BIOME_SCALE: f32 = 128.0;

/// Seed ячейки: хеш координат через первую перестановку (0..255)
pub fn cell_seed(pos: ChunkPos, seed: &WorldSeed) -> i32 {
    hash_coords(pos.x, pos.z, seed.primary()) as i32
}

/// Все декорации одной ячейки; чистая функция координаты
pub fn generate_cell(pos: ChunkPos, seed: &WorldSeed, chunkscale: f32, config: &TerrainConfig) -> Vec<Decoration> {
    let mut lcg = Lcg::minstd0(cell_seed(pos, seed));
    let overlap = config.overlap();
    let cell = grid::cell_size(chunkscale, config);
    let (cell_x, cell_z) = (pos.x as f32 * cell, pos.z as f32 * cell);
    let prec = config.prec;

    let mut decorations = Vec::new();

    for kind in DecorationType::GENERATION_ORDER {
        let amount = lcg.next_u32() % kind.max_count();
        for _ in 0..amount {
            let dx = (lcg.next_u32() % prec) as f32 / prec as f32 - 0.5;
            let dz = (lcg.next_u32() % prec) as f32 / prec as f32 - 0.5;
            let x = dx * cell + cell_x;
            let z = dz * cell + cell_z;
            let y = get_height(x, z, seed, config) * config.height;

            decorations.push(Decoration {
                position: Vec3::new(x * overlap, y - 0.5, z * overlap),
                kind,
            });
        }
    }

    decorations.retain(|d| {
        let biome = noise(d.position.x / BIOME_SCALE, d.position.z / BIOME_SCALE, seed.primary());
        biome >= 0.0 && d.kind.accepts_height(d.position.y / config.height)
    });

    decorations
}

pub struct DecorationTable {
    range: u32,
    chunkscale: f32,
    center: ChunkPos,
    positions: Vec<ChunkPos>,
    decorations: Vec<Vec<Decoration>>,
    config: TerrainConfig,
}

impl DecorationTable {
    /// Ячейки окна вокруг (0, 0), пока без декораций
    pub fn new(range: u32, chunkscale: f32, config: &TerrainConfig) -> Self {
        let positions: Vec<ChunkPos> = window(ChunkPos::default(), range).collect();
        let decorations = vec![Vec::new(); positions.len()];

        Self {
            range,
            chunkscale,
            center: ChunkPos::default(),
            positions,
            decorations,
            config: *config,
        }
    }

    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    pub fn center(&self) -> ChunkPos {
        self.center
    }

    pub fn positions(&self) -> &[ChunkPos] {
        &self.positions
    }

    pub fn decorations(&self, index: usize) -> &[Decoration] {
        &self.decorations[index]
    }

    /// (позиция ячейки, её декорации)
    pub fn cells(&self) -> impl Iterator<Item = (ChunkPos, &[Decoration])> {
        self.positions.iter().copied().zip(self.decorations.iter().map(Vec::as_slice))
    }

    /// Общее число декораций
    pub fn total(&self) -> usize {
        self.decorations.iter().map(Vec::len).sum()
    }

    fn generate(&mut self, index: usize, seed: &WorldSeed) {
        self.decorations[index] = generate_cell(self.positions[index], seed, self.chunkscale, &self.config);
    }

    /// Заполнить все ячейки
    pub fn generate_all(&mut self, seed: &WorldSeed) {
        for index in 0..self.count() {
            self.generate(index, seed);
        }
    }

    /// Ячейка под мировой точкой; ширина ячейки с двойной поправкой на перекрытие
    pub fn world_to_grid(&self, x: f32, z: f32) -> ChunkPos {
        let overlap = self.config.overlap();
        let cell = grid::world_to_grid(x, z, self.chunkscale * overlap * overlap, self.config.scale);
        grid::clamp_center(cell, self.range)
    }

    /// true, если окно сдвинулось и ячейки перегенерированы
    pub fn gen_new_decorations(&mut self, x: f32, z: f32, seed: &WorldSeed) -> bool {
        let target = self.world_to_grid(x, z);
        if target == self.center {
            return false;
        }

        let range = self.range;
        let old_center = self.center;
        let new_cells = window(target, range).filter(|p| !p.within(old_center, range));
        let freed: Vec<usize> = self
            .positions
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.within(target, range))
            .map(|(i, _)| i)
            .collect();

        let mut regenerated = 0;
        for (index, pos) in freed.into_iter().zip(new_cells) {
            self.positions[index] = pos;
            self.generate(index, seed);
            regenerated += 1;
        }

        self.center = target;
        debug!("Decorations recentered to {:?}, {} cells regenerated", target, regenerated);

        true
    }
}
