// ============================================
// Chunk Position - Позиция чанка в решётке LOD
// ============================================

use crate::world::core::TerrainConfig;

/// Координата чанка в единицах "ширин чанка" своего LOD
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Расстояние Чебышёва
    #[inline]
    pub fn chebyshev(&self, other: ChunkPos) -> u32 {
        self.x.abs_diff(other.x).max(self.z.abs_diff(other.z))
    }

    /// Лежит ли позиция в окне (2·range+1)² вокруг center
    #[inline]
    pub fn within(&self, center: ChunkPos, range: u32) -> bool {
        self.chebyshev(center) <= range
    }

    /// Внутри кольца, уже покрытого более детальным LOD
    #[inline]
    pub fn inside_ring(&self, center: ChunkPos, min_range: u32) -> bool {
        self.x.abs_diff(center.x) < min_range && self.z.abs_diff(center.z) < min_range
    }
}

/// Сдвигает центр так, чтобы всё окно радиуса range помещалось в i32
#[inline]
pub fn clamp_center(center: ChunkPos, range: u32) -> ChunkPos {
    let r = range.min(i32::MAX as u32 / 2) as i32;
    ChunkPos::new(
        center.x.clamp(i32::MIN + r, i32::MAX - r),
        center.z.clamp(i32::MIN + r, i32::MAX - r),
    )
}

/// Все позиции окна вокруг center; x во внешнем цикле.
/// center должен пройти через clamp_center

pub fn window(center: ChunkPos, range: u32) -> impl Iterator<Item = ChunkPos> {
    let r = range as i32;
    (center.x - r..=center.x + r)
        .flat_map(move |x| (center.z - r..=center.z + r).map(move |z| ChunkPos::new(x, z)))
}

/// Размер ячейки решётки в "сырых" единицах (до умножения на scale)
#[inline]
pub fn cell_size(chunkscale: f32, config: &TerrainConfig) -> f32 {
    chunkscale * 2.0 * config.overlap()
}

/// Мировая позиция наблюдателя -> ячейка решётки с половиной ширины chunk_half
#[inline]
pub fn world_to_grid(x: f32, z: f32, chunk_half: f32, scale: f32) -> ChunkPos {
    let half = chunk_half * scale;
    ChunkPos::new(
        ((x + half) / (half * 2.0)).floor() as i32,
        ((z + half) / (half * 2.0)).floor() as i32,
    )
}

/// Центр чанка в мировых единицах до масштабирования (смещение для transform)
#[inline]
pub fn grid_to_world(pos: ChunkPos, chunkscale: f32, config: &TerrainConfig) -> (f32, f32) {
    let size = cell_size(chunkscale, config);
    (pos.x as f32 * size, pos.z as f32 * size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev() {
        let a = ChunkPos::new(1, -3);
        assert_eq!(a.chebyshev(ChunkPos::new(4, -2)), 3);
        assert_eq!(a.chebyshev(a), 0);
    }

    #[test]
    fn test_window_covers_square() {
        let positions: Vec<_> = window(ChunkPos::new(5, -5), 2).collect();
        assert_eq!(positions.len(), 25);
        assert!(positions.iter().all(|p| p.within(ChunkPos::new(5, -5), 2)));
        assert_eq!(positions[0], ChunkPos::new(3, -7));
        assert_eq!(positions[1], ChunkPos::new(3, -6));
    }

    #[test]
    fn test_world_to_grid_centered_cells() {
        // Ячейка 0 покрывает [-half, half)
        assert_eq!(world_to_grid(0.0, 0.0, 10.0, 1.0), ChunkPos::new(0, 0));
        assert_eq!(world_to_grid(9.9, -9.9, 10.0, 1.0), ChunkPos::new(0, 0));
        assert_eq!(world_to_grid(10.0, -10.1, 10.0, 1.0), ChunkPos::new(1, -1));
        assert_eq!(world_to_grid(45.0, 0.0, 10.0, 1.5), ChunkPos::new(2, 0));
    }

    #[test]
    fn test_grid_round_trip() {
        let config = TerrainConfig::default();
        let cs = config.chunk_size;
        let half = cs * config.overlap();
        for pos in window(ChunkPos::new(-3, 7), 3) {
            let (wx, wz) = grid_to_world(pos, cs, &config);
            let back = world_to_grid(wx * config.scale, wz * config.scale, half, config.scale);
            assert_eq!(back, pos);
        }
    }

    #[test]
    fn test_far_observer_window_fits() {
        let far = world_to_grid(1.0e12, -1.0e12, 10.0, 1.0);
        let center = clamp_center(far, 3);
        assert_eq!(center, ChunkPos::new(i32::MAX - 3, i32::MIN + 3));
        assert_eq!(window(center, 3).count(), 49);
        assert_eq!(clamp_center(ChunkPos::new(5, -5), 3), ChunkPos::new(5, -5));
    }

    #[test]
    fn test_inside_ring() {
        let c = ChunkPos::new(0, 0);
        assert!(ChunkPos::new(1, -1).inside_ring(c, 2));
        assert!(!ChunkPos::new(2, 0).inside_ring(c, 2));
    }
}
