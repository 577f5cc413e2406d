// ============================================
// Decoration Offsets - Инстансы для рендера
// ============================================
// Плоский массив x, y, z (уже в мировом масштабе) на каждый инстанс.
// Пересобирается целиком при любом сдвиге таблицы.

use super::table::DecorationTable;
use super::types::DecorationType;

/// Смещения декораций вида kind в кольце min_range <= d < max_range от центра
pub fn generate_offsets(table: &DecorationTable, kind: DecorationType, min_range: u32, max_range: u32, scale: f32) -> Vec<f32> {
    let center = table.center();
    let mut offsets = Vec::new();

    for (pos, decorations) in table.cells() {
        let dx = pos.x.abs_diff(center.x);
        let dz = pos.z.abs_diff(center.z);
        if pos.inside_ring(center, min_range) || dx >= max_range || dz >= max_range {
            continue;
        }

        for d in decorations.iter().filter(|d| d.kind == kind) {
            offsets.extend_from_slice(&[d.position.x * scale, d.position.y * scale, d.position.z * scale]);
        }
    }

    offsets
}

/// Один инстанс-буфер: вид декорации, модель нужной детализации и кольцо
#[derive(Debug, Clone)]
pub struct DecorationLayer {
    pub name: &'static str,
    pub kind: DecorationType,
    pub min_range: u32,
    pub max_range: u32,
    offsets: Vec<f32>,
}

impl DecorationLayer {
    pub fn new(name: &'static str, kind: DecorationType, min_range: u32, max_range: u32) -> Self {
        Self { name, kind, min_range, max_range, offsets: Vec::new() }
    }

    /// Стандартный набор: детальные модели рядом, упрощённые дальше
    pub fn default_layers() -> Vec<DecorationLayer> {
        vec![
            DecorationLayer::new("pinetree", DecorationType::PineTree, 0, 5),
            DecorationLayer::new("pinetreelowdetail", DecorationType::PineTree, 5, 999),
            DecorationLayer::new("tree", DecorationType::Tree, 0, 5),
            DecorationLayer::new("treelowdetail", DecorationType::Tree, 5, 16),
        ]
    }

    pub fn refresh(&mut self, table: &DecorationTable, scale: f32) {
        self.offsets = generate_offsets(table, self.kind, self.min_range, self.max_range, scale);
    }

    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    pub fn instance_count(&self) -> usize {
        self.offsets.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::core::TerrainConfig;
    use crate::world::terrain::generation::WorldSeed;

    fn table() -> DecorationTable {
        let config = TerrainConfig { octaves: 4, ..TerrainConfig::default() };
        let seed = WorldSeed::new(77, config.octaves);
        let mut table = DecorationTable::new(3, config.chunk_size, &config);
        table.generate_all(&seed);
        table
    }

    fn count_kind(table: &DecorationTable, kind: DecorationType) -> usize {
        table.cells().map(|(_, d)| d.iter().filter(|d| d.kind == kind).count()).sum()
    }

    #[test]
    fn test_rings_partition_all() {
        let table = table();
        for kind in [DecorationType::Tree, DecorationType::PineTree] {
            let near = generate_offsets(&table, kind, 0, 2, 1.0).len() / 3;
            let far = generate_offsets(&table, kind, 2, 999, 1.0).len() / 3;
            assert_eq!(near + far, count_kind(&table, kind));
        }
    }

    #[test]
    fn test_offsets_scaled() {
        let table = table();
        let plain = generate_offsets(&table, DecorationType::PineTree, 0, 999, 1.0);
        let scaled = generate_offsets(&table, DecorationType::PineTree, 0, 999, 2.5);
        assert_eq!(plain.len(), scaled.len());
        for (a, b) in plain.iter().zip(&scaled) {
            assert!((a * 2.5 - b).abs() < 1e-3);
        }
    }

    #[test]
    fn test_layers_refresh() {
        let table = table();
        let mut layers = DecorationLayer::default_layers();
        for layer in &mut layers {
            layer.refresh(&table, 2.5);
            assert_eq!(layer.offsets().len(), layer.instance_count() * 3);
        }
        let pines: usize = layers
            .iter()
            .filter(|l| l.kind == DecorationType::PineTree)
            .map(|l| l.instance_count())
            .sum();
        assert_eq!(pines, count_kind(&table, DecorationType::PineTree));
    }

    #[test]
    fn test_empty_ring() {
        let table = table();
        assert!(generate_offsets(&table, DecorationType::Tree, 4, 4, 1.0).is_empty());
    }
}
