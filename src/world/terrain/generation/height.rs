// ============================================
// Height Field - Фрактальная карта высот
// ============================================

use ultraviolet::Vec3;

use crate::world::core::TerrainConfig;
use super::noise::noise;
use super::seed::WorldSeed;

/// Границы кусочно-линейной кривой: (вход от, вход до, выход от, выход до)
const REMAP_SEGMENTS: [(f32, f32, f32, f32); 4] = [
    (-1.0, -0.1, -1.0, 0.003),
    (-0.1, 0.0, 0.003, 0.03),
    (0.0, 0.15, 0.03, 0.12),
    (0.15, 1.0, 0.12, 1.0),
];

/// Линейное отображение x из [lower, upper] в [a, b]
#[inline]
pub fn interpolate(x: f32, lower: f32, upper: f32, a: f32, b: f32) -> f32 {
    (x - lower) / (upper - lower) * (b - a) + a
}

/// Сжимает низины к нулю (равнины и водоёмы) и растягивает вершины
#[inline]
pub fn remap(height: f32) -> f32 {
    let (lower, upper, a, b) = if height < -0.1 {
        REMAP_SEGMENTS[0]
    } else if height < 0.0 {
        REMAP_SEGMENTS[1]
    } else if height < 0.15 {
        REMAP_SEGMENTS[2]
    } else {
        REMAP_SEGMENTS[3]
    };
    interpolate(height, lower, upper, a, b)
}

/// Сумма октав шума до перераспределения; частота и амплитуда делятся пополам
#[inline]
pub fn raw_height(x: f32, z: f32, seed: &WorldSeed, base_frequency: f32) -> f32 {
    let mut height = 0.0;
    let mut freq = base_frequency;
    let mut amplitude = 1.0;

    for permutation in seed.iter() {
        height += noise(x / freq, z / freq, permutation) * amplitude;
        freq /= 2.0;
        amplitude /= 2.0;
    }

    height
}

/// Нормализованная высота (примерно -1..1)
#[inline]
pub fn get_height(x: f32, z: f32, seed: &WorldSeed, config: &TerrainConfig) -> f32 {
    remap(raw_height(x, z, seed, config.frequency))
}

/// Вершина террейна в мировых единицах; высота никогда не равна нулю
#[inline]
pub fn terrain_vertex(x: f32, z: f32, seed: &WorldSeed, config: &TerrainConfig) -> Vec3 {
    let floor = config.height_floor * config.height;
    let h = get_height(x, z, seed, config) * config.height;
    let h = if h <= 0.0 { h.min(-floor) } else { h.max(floor) };
    Vec3::new(x, h, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (WorldSeed, TerrainConfig) {
        let config = TerrainConfig::default();
        (WorldSeed::new(42, config.octaves), config)
    }

    #[test]
    fn test_height_deterministic() {
        let (seed, config) = setup();
        let again = WorldSeed::new(42, config.octaves);
        for i in 0..50 {
            let x = i as f32 * 37.3 - 800.0;
            let z = i as f32 * -11.9 + 100.0;
            let h = get_height(x, z, &seed, &config);
            assert_eq!(h.to_bits(), get_height(x, z, &seed, &config).to_bits());
            assert_eq!(h.to_bits(), get_height(x, z, &again, &config).to_bits());
        }
    }

    #[test]
    fn test_height_pinned_for_seed_42() {
        // Мир сида 42 одинаков между запусками и версиями
        let (seed, config) = setup();
        let pinned = [
            (123.4f32, -567.8f32, -0.167_112_59f32),
            (1000.0, 250.0, 0.382_960_32),
            (-3210.5, 77.25, 0.146_306_14),
        ];
        for (x, z, expected) in pinned {
            let h = get_height(x, z, &seed, &config);
            assert!((h - expected).abs() < 1e-6, "get_height({}, {}) = {}", x, z, h);
        }
    }

    #[test]
    fn test_remap_breakpoints_continuous() {
        let eps = 1e-5;
        for breakpoint in [-0.1f32, 0.0, 0.15] {
            let below = remap(breakpoint - eps);
            let above = remap(breakpoint + eps);
            let at = remap(breakpoint);
            assert!((below - above).abs() < 1e-4, "jump at {}", breakpoint);
            assert!((below - at).abs() < 1e-4);
        }
    }

    #[test]
    fn test_remap_targets() {
        assert!((remap(-1.0) + 1.0).abs() < 1e-6);
        assert!((remap(-0.1) - 0.003).abs() < 1e-6);
        assert!((remap(0.0) - 0.03).abs() < 1e-6);
        assert!((remap(0.15) - 0.12).abs() < 1e-6);
        assert!((remap(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_remap_monotonic() {
        let mut prev = remap(-1.0);
        for i in 1..=200 {
            let v = remap(-1.0 + i as f32 * 0.01);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_vertex_never_at_water_level() {
        let (seed, config) = setup();
        let floor = config.height_floor * config.height;
        for i in 0..200 {
            let v = terrain_vertex(i as f32 * 13.0, i as f32 * 7.0, &seed, &config);
            assert!(v.y.abs() >= floor - 1e-4);
        }
    }

    #[test]
    fn test_height_roughly_normalized() {
        let (seed, config) = setup();
        for i in 0..500 {
            let h = get_height(i as f32 * 51.7, i as f32 * -23.1, &seed, &config);
            assert!(h > -1.5 && h < 1.5);
        }
    }
}
