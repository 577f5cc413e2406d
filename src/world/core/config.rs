// ============================================
// Config - Общая конфигурация мира
// ============================================
// Одна структура на всё: поле высот, построитель мешей, таблицы чанков
// и декорации читают константы только отсюда.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::WorldError;

/// Количество отрезков сетки чанка
pub const DEFAULT_PREC: u32 = 40;
/// Половина ширины чанка (LOD 0)
pub const DEFAULT_CHUNK_SIZE: f32 = 64.0;
/// Максимальная высота террейна
pub const DEFAULT_HEIGHT: f32 = 270.0;
/// Масштаб мира при отрисовке
pub const DEFAULT_SCALE: f32 = 2.5;
/// Базовый период шума
pub const DEFAULT_FREQUENCY: f32 = 720.0;
/// Количество октав (длина WorldSeed)
pub const DEFAULT_OCTAVES: usize = 9;
pub const DEFAULT_LOD_COUNT: usize = 5;
pub const DEFAULT_LOD_SCALE: f32 = 2.0;
pub const DEFAULT_RANGE: u32 = 8;
pub const MIN_RANGE: u32 = 6;
pub const MAX_RANGE: u32 = 48;
pub const DEFAULT_DECORATION_RANGE: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub prec: u32,
    pub chunk_size: f32,
    pub height: f32,
    pub scale: f32,
    pub frequency: f32,
    pub octaves: usize,
    pub lod_count: usize,
    pub lod_scale: f32,
    /// Шаг конечных разностей для нормалей
    pub normal_epsilon: f32,
    /// Минимальная |высота| вершины в долях от максимальной (против z-fighting с водой)
    pub height_floor: f32,
    pub decoration_range: u32,
    pub default_range: u32,
    pub min_range: u32,
    pub max_range: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            prec: DEFAULT_PREC,
            chunk_size: DEFAULT_CHUNK_SIZE,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            frequency: DEFAULT_FREQUENCY,
            octaves: DEFAULT_OCTAVES,
            lod_count: DEFAULT_LOD_COUNT,
            lod_scale: DEFAULT_LOD_SCALE,
            normal_epsilon: 0.01,
            height_floor: 0.007,
            decoration_range: DEFAULT_DECORATION_RANGE,
            default_range: DEFAULT_RANGE,
            min_range: MIN_RANGE,
            max_range: MAX_RANGE,
        }
    }
}

impl TerrainConfig {
    /// Загрузить из JSON; отсутствующие поля берутся по умолчанию
    pub fn load_from_json(json: &str) -> Result<Self, WorldError> {
        let config: TerrainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WorldError> {
        let json = fs::read_to_string(path)?;
        Self::load_from_json(&json)
    }

    pub fn validate(&self) -> Result<(), WorldError> {
        let invalid = |reason: &str| Err(WorldError::InvalidConfig(reason.to_string()));

        if self.prec == 0 {
            return invalid("prec must be positive");
        }
        if self.octaves == 0 {
            return invalid("octaves must be positive");
        }
        if self.lod_count == 0 {
            return invalid("lod_count must be positive");
        }
        if !(self.chunk_size > 0.0 && self.height > 0.0 && self.scale > 0.0 && self.frequency > 0.0) {
            return invalid("chunk_size, height, scale and frequency must be positive");
        }
        if self.lod_scale < 1.0 {
            return invalid("lod_scale must be at least 1");
        }
        if self.min_range > self.max_range {
            return invalid("min_range exceeds max_range");
        }
        Ok(())
    }

    /// Поправка на перекрытие соседних чанков: PREC / (PREC + 1)
    #[inline]
    pub fn overlap(&self) -> f32 {
        self.prec as f32 / (self.prec + 1) as f32
    }

    /// Количество вершин в одном чанке
    #[inline]
    pub fn vertices_per_chunk(&self) -> usize {
        let side = self.prec as usize + 1;
        side * side
    }

    /// Ограничить дальность прорисовки допустимым диапазоном
    pub fn clamp_range(&self, range: u32) -> u32 {
        range.clamp(self.min_range, self.max_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(TerrainConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = TerrainConfig::load_from_json(r#"{ "prec": 8, "octaves": 4 }"#).unwrap();
        assert_eq!(config.prec, 8);
        assert_eq!(config.octaves, 4);
        assert_eq!(config.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn test_invalid_json_values_rejected() {
        let err = TerrainConfig::load_from_json(r#"{ "prec": 0 }"#).unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));

        let err = TerrainConfig::load_from_json(r#"{ "min_range": 10, "max_range": 2 }"#).unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = TerrainConfig::load_from_json("{ prec: ").unwrap_err();
        assert!(matches!(err, WorldError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "scale": 1.0, "lod_count": 2 }}"#).unwrap();

        let config = TerrainConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.lod_count, 2);
    }

    #[test]
    fn test_missing_file() {
        let err = TerrainConfig::load_from_file("/nonexistent/infworld.json").unwrap_err();
        assert!(matches!(err, WorldError::Io(_)));
    }

    #[test]
    fn test_clamp_range() {
        let config = TerrainConfig::default();
        assert_eq!(config.clamp_range(1), MIN_RANGE);
        assert_eq!(config.clamp_range(100), MAX_RANGE);
        assert_eq!(config.clamp_range(10), 10);
    }
}
