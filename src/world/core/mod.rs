// ============================================
// Core Module - Конфигурация, ошибки, запуск
// ============================================

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod resources;

pub use app::run;
pub use config::TerrainConfig;
pub use error::WorldError;
pub use resources::{UpdateStats, WorldContext};
