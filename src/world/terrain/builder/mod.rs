// ============================================
// Builder - Первичная постройка таблиц чанков
// ============================================

pub mod world_builder;

pub use world_builder::{WorldBuilder, MIN_BUILD_THREADS};
