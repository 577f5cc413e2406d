// ============================================
// Decorations - Деревья вокруг наблюдателя
// ============================================

pub mod types;
pub mod table;
pub mod offsets;

pub use types::{Decoration, DecorationType};
pub use table::{cell_seed, generate_cell, DecorationTable};
pub use offsets::{generate_offsets, DecorationLayer};
