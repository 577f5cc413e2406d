// ============================================
// Generation - Шум и поле высот
// ============================================

pub mod lcg;
pub mod noise;
pub mod seed;
pub mod height;

pub use lcg::Lcg;
pub use noise::{noise, hash_coords, Permutation, PERMUTATION_SIZE};
pub use seed::WorldSeed;
pub use height::{get_height, raw_height, remap, terrain_vertex};
