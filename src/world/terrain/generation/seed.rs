// ============================================
// World Seed - Набор перестановок для октав
// ============================================

use super::lcg::Lcg;
use super::noise::Permutation;

/// Упорядоченный набор перестановок, по одной на октаву.
/// Неизменяем после создания и разделяется между потоками без блокировок.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldSeed {
    seed: i32,
    permutations: Vec<Permutation>,
}

impl WorldSeed {
    /// Каждая перестановка получает своё значение из minstd_rand(seed)
    pub fn new(seed: i32, octaves: usize) -> Self {
        let mut lcg = Lcg::minstd(seed);
        let permutations = (0..octaves)
            .map(|_| Permutation::from_seed(lcg.next_u32() as i32))
            .collect();

        Self { seed, permutations }
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn octaves(&self) -> usize {
        self.permutations.len()
    }

    /// Первая перестановка (биомы и seed ячеек декораций)
    pub fn primary(&self) -> &Permutation {
        &self.permutations[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permutation> {
        self.permutations.iter()
    }
}
