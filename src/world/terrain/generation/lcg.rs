// ============================================
// LCG - Линейный конгруэнтный генератор
// ============================================
// Параметры совпадают с minstd (Park–Miller): модуль 2^31 - 1,
// множитель 48271 (minstd_rand) или 16807 (minstd_rand0).

const MODULUS: u64 = 2_147_483_647;

/// Множитель minstd_rand
pub const MINSTD: u64 = 48_271;
/// Множитель minstd_rand0
pub const MINSTD0: u64 = 16_807;

/// Линейный конгруэнтный генератор без смещения
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
    multiplier: u64,
}

impl Lcg {
    /// Создаёт генератор; отрицательный seed трактуется как беззнаковое число
    pub fn new(seed: i32, multiplier: u64) -> Self {
        let state = (seed as i64 as u64) % MODULUS;
        Self {
            state: if state == 0 { 1 } else { state },
            multiplier,
        }
    }

    /// minstd_rand
    pub fn minstd(seed: i32) -> Self {
        Self::new(seed, MINSTD)
    }

    /// minstd_rand0
    pub fn minstd0(seed: i32) -> Self {
        Self::new(seed, MINSTD0)
    }

    /// Следующее значение в диапазоне 1..2^31-1
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state * self.multiplier % MODULUS;
        self.state as u32
    }
}
