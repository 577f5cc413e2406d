// ============================================
// Gradient Noise - 2D градиентный шум (Perlin)
// ============================================

use super::lcg::Lcg;

/// Размер таблицы перестановки
pub const PERMUTATION_SIZE: usize = 256;

/// Четыре фиксированных градиента по осям
const GRADIENTS: [[f32; 2]; 4] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// Случайная перестановка 0..=255
#[derive(Clone, PartialEq, Eq)]
pub struct Permutation([u8; PERMUTATION_SIZE]);

impl Permutation {
    /// Тасование Фишера–Йетса на minstd_rand
    pub fn from_seed(seed: i32) -> Self {
        let mut values = [0u8; PERMUTATION_SIZE];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as u8;
        }

        let mut table = [0u8; PERMUTATION_SIZE];
        let mut lcg = Lcg::minstd(seed);
        let mut count = PERMUTATION_SIZE;
        for slot in table.iter_mut() {
            let index = lcg.next_u32() as usize % count;
            *slot = values[index];
            values[index] = values[count - 1];
            count -= 1;
        }

        Self(table)
    }

    #[inline(always)]
    pub fn get(&self, index: u32) -> u32 {
        self.0[(index % PERMUTATION_SIZE as u32) as usize] as u32
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Permutation({:?}..)", &self.0[..8])
    }
}

/// Хеш целочисленных координат через таблицу перестановки (0..=255)
///
/// Смешивает обе координаты умножением и циклическим сдвигом,
/// чтобы шум не повторялся вдоль осей.
#[inline]
pub fn hash_coords(x: i32, z: i32, p: &Permutation) -> u32 {
    let mut a = x as u32;
    let mut b = z as u32;
    a = a.wrapping_mul(3_284_157_443);
    b ^= a.rotate_left(16);
    b = b.wrapping_mul(1_911_520_717);
    a ^= b.rotate_left(16);
    a = a.wrapping_mul(2_048_419_325);

    p.get(p.get(p.get(a).wrapping_add(b)))
}

#[inline(always)]
fn gradient(x: i32, z: i32, p: &Permutation) -> [f32; 2] {
    GRADIENTS[(hash_coords(x, z, p) % 4) as usize]
}

#[inline(always)]
fn dot_gradient(grid_x: i32, grid_z: i32, x: f32, z: f32, p: &Permutation) -> f32 {
    let g = gradient(grid_x, grid_z, p);
    g[0] * (x - grid_x as f32) + g[1] * (z - grid_z as f32)
}

/// Интерполяция кривой 3t² - 2t³ (t в 0..1)
#[inline(always)]
pub fn interpolate(a: f32, b: f32, t: f32) -> f32 {
    (b - a) * (3.0 - t * 2.0) * t * t + a
}

/// 2D градиентный шум; ноль во всех целочисленных точках
#[inline]
pub fn noise(x: f32, z: f32, p: &Permutation) -> f32 {
    let left = x.floor() as i32;
    let lower = z.floor() as i32;
    let right = left.wrapping_add(1);
    let upper = lower.wrapping_add(1);

    let lower_left = dot_gradient(left, lower, x, z, p);
    let lower_right = dot_gradient(right, lower, x, z, p);
    let upper_left = dot_gradient(left, upper, x, z, p);
    let upper_right = dot_gradient(right, upper, x, z, p);

    let tx = x - left as f32;
    let tz = z - lower as f32;
    let lerped_lower = interpolate(lower_left, lower_right, tx);
    let lerped_upper = interpolate(upper_left, upper_right, tx);
    interpolate(lerped_lower, lerped_upper, tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(p: &Permutation) -> bool {
        let mut seen = [false; PERMUTATION_SIZE];
        for &v in p.as_slice() {
            if seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
        seen.iter().all(|&s| s)
    }

    #[test]
    fn test_permutation_is_bijection() {
        for seed in [0, 1, 42, -7, i32::MAX, i32::MIN, 123_456] {
            assert!(is_permutation(&Permutation::from_seed(seed)), "seed {}", seed);
        }
    }

    #[test]
    fn test_permutation_deterministic() {
        assert_eq!(Permutation::from_seed(42), Permutation::from_seed(42));
        assert_ne!(Permutation::from_seed(42), Permutation::from_seed(43));
    }

    #[test]
    fn test_noise_zero_at_lattice_points() {
        let p = Permutation::from_seed(7);
        for x in -5..5 {
            for z in -5..5 {
                assert_eq!(noise(x as f32, z as f32, &p), 0.0);
            }
        }
    }

    #[test]
    fn test_noise_continuous_near_lattice() {
        let p = Permutation::from_seed(99);
        for i in -3..3 {
            let at = noise(i as f32, 2.0, &p);
            let near = noise(i as f32 + 1e-3, 2.0, &p);
            assert!((at - near).abs() < 1e-2);
        }
    }

    #[test]
    fn test_noise_continuous_across_cell_boundary() {
        let p = Permutation::from_seed(5);
        let below = noise(2.0 - 1e-4, 0.37, &p);
        let above = noise(2.0 + 1e-4, 0.37, &p);
        assert!((below - above).abs() < 1e-3);
    }

    #[test]
    fn test_noise_bounded() {
        let p = Permutation::from_seed(3);
        for i in 0..1000 {
            let x = i as f32 * 0.173 - 50.0;
            let z = i as f32 * 0.311 + 20.0;
            let n = noise(x, z, &p);
            assert!(n.abs() <= 1.0, "noise({}, {}) = {}", x, z, n);
        }
    }

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate(2.0, 5.0, 0.0), 2.0);
        assert_eq!(interpolate(2.0, 5.0, 1.0), 5.0);
        assert!((interpolate(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }
}
