// ============================================
// Decoration Types - Виды декораций
// ============================================

use ultraviolet::Vec3;

/// Вид декорации со своими параметрами размещения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationType {
    Tree,
    PineTree,
}

impl DecorationType {
    /// Порядок генерации внутри ячейки (важен для потока случайных чисел)
    pub const GENERATION_ORDER: [DecorationType; 2] = [DecorationType::PineTree, DecorationType::Tree];

    /// Верхняя граница (не включая) числа попыток размещения на ячейку
    pub fn max_count(self) -> u32 {
        match self {
            DecorationType::Tree => 36,
            DecorationType::PineTree => 120,
        }
    }

    /// Допустимая высота в долях от максимальной
    pub fn height_band(self) -> (f32, f32) {
        match self {
            DecorationType::Tree => (0.02, 0.2),
            DecorationType::PineTree => (0.04, 0.3),
        }
    }

    #[inline]
    pub fn accepts_height(self, fraction: f32) -> bool {
        let (low, high) = self.height_band();
        fraction >= low && fraction <= high
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub position: Vec3,
    pub kind: DecorationType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_bands() {
        assert!(DecorationType::Tree.accepts_height(0.1));
        assert!(!DecorationType::Tree.accepts_height(0.25));
        assert!(DecorationType::PineTree.accepts_height(0.25));
        assert!(!DecorationType::PineTree.accepts_height(0.03));
        assert!(!DecorationType::Tree.accepts_height(-0.5));
    }
}
