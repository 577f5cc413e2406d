// ============================================
// Normal Compression - Нормаль как пара углов
// ============================================

use std::f32::consts::TAU;
use ultraviolet::Vec3;

/// Единичная нормаль -> [азимут в плоскости XZ (0..2π), возвышение (asin y)]
#[inline]
pub fn compress_normal(n: Vec3) -> [f32; 2] {
    let azimuth = n.z.atan2(n.x).rem_euclid(TAU);
    // rem_euclid округляет крошечные отрицательные углы до TAU
    let azimuth = if azimuth >= TAU { 0.0 } else { azimuth };
    let elevation = n.y.clamp(-1.0, 1.0).asin();
    [azimuth, elevation]
}

#[inline]
pub fn decompress_normal(angles: [f32; 2]) -> Vec3 {
    let [azimuth, elevation] = angles;
    let horizontal = elevation.cos();
    Vec3::new(horizontal * azimuth.cos(), elevation.sin(), horizontal * azimuth.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).mag() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_up_normal() {
        let [_, elevation] = compress_normal(Vec3::unit_y());
        assert!((elevation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_azimuth_range() {
        for n in [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.3, 0.2, -0.9).normalized(),
            Vec3::new(1.0, 0.0, -1e-9),
            Vec3::new(0.6, 0.8, -1e-12),
        ] {
            let [azimuth, _] = compress_normal(n);
            assert!((0.0..TAU).contains(&azimuth));
        }
    }

    #[test]
    fn test_slope_normal_survives_compression() {
        let n = Vec3::new(-0.2, 0.95, 0.24).normalized();
        assert_close(decompress_normal(compress_normal(n)), n);
    }
}
