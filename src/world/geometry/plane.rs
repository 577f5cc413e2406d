// ============================================
// Plane / AABB - Плоскость и ограничивающий бокс
// ============================================

use ultraviolet::Vec3;

/// Плоскость dot(p, norm) = d; норма единичная и смотрит "внутрь"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub d: f32,
    pub norm: Vec3,
}

impl Plane {
    pub fn new(dist: f32, normal: Vec3) -> Self {
        Self { d: dist, norm: normal.normalized() }
    }

    /// Плоскость через точку с заданной нормалью
    pub fn from_point(pos: Vec3, normal: Vec3) -> Self {
        let norm = normal.normalized();
        Self { d: pos.dot(norm), norm }
    }

    #[inline]
    pub fn signed_distance(&self, pos: Vec3) -> f32 {
        pos.dot(self.norm) - self.d
    }

    #[inline]
    pub fn in_front(&self, pos: Vec3) -> bool {
        self.signed_distance(pos) >= 0.0
    }

    /// Хотя бы часть бокса перед плоскостью
    #[inline]
    pub fn aabb_in_front(&self, aabb: &Aabb) -> bool {
        let extent = aabb.dimensions * 0.5;
        let abs_norm = Vec3::new(self.norm.x.abs(), self.norm.y.abs(), self.norm.z.abs());
        let r = abs_norm.dot(extent);
        self.signed_distance(aabb.pos) >= -r
    }
}

/// Бокс, заданный центром и полными размерами
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec3,
    pub dimensions: Vec3,
}

impl Aabb {
    pub fn new(pos: Vec3, dimensions: Vec3) -> Self {
        Self { pos, dimensions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_distance() {
        let p = Plane::from_point(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 5.0, 0.0));
        assert!((p.signed_distance(Vec3::new(3.0, 5.0, -1.0)) - 3.0).abs() < 1e-6);
        assert!(!p.in_front(Vec3::zero()));
    }

    #[test]
    fn test_aabb_straddling_plane() {
        let p = Plane::new(0.0, Vec3::unit_x());
        let straddle = Aabb::new(Vec3::new(-0.5, 0.0, 0.0), Vec3::new(2.0, 2.0, 2.0));
        let behind = Aabb::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 2.0));
        assert!(p.aabb_in_front(&straddle));
        assert!(!p.aabb_in_front(&behind));
    }
}
