// ============================================
// Geometry - Плоскости, боксы, frustum culling
// ============================================

pub mod plane;
pub mod frustum;

pub use plane::{Aabb, Plane};
pub use frustum::{intersects_frustum, Frustum};
