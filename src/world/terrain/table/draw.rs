// ============================================
// Chunk Table Draw - Отсечение и отрисовка слотов
// ============================================

use ultraviolet::{Mat4, Vec3};

use crate::world::geometry::{intersects_frustum, Aabb, Frustum};
use crate::world::render::ShaderProgram;
use crate::world::terrain::grid::{grid_to_world, ChunkPos};
use crate::world::terrain::storage::ChunkStorage;

use super::chunk_table::ChunkTable;

impl<S: ChunkStorage> ChunkTable<S> {
    /// Рисует все видимые слоты, возвращает число draw call-ов
    pub fn draw<P: ShaderProgram>(&self, shader: &mut P, frustum: &Frustum) -> u32 {
        self.draw_filtered(shader, frustum, |_| true)
    }

    /// То же, но пропускает внутреннее кольцо, уже покрытое более детальным LOD
    pub fn draw_outside<P: ShaderProgram>(&self, shader: &mut P, min_range: u32, frustum: &Frustum) -> u32 {
        let center = self.center();
        self.draw_filtered(shader, frustum, |pos| !pos.inside_ring(center, min_range))
    }

    /// Бокс чанка в мировых координатах и его transform
    pub fn chunk_bounds(&self, pos: ChunkPos) -> (Aabb, Mat4) {
        let config = self.config();
        let scale = config.scale;
        let (x, z) = grid_to_world(pos, self.scale(), config);

        let aabb = Aabb::new(
            Vec3::new(x, 0.0, z) * scale,
            Vec3::new(self.scale() * 2.0, config.height * 2.0, self.scale() * 2.0) * scale,
        );
        let transform = Mat4::from_scale(scale) * Mat4::from_translation(Vec3::new(x, 0.0, z));
        (aabb, transform)
    }

    fn draw_filtered<P, F>(&self, shader: &mut P, frustum: &Frustum, keep: F) -> u32
    where
        P: ShaderProgram,
        F: Fn(ChunkPos) -> bool,
    {
        let index_count = self.storage().index_count();
        let mut drawn = 0;

        for (index, slot) in self.slots().iter().enumerate() {
            if !keep(slot.pos) {
                continue;
            }

            let (aabb, transform) = self.chunk_bounds(slot.pos);
            if !intersects_frustum(frustum, &aabb) {
                continue;
            }

            shader.uniform_mat4("transform", transform);
            shader.draw_chunk(index, index_count);
            drawn += 1;
        }

        drawn
    }
}
