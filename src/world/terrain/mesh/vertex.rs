// ============================================
// Chunk Vertex - Структура вершины чанка
// ============================================
// X/Z не хранятся: шейдер восстанавливает их из индекса вершины
// и матрицы transform. Остаются высота и сжатая нормаль.

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Default)]
pub struct ChunkVertex {
    /// Высота, нормализованная на maxheight
    pub height: f32,
    /// (азимут, возвышение)
    pub normal: [f32; 2],
}

impl ChunkVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ChunkVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<f32>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }

    pub fn new(height: f32, normal: [f32; 2]) -> Self {
        Self { height, normal }
    }
}
