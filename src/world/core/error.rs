// ============================================
// Errors - Ошибки внешних поверхностей
// ============================================
// Генерация террейна ошибок не имеет; здесь только то, что приходит
// снаружи: файлы, аргументы, пул потоков, GPU.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Args(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to open GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}
