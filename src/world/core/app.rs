// ============================================
// App - Headless облёт бесконечного мира
// ============================================

use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::world::player::FlyCamera;
use crate::world::render::RecordingShader;
use crate::world::terrain::builder::WorldBuilder;
use crate::world::terrain::mesh::chunk_indices;
use crate::world::terrain::storage::{ChunkStorage, GpuChunkStore, MeshStore};

use super::args::{parse_args, usage, Args, Command, LICENSE};
use super::config::TerrainConfig;
use super::error::WorldError;
use super::resources::WorldContext;

/// Кадров в "секунде" для периодической статистики
const FRAMES_PER_REPORT: u32 = 60;
/// Поворот наблюдателя за кадр (радианы)
const TURN_PER_FRAME: f32 = 0.002;

/// Устройство без поверхности: только для буферов чанков
async fn request_headless_device() -> Result<(wgpu::Device, wgpu::Queue), WorldError> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await?;
    info!("GPU adapter: {}", adapter.get_info().name);

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("Chunk Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
            trace: wgpu::Trace::Off,
        })
        .await?;

    Ok((device, queue))
}

/// Облёт: каждый кадр update + culling + отрисовка в записывающий шейдер
fn fly_over<S: ChunkStorage>(world: &mut WorldContext<S>, args: &Args) {
    let config = world.config;
    let mut camera = FlyCamera::new(16.0 / 9.0, world.lods.view_distance());
    camera.position.y = config.height * config.scale * 0.6;
    camera.rotate(0.0, -0.2);

    let mut shader = RecordingShader::new();
    let start = Instant::now();
    let mut rebuilt = 0;
    let mut recenters = 0;

    for frame in 1..=args.frames {
        camera.rotate(TURN_PER_FRAME, 0.0);
        camera.fly_level(args.speed);

        let stats = world.update(camera.position);
        rebuilt += stats.rebuilt;
        recenters += stats.recentered;

        shader.clear();
        let drawn = world.draw(&mut shader, &camera.view_frustum());

        if frame % FRAMES_PER_REPORT == 0 {
            info!(
                "frame {}: observer ({:.0}, {:.0}), {} chunks drawn, {} rebuilds pending, {} trees",
                frame,
                camera.position.x,
                camera.position.z,
                drawn,
                world.lods.pending(),
                world.decoration_instances()
            );
        }
    }

    let elapsed = start.elapsed().as_secs_f32();
    info!(
        "{} frames in {:.3}s ({:.1} fps): {} recenters, {} chunks rebuilt, {} draw calls",
        args.frames,
        elapsed,
        args.frames as f32 / elapsed.max(f32::EPSILON),
        recenters,
        rebuilt,
        shader.total_draws()
    );
}

fn load_config(args: &Args) -> Result<TerrainConfig, WorldError> {
    match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            TerrainConfig::load_from_file(path)
        }
        None => Ok(TerrainConfig::default()),
    }
}

/// Построить мир и пролететь над ним
pub fn simulate(args: &Args) -> Result<(), WorldError> {
    let config = load_config(args)?;
    let range = config.clamp_range(args.range);
    if range != args.range {
        info!("Range {} clamped to {}", args.range, range);
    }

    let builder = WorldBuilder::new()?;
    info!("Building world with {} threads, range {}", builder.threads(), range);

    if args.gpu {
        let (device, queue) = pollster::block_on(request_headless_device())?;
        let base = GpuChunkStore::new(Arc::new(device), Arc::new(queue), &config);
        let mut world = WorldContext::build(args.seed, range, &config, &builder, |_| base.sibling(&config));
        fly_over(&mut world, args);
    } else {
        let indices: Arc<[u32]> = chunk_indices(config.prec).into();
        let mut world = WorldContext::build(args.seed, range, &config, &builder, |_| {
            MeshStore::with_indices(indices.clone())
        });
        fly_over(&mut world, args);
    }

    Ok(())
}

/// Запуск приложения
pub fn run() -> Result<(), WorldError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let program = std::env::args().next().unwrap_or_else(|| "infworld".to_string());
    let command = match parse_args(std::env::args().skip(1), rand::random::<i32>()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error parsing arguments!");
            eprint!("{}", usage(&program));
            return Err(e);
        }
    };

    match command {
        Command::Help => eprint!("{}", usage(&program)),
        Command::License => eprintln!("{}", LICENSE),
        Command::Run(args) => simulate(&args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_simulate_small_world() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "prec": 2, "octaves": 2, "lod_count": 2, "decoration_range": 2, "min_range": 1 }}"#
        )
        .unwrap();

        let args = Args {
            range: 1,
            config: Some(file.path().to_path_buf()),
            frames: 30,
            speed: 50.0,
            ..Args::with_seed(7)
        };
        assert!(simulate(&args).is_ok());
    }

    #[test]
    fn test_simulate_bad_config() {
        let args = Args {
            config: Some("/nonexistent/infworld.json".into()),
            ..Args::with_seed(7)
        };
        assert!(matches!(simulate(&args), Err(WorldError::Io(_))));
    }
}
