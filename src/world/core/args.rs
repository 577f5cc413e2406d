// ============================================
// Args - Разбор аргументов командной строки
// ============================================

use std::path::PathBuf;

use super::config::{DEFAULT_RANGE, MAX_RANGE, MIN_RANGE};
use super::error::WorldError;

/// Кадров в headless облёте по умолчанию
pub const DEFAULT_FRAMES: u32 = 600;
/// Скорость наблюдателя (мировых единиц за кадр)
pub const DEFAULT_SPEED: f32 = 12.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub seed: i32,
    /// Ещё не ограничен; ограничение по конфигурации в app
    pub range: u32,
    pub config: Option<PathBuf>,
    pub frames: u32,
    pub speed: f32,
    pub gpu: bool,
}

impl Args {
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            range: DEFAULT_RANGE,
            config: None,
            frames: DEFAULT_FRAMES,
            speed: DEFAULT_SPEED,
            gpu: false,
        }
    }
}

/// Что просили сделать
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Args),
    Help,
    License,
}

fn value<T: std::str::FromStr>(flag: &str, raw: Option<String>) -> Result<T, WorldError> {
    let raw = raw.ok_or_else(|| WorldError::Args(format!("missing value for {}", flag)))?;
    raw.parse()
        .map_err(|_| WorldError::Args(format!("invalid value for {}: {}", flag, raw)))
}

/// Аргументы без имени программы; seed используется, если не задан -s
pub fn parse_args<I>(args: I, random_seed: i32) -> Result<Command, WorldError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::with_seed(random_seed);
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-s" | "--seed" => parsed.seed = value(&arg, args.next())?,
            "-r" | "--range" => parsed.range = value(&arg, args.next())?,
            "-c" | "--config" => parsed.config = Some(value(&arg, args.next())?),
            "-f" | "--frames" => parsed.frames = value(&arg, args.next())?,
            "--speed" => parsed.speed = value(&arg, args.next())?,
            "--gpu" => parsed.gpu = true,
            "-h" | "--help" => return Ok(Command::Help),
            "--license" => return Ok(Command::License),
            other => return Err(WorldError::Args(format!("unknown argument: {}", other))),
        }
    }

    Ok(Command::Run(parsed))
}

pub fn usage(program: &str) -> String {
    format!(
        "usage: {program} [-s|--seed N] [-r|--range N] [-c|--config PATH] [-f|--frames N] [--speed F] [--gpu]\n\
         -s|--seed [number]\n\
         \tset a seed for the world, default: random\n\
         -r|--range [number]\n\
         \tset a viewing range, default: {DEFAULT_RANGE} chunks\n\
         \tvalue should be between {MIN_RANGE} and {MAX_RANGE}\n\
         \tNOTE: setting range to a high value will result in lower performance\n\
         -c|--config [path]\n\
         \tJSON file overriding terrain constants\n\
         -f|--frames [number]\n\
         \tframes to simulate, default: {DEFAULT_FRAMES}\n\
         --speed [number]\n\
         \tobserver speed per frame, default: {DEFAULT_SPEED}\n\
         --gpu\n\
         \tupload chunks to a headless GPU device\n\
         -h|--help\n\
         \tshow this screen\n\
         --license\n\
         \tshow copyright info\n"
    )
}

pub const LICENSE: &str = "\
Permission is hereby granted, free of charge, to any person obtaining a copy of
this software and associated documentation files (the \"Software\"), to deal in the
Software without restriction, including without limitation the rights to use,
copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the
Software, and to permit persons to whom the Software is furnished to do so,
subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY,
WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR
IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
";
