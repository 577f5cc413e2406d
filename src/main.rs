use std::process::ExitCode;

fn main() -> ExitCode {
    match infworld::world::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("infworld: {}", e);
            ExitCode::FAILURE
        }
    }
}
