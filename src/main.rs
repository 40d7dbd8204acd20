use std::process::ExitCode;

fn main() -> ExitCode {
    match triangle_sweep::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
