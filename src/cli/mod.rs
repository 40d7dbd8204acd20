mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::PatternError;

pub fn run() -> Result<(), PatternError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        Some(parse::Command::Print(a)) => handlers::print(&a),
        Some(parse::Command::Demo(a)) => handlers::demo(&a),
        Some(parse::Command::Colors) => {
            handlers::colors();
            Ok(())
        }
        Some(parse::Command::Examples) => {
            handlers::examples();
            Ok(())
        }
        // no arguments consumed: the compiled-in default pattern
        None => handlers::print(&parse::PrintArgs::default()),
    }
}
