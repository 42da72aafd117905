//! timewords - parse compact durations and describe time in Russian.
//!
//! This binary wraps the library's converters and humanizers in a small CLI.

use std::process;
use timewords::cli::{self, Args};

fn main() {
    let args = Args::parse_args();

    // Initialize logging; RUST_LOG overrides the -q/-v default
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    // Run CLI and get exit code
    let exit_code = match cli::run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
