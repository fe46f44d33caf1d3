//! `tierlog [OPTIONS] <LEVEL> <NAME> [MESSAGE]...`
//!
//! Emits one message through the same threshold, category and override rules the
//! library applies, configured from `tierlog.toml` plus flags.

use clap::Parser;
use std::process::ExitCode;
use tierlog::cli::{Cli, run};
use tierlog::internal;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            ExitCode::FAILURE
        }
    }
}
