// src/main.rs
use anyhow::Result;
use clap::Parser;

use mixprobe::cli::{self, Cli, Command};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => cli::run_analyze(&args),
        Command::Compare(args) => cli::run_compare(&args),
    }
}
