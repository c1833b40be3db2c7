//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mixprobe")]
#[command(about = "Analyze audio content and detect frequency clashes between two tracks")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the content of one or more audio files
    Analyze(AnalyzeArgs),
    /// Compare two tracks for frequency-band interference
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input files or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output with per-segment details
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate spectrogram images
    #[arg(short, long)]
    pub spectrogram: bool,

    /// Output directory for spectrograms
    #[arg(short, long, default_value = "spectrograms")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First track
    pub track1: PathBuf,

    /// Second track
    pub track2: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output with per-band magnitudes
    #[arg(short, long)]
    pub verbose: bool,
}
