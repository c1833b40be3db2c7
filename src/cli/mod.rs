// src/cli/mod.rs
//
// Command-line interface: argument definitions, subcommand drivers, and
// report printing.

mod args;
mod output;

pub use args::{AnalyzeArgs, Cli, Command, CompareArgs};

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use colorful::Colorful;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::AnalysisParams;
use crate::core::analysis::{analyze_interference, suggest_eq, SpectralAnalyzer, TrackSpectrum};
use crate::core::decoder::decode_file;
use crate::core::engine::{analyze_track_full, TrackAnalysis};
use crate::core::visualization::{render_spectrogram, SpectrogramConfig};
use crate::core::CancelToken;

const AUDIO_EXTENSIONS: [&str; 6] = ["flac", "wav", "mp3", "ogg", "m4a", "aac"];

/// One analyzed file, ready for printing
pub struct FileReport {
    pub path: PathBuf,
    pub sample_rate: u32,
    pub channels: usize,
    pub duration_secs: f64,
    pub codec_name: String,
    pub track: TrackAnalysis,
}

/// Run the `analyze` subcommand over every resolved input file.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let files = collect_audio_files(&args.inputs);
    ensure!(!files.is_empty(), "no audio files found in the given inputs");

    if args.spectrogram {
        std::fs::create_dir_all(&args.output).with_context(|| {
            format!("Failed to create output directory: {}", args.output.display())
        })?;
    }

    if !args.json {
        println!("Found {} audio file(s)\n", files.len());
    }

    let params = AnalysisParams::default();
    let cancel = CancelToken::new();

    // Analyze in parallel, print serially afterwards to keep output readable
    let results: Vec<(PathBuf, Result<FileReport>)> = if files.len() > 1 {
        files
            .par_iter()
            .progress_count(files.len() as u64)
            .map(|path| (path.clone(), analyze_file(path, &params, &cancel)))
            .collect()
    } else {
        files
            .iter()
            .map(|path| (path.clone(), analyze_file(path, &params, &cancel)))
            .collect()
    };

    let mut failures = 0usize;
    for (path, result) in &results {
        match result {
            Ok(report) => {
                if args.json {
                    println!("{}", output::json_report(report)?);
                } else {
                    output::print_report(report, args.verbose);
                }
                if args.spectrogram {
                    save_spectrogram(report, &args.output)?;
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {:#}", "error".red(), path.display(), e);
            }
        }
    }

    ensure!(
        failures == 0,
        "{} of {} file(s) failed to analyze",
        failures,
        results.len()
    );
    Ok(())
}

/// Run the `compare` subcommand: spectral analysis of both tracks, then
/// interference and EQ suggestions.
pub fn run_compare(args: &CompareArgs) -> Result<()> {
    let params = AnalysisParams::default();
    let cancel = CancelToken::new();

    let (left, right) = rayon::join(
        || prepare_spectrum(&args.track1, &params, &cancel),
        || prepare_spectrum(&args.track2, &params, &cancel),
    );
    let spectrum1 = left?;
    let spectrum2 = right?;

    let overlaps = analyze_interference(&spectrum1, &spectrum2)?;
    let suggestions = suggest_eq(&overlaps);

    if args.json {
        println!(
            "{}",
            output::json_compare(&args.track1, &args.track2, &overlaps, &suggestions)?
        );
    } else {
        output::print_compare(
            &args.track1,
            &args.track2,
            &overlaps,
            &suggestions,
            args.verbose,
        );
    }
    Ok(())
}

fn analyze_file(path: &Path, params: &AnalysisParams, cancel: &CancelToken) -> Result<FileReport> {
    let decoded = decode_file(path)?;
    let track = analyze_track_full(&decoded.buffer, params, cancel)?;

    Ok(FileReport {
        path: path.to_path_buf(),
        sample_rate: decoded.buffer.sample_rate,
        channels: decoded.buffer.channel_count(),
        duration_secs: decoded.buffer.duration_secs(),
        codec_name: decoded.codec_name,
        track,
    })
}

fn prepare_spectrum(
    path: &Path,
    params: &AnalysisParams,
    cancel: &CancelToken,
) -> Result<TrackSpectrum> {
    let decoded = decode_file(path)?;
    let mut analyzer = SpectralAnalyzer::new(params, decoded.buffer.sample_rate);
    let spectral = analyzer.analyze(decoded.buffer.primary(), cancel)?;
    Ok(TrackSpectrum::from_frames(
        &spectral.frames,
        decoded.buffer.sample_rate,
    ))
}

fn save_spectrogram(report: &FileReport, output_dir: &Path) -> Result<()> {
    let stem = report
        .path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("track");
    let output_path = output_dir.join(format!("{}.png", stem));

    render_spectrogram(
        &report.track.spectral.frames,
        &SpectrogramConfig::default(),
        &output_path,
    )
    .with_context(|| format!("Failed to render spectrogram for {}", report.path.display()))?;

    println!("  Spectrogram saved to: {}", output_path.display());
    Ok(())
}

/// Expand files and directories into the list of audio files to analyze
fn collect_audio_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_file() {
            if has_audio_extension(input) {
                files.push(input.clone());
            }
        } else if input.is_dir() {
            for entry in WalkDir::new(input)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.is_file() && has_audio_extension(path) {
                    files.push(path.to_path_buf());
                }
            }
        } else {
            log::warn!("input does not exist: {}", input.display());
        }
    }

    files
}

fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
