//! Output formatting for CLI results

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use colorful::Colorful;
use serde::Serialize;

use crate::core::analysis::{EqSuggestion, FrequencyOverlap, TimeSegment};
use crate::core::engine::AudioAnalysis;

use super::FileReport;

/// JSON envelope for one analyzed file. `generated_at` lives here, not in
/// the analysis record, so the record itself stays idempotent.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    file: String,
    generated_at: DateTime<Utc>,
    codec: &'a str,
    sample_rate: u32,
    channels: usize,
    duration_secs: f64,
    beat_count: usize,
    analysis: &'a AudioAnalysis,
}

/// JSON envelope for one track comparison
#[derive(Debug, Serialize)]
struct CompareReport<'a> {
    track1: String,
    track2: String,
    generated_at: DateTime<Utc>,
    overlaps: &'a [FrequencyOverlap],
    suggestions: &'a [EqSuggestion],
}

pub fn json_report(report: &FileReport) -> Result<String> {
    let envelope = JsonReport {
        file: report.path.display().to_string(),
        generated_at: Utc::now(),
        codec: &report.codec_name,
        sample_rate: report.sample_rate,
        channels: report.channels,
        duration_secs: report.duration_secs,
        beat_count: report.track.beats.len(),
        analysis: &report.track.analysis,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

pub fn json_compare(
    track1: &Path,
    track2: &Path,
    overlaps: &[FrequencyOverlap],
    suggestions: &[EqSuggestion],
) -> Result<String> {
    let envelope = CompareReport {
        track1: track1.display().to_string(),
        track2: track2.display().to_string(),
        generated_at: Utc::now(),
        overlaps,
        suggestions,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

pub fn print_report(report: &FileReport, verbose: bool) {
    println!("Analyzing: {}", report.path.display().to_string().cyan());
    println!("  Codec: {}", report.codec_name);
    println!("  Sample Rate: {} Hz", report.sample_rate);
    println!("  Channels: {}", report.channels);
    println!("  Duration: {:.2}s", report.duration_secs);

    let analysis = &report.track.analysis;
    println!("  Speech: {}", presence(analysis.has_speech));
    println!("  Music: {}", presence(analysis.has_music_elements));
    println!(
        "  Environmental: {}",
        presence(analysis.has_environmental_sounds)
    );
    println!("  Beats: {}", report.track.beats.len());
    if let Some(interval) = report.track.rhythm.mean_beat_interval {
        println!("  Mean Beat Interval: {:.3}s", interval);
    }
    println!("  Summary: {}", analysis.summary);

    if verbose {
        print_segments("Speech segments", &analysis.speech_segments);
        print_segments("Music segments", &analysis.music_segments);
        print_segments("Environmental segments", &analysis.environmental_segments);

        println!("\n  Band intensities:");
        for range in &analysis.dominant_ranges {
            let bar_len = (range.intensity * 20.0).round() as usize;
            println!(
                "    {:<10} {:>5.0}-{:>5.0} Hz  [{:<20}] {:.2}",
                range.band.name(),
                range.min_hz,
                range.max_hz,
                "#".repeat(bar_len),
                range.intensity
            );
        }
    }
    println!();
}

pub fn print_compare(
    track1: &Path,
    track2: &Path,
    overlaps: &[FrequencyOverlap],
    suggestions: &[EqSuggestion],
    verbose: bool,
) {
    println!(
        "Comparing: {} vs {}",
        track1.display().to_string().cyan(),
        track2.display().to_string().cyan()
    );

    println!("\n  Band overlaps:");
    for overlap in overlaps {
        let polarity = if overlap.is_constructive {
            "constructive".green().to_string()
        } else {
            "destructive".red().to_string()
        };
        let marker = if overlap.fallback { " (assumed)" } else { "" };
        println!(
            "    {:<10} {:>6.0} Hz  intensity {:.2}  {}{}",
            overlap.band.name(),
            overlap.frequency,
            overlap.overlap_intensity,
            polarity,
            marker
        );
        if verbose {
            println!(
                "      track 1: {:.1} dB, track 2: {:.1} dB",
                overlap.magnitude1, overlap.magnitude2
            );
        }
    }

    if suggestions.is_empty() {
        println!("\n  {}", "No EQ changes suggested".green());
    } else {
        println!("\n  EQ suggestions:");
        for (i, s) in suggestions.iter().enumerate() {
            println!(
                "    {}. Track {}: {:.1} dB in {} ({:.0}-{:.0} Hz), Q {:.1}",
                i + 1,
                s.track,
                s.gain_reduction_db,
                s.band.name(),
                s.min_hz,
                s.max_hz,
                s.q
            );
            if verbose {
                println!("       {}", s.reason.clone().yellow());
            }
        }
    }
    println!();
}

fn presence(flag: bool) -> String {
    if flag {
        "detected".green().to_string()
    } else {
        "not detected".to_string()
    }
}

fn print_segments(label: &str, segments: &[TimeSegment]) {
    if segments.is_empty() {
        return;
    }
    println!("\n  {}:", label);
    for seg in segments {
        println!(
            "    {:.2}s - {:.2}s (confidence {:.2})",
            seg.start, seg.end, seg.confidence
        );
    }
}
