// src/testgen/mod.rs
//
// Deterministic test signal synthesis for mixprobe.
// Generates known-content signals (silence, tones, noise, click tracks) in
// memory and writes WAV fixtures for decoder round-trip tests. Everything
// here is seeded or closed-form so test expectations stay exact.

use std::f32::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};

/// All-zero samples for the given duration
pub fn silence(duration_secs: f64, sample_rate: u32) -> Vec<f32> {
    vec![0.0; sample_count(duration_secs, sample_rate)]
}

/// A constant-frequency sine tone
pub fn sine(freq_hz: f32, amplitude: f32, duration_secs: f64, sample_rate: u32) -> Vec<f32> {
    let n = sample_count(duration_secs, sample_rate);
    (0..n)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            amplitude * (2.0 * PI * freq_hz * t).sin()
        })
        .collect()
}

/// Seeded pseudo-random noise, uniform in [-amplitude, amplitude].
/// The generator is a plain LCG so sequences are identical on every
/// platform and every run.
pub fn white_noise(seed: u64, amplitude: f32, duration_secs: f64, sample_rate: u32) -> Vec<f32> {
    let n = sample_count(duration_secs, sample_rate);
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 33) as f32 / (1u64 << 31) as f32;
            amplitude * (unit * 2.0 - 1.0)
        })
        .collect()
}

/// A train of short decaying bursts on a fixed grid: `count` clicks starting
/// at `offset_secs`, spaced `interval_secs` apart, inside `duration_secs` of
/// silence. Each click is a 5 ms linear-decay burst.
pub fn click_track(
    count: usize,
    interval_secs: f64,
    offset_secs: f64,
    duration_secs: f64,
    sample_rate: u32,
) -> Vec<f32> {
    let mut samples = silence(duration_secs, sample_rate);
    let click_len = sample_count(0.005, sample_rate).max(1);

    for k in 0..count {
        let start_secs = offset_secs + k as f64 * interval_secs;
        let start = (start_secs * sample_rate as f64).round() as usize;
        for j in 0..click_len {
            let idx = start + j;
            if idx >= samples.len() {
                break;
            }
            let decay = 1.0 - j as f32 / click_len as f32;
            samples[idx] = 0.9 * decay;
        }
    }

    samples
}

/// Sample-wise sum of two signals, truncated to the shorter one
pub fn mix(a: &[f32], b: &[f32]) -> Vec<f32> {
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

/// Write samples as a mono 16-bit PCM WAV file
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file: {}", path.display()))?;
    for &sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * 32767.0) as i16;
        writer
            .write_sample(value)
            .context("Failed to write WAV sample")?;
    }
    writer
        .finalize()
        .with_context(|| format!("Failed to finalize WAV file: {}", path.display()))?;

    Ok(())
}

fn sample_count(duration_secs: f64, sample_rate: u32) -> usize {
    (duration_secs * sample_rate as f64).round() as usize
}
