// src/core/decoder.rs
//
// Audio file decoding via Symphonia: any supported container and codec to
// channel-separated f32 samples.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer as RawSampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::core::buffer::SampleBuffer;
use crate::error::{AnalysisError, Result};

/// Decoded audio plus the codec it came from
#[derive(Debug, Clone)]
pub struct DecodedTrack {
    pub buffer: SampleBuffer,
    pub codec_name: String,
}

fn decode_error(path: &Path, reason: impl Into<String>) -> AnalysisError {
    AnalysisError::Decode {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Decode an audio file to channel-separated samples normalized to
/// [-1.0, 1.0].
pub fn decode_file(path: &Path) -> Result<DecodedTrack> {
    let file = File::open(path).map_err(|e| decode_error(path, e.to_string()))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(ext.to_str().unwrap_or(""));
    }

    let meta_opts = MetadataOptions::default();
    let fmt_opts = FormatOptions::default();

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|e| decode_error(path, format!("unrecognized format: {}", e)))?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| decode_error(path, "no supported audio track"))?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| decode_error(path, "file does not specify a sample rate"))?;

    let channel_count = track.codec_params.channels.map(|c| c.count()).unwrap_or(2);
    if channel_count == 0 {
        return Err(decode_error(path, "file reports zero audio channels"));
    }

    let codec_name = format!("{:?}", track.codec_params.codec);

    let dec_opts = DecoderOptions::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &dec_opts)
        .map_err(|e| decode_error(path, format!("unsupported codec: {}", e)))?;

    let mut interleaved: Vec<f32> = Vec::new();
    let mut sample_buf: Option<RawSampleBuffer<f32>> = None;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(symphonia::core::errors::Error::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(decode_error(path, e.to_string())),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            // Isolated corrupt packets are skipped, not fatal
            Err(symphonia::core::errors::Error::DecodeError(_)) => continue,
            Err(e) => return Err(decode_error(path, e.to_string())),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            let duration = decoded.capacity() as u64;
            sample_buf = Some(RawSampleBuffer::new(duration, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            interleaved.extend_from_slice(buf.samples());
        }
    }

    if interleaved.is_empty() {
        return Err(decode_error(path, "no audio samples decoded"));
    }

    let channels = deinterleave(&interleaved, channel_count);
    log::debug!(
        "decoded {}: {} ({} Hz, {} channels, {} samples per channel)",
        path.display(),
        codec_name,
        sample_rate,
        channel_count,
        channels[0].len()
    );

    Ok(DecodedTrack {
        buffer: SampleBuffer::new(channels, sample_rate),
        codec_name,
    })
}

/// Split interleaved samples into per-channel vectors
fn deinterleave(samples: &[f32], channel_count: usize) -> Vec<Vec<f32>> {
    let frames = samples.len() / channel_count;
    let mut channels = vec![Vec::with_capacity(frames); channel_count];
    for (i, &sample) in samples.iter().enumerate() {
        channels[i % channel_count].push(sample);
    }
    channels
}
