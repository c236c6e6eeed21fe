//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use ondas_synth::Signal;
use std::path::Path;

/// Output bit depth for WAV encoding.
///
/// 8/16/24 bits write integer PCM; 32 bits writes IEEE float. Samples are
/// expected in `[-1, 1]`; the engine peak-normalizes before export
/// precisely so fixed-depth encoding cannot clip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BitDepth {
    /// 8-bit integer PCM.
    Eight,
    /// 16-bit integer PCM.
    #[default]
    Sixteen,
    /// 24-bit integer PCM.
    TwentyFour,
    /// 32-bit IEEE float.
    ThirtyTwo,
}

impl BitDepth {
    /// Bits per sample.
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::TwentyFour => 24,
            BitDepth::ThirtyTwo => 32,
        }
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = Error;

    fn try_from(bits: u16) -> Result<Self> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            24 => Ok(BitDepth::TwentyFour),
            32 => Ok(BitDepth::ThirtyTwo),
            other => Err(Error::UnsupportedBitDepth(other)),
        }
    }
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Sample frames per channel.
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = u64::from(reader.len()); // total across all channels
    let num_frames = total_samples / u64::from(spec.channels);

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs: num_frames as f64 / f64::from(spec.sample_rate),
    })
}

/// Read a WAV file as f64 samples plus its metadata.
///
/// Multi-channel files are mixed down to mono by averaging channels.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f64>, WavInfo)> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels);
    let total_samples = u64::from(reader.len());
    let num_frames = total_samples / u64::from(spec.channels);
    let info = WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs: num_frames as f64 / f64::from(spec.sample_rate),
    };

    let samples: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            // i64 to avoid overflow at 32-bit int PCM
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f64>() / channels as f64)
            .collect()
    } else {
        samples
    };

    Ok((mono, info))
}

/// Write mono samples to a WAV file at the given bit depth.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    samples: &[f64],
    sample_rate: u32,
    bit_depth: BitDepth,
) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: bit_depth.bits(),
        sample_format: match bit_depth {
            BitDepth::ThirtyTwo => SampleFormat::Float,
            _ => SampleFormat::Int,
        },
    };
    let mut writer = WavWriter::create(path, spec)?;

    match bit_depth {
        BitDepth::ThirtyTwo => {
            for &sample in samples {
                writer.write_sample(sample as f32)?;
            }
        }
        _ => {
            let max_val = f64::from(1i32 << (bit_depth.bits() - 1));
            for &sample in samples {
                let quantized = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
                writer.write_sample(quantized)?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}

/// Encode a rendered [`Signal`] at its own sample rate.
pub fn write_signal<P: AsRef<Path>>(path: P, signal: &Signal, bit_depth: BitDepth) -> Result<()> {
    write_wav(path, signal.samples(), signal.sample_rate(), bit_depth)
}
