//! WAV file I/O with one buffer per channel.

use std::path::Path;

use anyhow::Context;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

/// Decoded audio: one `Vec` per channel, all of equal length.
pub struct Audio {
    pub channels: Vec<Vec<f32>>,
    pub sample_rate: u32,
}

impl Audio {
    /// Number of sample frames.
    pub fn num_frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Largest absolute sample over all channels.
    pub fn peak(&self) -> f32 {
        self.channels
            .iter()
            .flatten()
            .fold(0.0f32, |peak, s| peak.max(s.abs()))
    }

    /// RMS over all channels.
    pub fn rms(&self) -> f32 {
        let count: usize = self.channels.iter().map(Vec::len).sum();
        if count == 0 {
            return 0.0;
        }
        let sum: f64 = self
            .channels
            .iter()
            .flatten()
            .map(|&s| f64::from(s) * f64::from(s))
            .sum();
        (sum / count as f64).sqrt() as f32
    }
}

/// Read a WAV file and split it into channels.
///
/// Integer samples are scaled to [-1.0, 1.0).
pub fn read_wav(path: &Path) -> anyhow::Result<Audio> {
    let reader =
        WavReader::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let spec = reader.spec();
    let num_channels = usize::from(spec.channels);
    if num_channels == 0 {
        anyhow::bail!("{} has no channels", path.display());
    }

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let frames = interleaved.len() / num_channels;
    let mut channels = vec![Vec::with_capacity(frames); num_channels];
    for frame in interleaved.chunks_exact(num_channels) {
        for (channel, &sample) in channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }

    Ok(Audio {
        channels,
        sample_rate: spec.sample_rate,
    })
}

/// Interleave `audio` and write it at the given bit depth.
///
/// 32-bit output is IEEE float, 16 and 24 are integer PCM.
pub fn write_wav(path: &Path, audio: &Audio, bits_per_sample: u16) -> anyhow::Result<()> {
    let spec = WavSpec {
        channels: u16::try_from(audio.channels.len())?,
        sample_rate: audio.sample_rate,
        bits_per_sample,
        sample_format: if bits_per_sample == 32 {
            SampleFormat::Float
        } else {
            SampleFormat::Int
        },
    };
    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let max_val = (1i64 << (bits_per_sample - 1)) as f32;
    for frame in 0..audio.num_frames() {
        for channel in &audio.channels {
            let sample = channel[frame];
            if bits_per_sample == 32 {
                writer.write_sample(sample)?;
            } else {
                writer.write_sample((sample * max_val).clamp(-max_val, max_val - 1.0) as i32)?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}
