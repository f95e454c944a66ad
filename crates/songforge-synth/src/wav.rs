//! WAV encoding and decoding.
//!
//! The writer is hand-rolled so the output bytes are fully deterministic:
//! a standard mono 16-bit PCM RIFF header followed by samples quantized
//! with `round(sample × 32767)`. Reading (for externally supplied vocal
//! takes) goes through `hound`, which copes with the header variants found
//! in the wild.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::SynthResult;

/// Converts f32 samples to 16-bit PCM bytes.
///
/// Samples are clipped to [-1, 1] and quantized with
/// `round(sample × 32767)`, little-endian.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }

    pcm
}

/// Writes a complete mono 16-bit PCM WAV stream.
pub fn write_wav<W: Write>(writer: &mut W, samples: &[f32], sample_rate: u32) -> io::Result<()> {
    let pcm = samples_to_pcm16(samples);
    let data_size = pcm.len() as u32;
    let file_size = 36 + data_size; // total size minus the 8-byte RIFF preamble

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // audio format (1 = PCM)
    writer.write_all(&1u16.to_le_bytes())?; // channels (mono)
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&(sample_rate * 2).to_le_bytes())?; // byte rate
    writer.write_all(&2u16.to_le_bytes())?; // block align
    writer.write_all(&16u16.to_le_bytes())?; // bits per sample

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(&pcm)?;

    Ok(())
}

/// Writes a mono WAV file at `path`.
pub fn write_wav_file(path: impl AsRef<Path>, samples: &[f32], sample_rate: u32) -> SynthResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_wav(&mut writer, samples, sample_rate)?;
    writer.flush()?;
    Ok(())
}

/// Reads a WAV file as a mono f32 buffer.
///
/// Integer PCM is scaled by 1/32767; multi-channel files keep the first
/// channel only.
pub fn read_wav_mono(path: impl AsRef<Path>) -> SynthResult<Vec<f32>> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let mut samples = Vec::new();
    match spec.sample_format {
        hound::SampleFormat::Int => {
            for (i, sample) in reader.samples::<i16>().enumerate() {
                if i % channels == 0 {
                    samples.push(sample? as f32 / 32767.0);
                }
            }
        }
        hound::SampleFormat::Float => {
            for (i, sample) in reader.samples::<f32>().enumerate() {
                if i % channels == 0 {
                    samples.push(sample?);
                }
            }
        }
    }

    Ok(samples)
}
