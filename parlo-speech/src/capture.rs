//! Microphone capture with cpal
//!
//! Single-shot, blocking capture: open the input device, record for a fixed
//! window, and return the audio as an in-memory WAV. There is no cancellation
//! and no silence detection; the window simply runs to its end, which matches
//! the one-question-one-answer flow of the practice session.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, SampleFormat};
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::{Result, SpeechError};

/// Capture settings.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Input device index (None = default device).
    pub device_index: Option<usize>,
    /// Length of the recording window in seconds.
    pub seconds: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device_index: None,
            seconds: 5.0,
        }
    }
}

/// Record one window from the microphone and return it as WAV bytes.
///
/// Blocks the calling thread for the whole window; run it on a blocking
/// task from async code.
pub fn capture_wav(config: &CaptureConfig) -> Result<Vec<u8>> {
    let device = select_device(config.device_index)?;
    let device_name = device
        .name()
        .unwrap_or_else(|_| "Unknown Device".to_string());

    let stream_config = device
        .default_input_config()
        .map_err(|e| SpeechError::audio_capture(format!("No input config: {}", e)))?;

    let sample_rate = stream_config.sample_rate().0;
    let channels = stream_config.channels();
    let sample_format = stream_config.sample_format();

    info!(
        "Recording {}s from '{}' ({} Hz, {} ch)",
        config.seconds, device_name, sample_rate, channels
    );

    let samples: Arc<Mutex<Vec<f32>>> = Arc::new(Mutex::new(Vec::new()));
    let err_fn = |e| tracing::warn!("Input stream error: {}", e);

    let stream = {
        let samples = samples.clone();
        let stream_config = stream_config.into();
        match sample_format {
            SampleFormat::F32 => device.build_input_stream(
                &stream_config,
                move |data: &[f32], _: &_| {
                    samples.lock().extend_from_slice(data);
                },
                err_fn,
                None,
            ),
            SampleFormat::I16 => device.build_input_stream(
                &stream_config,
                move |data: &[i16], _: &_| {
                    let mut samples = samples.lock();
                    samples.extend(data.iter().map(|&s| s as f32 / i16::MAX as f32));
                },
                err_fn,
                None,
            ),
            SampleFormat::U16 => device.build_input_stream(
                &stream_config,
                move |data: &[u16], _: &_| {
                    let mut samples = samples.lock();
                    samples.extend(
                        data.iter()
                            .map(|&s| (s as f32 - 32768.0) / i16::MAX as f32),
                    );
                },
                err_fn,
                None,
            ),
            other => {
                return Err(SpeechError::audio_capture(format!(
                    "Unsupported sample format: {:?}",
                    other
                )))
            }
        }
        .map_err(|e| SpeechError::audio_capture(format!("Failed to open stream: {}", e)))?
    };

    stream
        .play()
        .map_err(|e| SpeechError::audio_capture(format!("Failed to start stream: {}", e)))?;

    std::thread::sleep(Duration::from_secs_f32(config.seconds));
    drop(stream);

    let samples = samples.lock();
    debug!("Captured {} samples", samples.len());

    encode_wav(&samples, sample_rate, channels)
}

/// Pick the configured input device, or the host default.
fn select_device(index: Option<usize>) -> Result<Device> {
    let host = cpal::default_host();

    match index {
        Some(index) => host
            .input_devices()
            .map_err(|e| SpeechError::audio_capture(format!("Failed to enumerate devices: {}", e)))?
            .nth(index)
            .ok_or_else(|| SpeechError::audio_capture(format!("No input device at index {}", index))),
        None => host
            .default_input_device()
            .ok_or_else(|| SpeechError::audio_capture("No default input device")),
    }
}

/// Encode f32 samples as 16-bit PCM WAV in memory.
pub fn encode_wav(samples: &[f32], sample_rate: u32, channels: u16) -> Result<Vec<u8>> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| SpeechError::audio_capture(format!("WAV encode error: {}", e)))?;
        for &sample in samples {
            let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(value)
                .map_err(|e| SpeechError::audio_capture(format!("WAV encode error: {}", e)))?;
        }
        writer
            .finalize()
            .map_err(|e| SpeechError::audio_capture(format!("WAV encode error: {}", e)))?;
    }

    Ok(cursor.into_inner())
}
