//! Device output through rodio
//!
//! Cues are rendered once into a cache and queued on a dedicated sink per
//! play, so a stopped cue cannot cut off another one.

use super::{AudioOutput, Cue, CueCache, Playback};
use crate::error::{Result, UfoError};
use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};

/// The default audio device
pub struct DeviceOutput {
    // Dropping the stream closes the device
    _stream: OutputStream,
    handle: OutputStreamHandle,
    cache: CueCache,
}

impl DeviceOutput {
    /// Open the system's default output device
    pub fn try_default(sample_rate: u32, volume: f32) -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| UfoError::audio(format!("Failed to open output device: {}", e)))?;
        Ok(Self {
            _stream: stream,
            handle,
            cache: CueCache::new(sample_rate, volume),
        })
    }
}

struct SinkPlayback {
    sink: Sink,
}

impl Playback for SinkPlayback {
    fn stop(&mut self) {
        self.sink.stop();
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}

impl AudioOutput for DeviceOutput {
    fn prepare(&mut self, cue: &'static Cue) {
        if self.cache.contains(cue) {
            return;
        }
        let samples = self.cache.samples(cue).len();
        tracing::debug!("Prepared cue {} ({} samples)", cue.name, samples);
    }

    fn play(&mut self, cue: &'static Cue) -> Result<Box<dyn Playback>> {
        let sample_rate = self.cache.sample_rate();
        let samples = self.cache.samples(cue).to_vec();
        let sink = Sink::try_new(&self.handle)
            .map_err(|e| UfoError::audio(format!("Failed to create sink: {}", e)))?;
        sink.append(SamplesBuffer::new(1, sample_rate, samples));
        tracing::info!("Playing cue {} ({:.1}s)", cue.name, cue.duration);
        Ok(Box::new(SinkPlayback { sink }))
    }
}
