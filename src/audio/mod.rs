//! Audio cue playback
//!
//! The controller talks to an [`AudioOutput`] port. Starting a cue returns a
//! [`CueHandle`] guard: dropping it stops playback and releases whatever the
//! output acquired for it.
//!
//! # Module Structure
//! - `synth` - cue descriptions and procedural rendering
//! - `device` - rodio-backed output (feature `audio`)

pub mod synth;
#[cfg(feature = "audio")]
pub mod device;

pub use synth::{Cue, CueCache, Envelope, Source, Sweep, Voice, WHOOSH};

use crate::error::Result;

/// A cue that is playing (or has finished) on some output
pub trait Playback {
    /// Stop immediately and release the underlying resources
    fn stop(&mut self);

    /// True once every sample has been played or playback was stopped
    fn is_finished(&self) -> bool;
}

/// Somewhere cues can be played
pub trait AudioOutput {
    /// Do any expensive work for `cue` ahead of time
    fn prepare(&mut self, _cue: &'static Cue) {}

    /// Start playing `cue` from its beginning
    fn play(&mut self, cue: &'static Cue) -> Result<Box<dyn Playback>>;
}

/// Scoped ownership of a playing cue.
///
/// Release happens exactly once, either explicitly or on drop.
pub struct CueHandle {
    name: &'static str,
    playback: Option<Box<dyn Playback>>,
}

impl CueHandle {
    pub fn new(cue: &'static Cue, playback: Box<dyn Playback>) -> Self {
        Self {
            name: cue.name,
            playback: Some(playback),
        }
    }

    /// Name of the cue being played
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether playback has run to completion
    pub fn is_finished(&self) -> bool {
        self.playback.as_ref().is_none_or(|p| p.is_finished())
    }

    /// Stop playback now
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(mut playback) = self.playback.take() {
            playback.stop();
            tracing::debug!("Released audio cue {}", self.name);
        }
    }
}

impl Drop for CueHandle {
    fn drop(&mut self) {
        self.release_inner();
    }
}

impl std::fmt::Debug for CueHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CueHandle")
            .field("name", &self.name)
            .field("active", &self.playback.is_some())
            .finish()
    }
}

/// Output that plays nothing. Used when muted or when no device is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOutput;

struct NullPlayback;

impl Playback for NullPlayback {
    fn stop(&mut self) {}

    fn is_finished(&self) -> bool {
        true
    }
}

impl AudioOutput for NullOutput {
    fn play(&mut self, cue: &'static Cue) -> Result<Box<dyn Playback>> {
        tracing::debug!("Muted: skipping cue {}", cue.name);
        Ok(Box::new(NullPlayback))
    }
}

/// Open the best available output for the given settings.
///
/// Falls back to [`NullOutput`] when muted, when built without the `audio`
/// feature, or when the device cannot be opened.
pub fn open_output(mute: bool, sample_rate: u32, volume: f32) -> Box<dyn AudioOutput> {
    if mute {
        tracing::info!("Audio muted");
        return Box::new(NullOutput);
    }

    #[cfg(feature = "audio")]
    {
        match device::DeviceOutput::try_default(sample_rate, volume) {
            Ok(output) => {
                tracing::info!("Audio output opened at {} Hz", sample_rate);
                Box::new(output)
            }
            Err(e) => {
                tracing::warn!("Audio unavailable, continuing silently: {}", e);
                Box::new(NullOutput)
            }
        }
    }

    #[cfg(not(feature = "audio"))]
    {
        let _ = (sample_rate, volume);
        tracing::info!("Built without audio support");
        Box::new(NullOutput)
    }
}
