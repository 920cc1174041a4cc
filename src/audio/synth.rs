//! Procedural synthesis
//!
//! A [`Cue`] is plain data: a duration and a handful of voices, each a
//! source shaped by a gain envelope. Rendering turns it into mono samples
//! with fundsp.

use fundsp::prelude32 as dsp;
use std::collections::HashMap;

/// Piecewise-linear gain envelope over `(seconds, value)` breakpoints.
///
/// Before the first breakpoint the first value holds; after the last one the
/// last value holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    points: &'static [(f32, f32)],
}

impl Envelope {
    pub const fn new(points: &'static [(f32, f32)]) -> Self {
        Self { points }
    }

    /// Envelope value at `t` seconds
    pub fn value_at(&self, t: f32) -> f32 {
        let Some(&(first_t, first_v)) = self.points.first() else {
            return 0.0;
        };
        if t <= first_t {
            return first_v;
        }
        for pair in self.points.windows(2) {
            let (ta, va) = pair[0];
            let (tb, vb) = pair[1];
            if t <= tb {
                let span = tb - ta;
                if span <= 0.0 {
                    return vb;
                }
                return dsp::lerp(va, vb, (t - ta) / span);
            }
        }
        self.points.last().map_or(0.0, |&(_, v)| v)
    }

    /// Time of the last breakpoint
    pub fn end(&self) -> f32 {
        self.points.last().map_or(0.0, |&(t, _)| t)
    }
}

/// Exponential sweep from `from` to `to` over `seconds`, then holding `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub from: f32,
    pub to: f32,
    pub seconds: f32,
}

impl Sweep {
    pub const fn new(from: f32, to: f32, seconds: f32) -> Self {
        Self { from, to, seconds }
    }

    pub fn value_at(&self, t: f32) -> f32 {
        if self.seconds <= 0.0 {
            return self.to;
        }
        dsp::xerp(self.from, self.to, (t / self.seconds).clamp(0.0, 1.0))
    }
}

/// Sound source of a voice
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source {
    /// Sine oscillator with a swept frequency in Hz
    Tone { frequency: Sweep },
    /// White noise through a resonant lowpass with a swept cutoff.
    /// The noise itself only lasts `burst` seconds.
    FilteredNoise { cutoff: Sweep, q: f32, burst: f32 },
}

/// One source and its gain envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voice {
    pub label: &'static str,
    pub source: Source,
    pub gain: Envelope,
}

/// A complete sound: voices start together and are cut at `duration`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub name: &'static str,
    pub duration: f32,
    pub voices: &'static [Voice],
}

/// The UFO fly-in sound: a rising drone, a falling high tone and a
/// darkening noise whoosh.
pub const WHOOSH: Cue = Cue {
    name: "ufo-whoosh",
    duration: 6.0,
    voices: &[
        Voice {
            label: "drone",
            source: Source::Tone {
                frequency: Sweep::new(60.0, 120.0, 4.0),
            },
            gain: Envelope::new(&[(0.0, 0.0), (1.0, 0.12), (5.0, 0.06), (6.0, 0.0)]),
        },
        Voice {
            label: "high",
            source: Source::Tone {
                frequency: Sweep::new(800.0, 200.0, 5.0),
            },
            gain: Envelope::new(&[(0.0, 0.0), (0.5, 0.04), (4.0, 0.015), (6.0, 0.0)]),
        },
        Voice {
            label: "whoosh",
            source: Source::FilteredNoise {
                cutoff: Sweep::new(2000.0, 200.0, 5.0),
                q: 1.0,
                burst: 2.0,
            },
            gain: Envelope::new(&[(0.0, 0.0), (0.3, 0.06), (4.0, 0.015), (6.0, 0.0)]),
        },
    ],
};

impl Cue {
    /// Number of samples at `sample_rate`
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (sample_rate as f32 * self.duration) as usize
    }

    /// Render all voices, mixed and scaled by `volume`
    pub fn render(&self, sample_rate: u32, volume: f32) -> Vec<f32> {
        let total = self.sample_count(sample_rate);
        let mut mix = vec![0.0f32; total];
        for voice in self.voices {
            for (slot, s) in mix.iter_mut().zip(render_voice(voice, sample_rate, self.duration)) {
                *slot += s;
            }
        }
        if volume != 1.0 {
            mix.iter_mut().for_each(|s| *s *= volume);
        }
        mix
    }
}

/// Render a single voice for `duration` seconds
pub fn render_voice(voice: &Voice, sample_rate: u32, duration: f32) -> Vec<f32> {
    let gain = voice.gain;
    match voice.source {
        Source::Tone { frequency } => {
            let mut node = (dsp::lfo(move |t: f32| frequency.value_at(t)) >> dsp::sine())
                * dsp::lfo(move |t: f32| gain.value_at(t));
            render_mono(&mut node, sample_rate, duration)
        }
        Source::FilteredNoise { cutoff, q, burst } => {
            let mut node = ((dsp::noise()
                | dsp::lfo(move |t: f32| cutoff.value_at(t))
                | dsp::dc(q))
                >> dsp::lowpass())
                * dsp::lfo(move |t: f32| if t < burst { gain.value_at(t) } else { 0.0 });
            render_mono(&mut node, sample_rate, duration)
        }
    }
}

/// Rendered cues, keyed by name, for one sample rate and volume.
///
/// Synthesis is slow enough to drop frames, so outputs render each cue once
/// and replay the buffer.
#[derive(Debug, Clone)]
pub struct CueCache {
    sample_rate: u32,
    volume: f32,
    rendered: HashMap<&'static str, Vec<f32>>,
}

impl CueCache {
    pub fn new(sample_rate: u32, volume: f32) -> Self {
        Self {
            sample_rate,
            volume,
            rendered: HashMap::new(),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Samples for `cue`, rendering them on first use
    pub fn samples(&mut self, cue: &'static Cue) -> &[f32] {
        let (sample_rate, volume) = (self.sample_rate, self.volume);
        self.rendered.entry(cue.name).or_insert_with(|| {
            tracing::debug!("Rendering cue {} at {} Hz", cue.name, sample_rate);
            cue.render(sample_rate, volume)
        })
    }

    /// Whether `cue` has already been rendered
    pub fn contains(&self, cue: &Cue) -> bool {
        self.rendered.contains_key(cue.name)
    }
}

fn render_mono(node: &mut dyn dsp::AudioUnit, sample_rate: u32, duration: f32) -> Vec<f32> {
    node.set_sample_rate(sample_rate as f64);
    node.reset();

    let sample_count = (sample_rate as f32 * duration) as usize;
    let mut samples = Vec::with_capacity(sample_count);
    for _ in 0..sample_count {
        samples.push(node.get_mono());
    }
    samples
}
