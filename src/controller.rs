//! Page controller
//!
//! Owns every piece of interactive state on the landing screen and all of
//! its timing. Input events and clock ticks go in; a [`PageView`] snapshot
//! comes out for the renderer. Nothing here touches the terminal.
//!
//! # Lifecycle
//!
//! ```text
//! mount ─▶ enter ─▶ tick… (phases 1,2,3; cue on 1) ─▶ activate / select / keys ─▶ unmount
//! ```
//!
//! `unmount` (also run on drop) cancels pending intro transitions and
//! releases the audio cue. After it, every input is ignored.

use crate::audio::{AudioOutput, CueHandle, WHOOSH};
use crate::carousel::Carousel;
use crate::catalog::Burger;
use crate::intro::{IntroPhase, IntroSequencer};
use crate::layout::{Spacing, Viewport};
use crate::overlay::OverlayState;
use std::time::{Duration, Instant};

/// Keys the controller understands. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

/// Where the UFO is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UfoPose {
    Hidden,
    /// In flight, progress in `[0, 1]`
    FlyingIn { progress: f32 },
    Landed,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageView {
    pub splash_visible: bool,
    pub phase: IntroPhase,
    pub ufo: UfoPose,
    pub title_visible: bool,
    pub hint_visible: bool,
    pub overlay: OverlayState,
    pub index: usize,
    pub active: &'static Burger,
    pub offset_px: i64,
    pub spacing: Spacing,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Time since mount, drives ambient animation
    pub elapsed: Duration,
}

/// What teardown released
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Teardown {
    pub cancelled_transitions: usize,
    pub released_cue: bool,
}

/// The single component behind the landing screen
pub struct PageController {
    started: bool,
    intro: IntroSequencer,
    carousel: Carousel,
    overlay: OverlayState,
    spacing: Spacing,
    audio: Box<dyn AudioOutput>,
    cue: Option<CueHandle>,
    mounted_at: Instant,
    mounted: bool,
}

impl PageController {
    /// Mount with fixed defaults; spacing is read from the viewport once.
    pub fn mount(viewport: &dyn Viewport, mut audio: Box<dyn AudioOutput>, now: Instant) -> Self {
        audio.prepare(&WHOOSH);
        let spacing = Spacing::for_width(viewport.width_px());
        tracing::info!(
            "Page mounted (viewport {}px, spacing {}px)",
            viewport.width_px(),
            spacing.pixels()
        );
        Self {
            started: false,
            intro: IntroSequencer::new(),
            carousel: Carousel::new(),
            overlay: OverlayState::default(),
            spacing,
            audio,
            cue: None,
            mounted_at: now,
            mounted: true,
        }
    }

    // ------------------------------------------------------------------
    // Splash gate
    // ------------------------------------------------------------------

    /// Pass the splash gate and start the intro. One-way; repeats are ignored.
    pub fn enter(&mut self, now: Instant) -> bool {
        if !self.mounted || self.started {
            return false;
        }
        self.started = true;
        self.intro.start(now);
        tracing::info!("Experience started");
        true
    }

    // ------------------------------------------------------------------
    // Intro sequencer and audio cue
    // ------------------------------------------------------------------

    /// Advance the clock. Returns the phases entered during this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<IntroPhase> {
        if !self.mounted {
            return Vec::new();
        }
        let entered = self.intro.poll(now);
        for phase in &entered {
            self.on_phase_entered(*phase);
        }
        entered
    }

    fn on_phase_entered(&mut self, phase: IntroPhase) {
        // The cue belongs to phase 1 only
        if let Some(cue) = self.cue.take() {
            cue.release();
        }
        if phase != IntroPhase::FlyingIn {
            return;
        }
        match self.audio.play(&WHOOSH) {
            Ok(playback) => self.cue = Some(CueHandle::new(&WHOOSH, playback)),
            Err(e) => tracing::warn!("Audio cue failed: {}", e),
        }
    }

    // ------------------------------------------------------------------
    // Overlay
    // ------------------------------------------------------------------

    /// UFO activation. Ignored until the UFO has landed.
    pub fn activate_ufo(&mut self) -> bool {
        if !self.mounted || !self.intro.phase().ufo_landed() {
            tracing::debug!("UFO activation ignored in phase {}", self.intro.phase().order());
            return false;
        }
        self.set_overlay(self.overlay.toggled());
        true
    }

    /// Route a key. Only acts while the overlay is open.
    pub fn key(&mut self, key: KeyInput) -> bool {
        if !self.mounted || !self.overlay.is_open() {
            return false;
        }
        match key {
            KeyInput::ArrowRight => {
                self.next();
            }
            KeyInput::ArrowLeft => {
                self.previous();
            }
            KeyInput::Escape => self.set_overlay(self.overlay.dismissed()),
            KeyInput::Other => return false,
        }
        true
    }

    fn set_overlay(&mut self, next: OverlayState) {
        if next != self.overlay {
            tracing::debug!("Overlay {} -> {}", self.overlay, next);
            self.overlay = next;
        }
    }

    // ------------------------------------------------------------------
    // Carousel
    // ------------------------------------------------------------------

    /// Clamp, store and reveal the info card
    pub fn select_index(&mut self, index: i64) -> usize {
        if !self.mounted {
            return self.carousel.index();
        }
        let stored = self.carousel.select(index);
        self.set_overlay(self.overlay.selected());
        stored
    }

    pub fn previous(&mut self) -> usize {
        if !self.mounted {
            return self.carousel.index();
        }
        let stored = self.carousel.previous();
        self.set_overlay(self.overlay.selected());
        stored
    }

    pub fn next(&mut self) -> usize {
        if !self.mounted {
            return self.carousel.index();
        }
        let stored = self.carousel.next();
        self.set_overlay(self.overlay.selected());
        stored
    }

    /// Strip offset in pixels for the current index and spacing
    pub fn compute_offset(&self) -> i64 {
        self.carousel.offset(self.spacing)
    }

    // ------------------------------------------------------------------
    // Responsive spacing
    // ------------------------------------------------------------------

    /// Re-read the viewport width and pick the spacing bucket
    pub fn resize(&mut self, viewport: &dyn Viewport) -> Spacing {
        if !self.mounted {
            return self.spacing;
        }
        let spacing = Spacing::for_width(viewport.width_px());
        if spacing != self.spacing {
            tracing::debug!(
                "Spacing {}px -> {}px",
                self.spacing.pixels(),
                spacing.pixels()
            );
            self.spacing = spacing;
        }
        self.spacing
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Cancel pending transitions and release the cue. Idempotent.
    pub fn unmount(&mut self) -> Teardown {
        if !self.mounted {
            return Teardown::default();
        }
        self.mounted = false;
        let cancelled_transitions = self.intro.cancel();
        let released_cue = match self.cue.take() {
            Some(cue) => {
                cue.release();
                true
            }
            None => false,
        };
        tracing::info!(
            "Page unmounted (cancelled {} transitions, released cue: {})",
            cancelled_transitions,
            released_cue
        );
        Teardown {
            cancelled_transitions,
            released_cue,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> IntroPhase {
        self.intro.phase()
    }

    pub fn intro(&self) -> &IntroSequencer {
        &self.intro
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    pub fn menu_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn info_visible(&self) -> bool {
        self.overlay.info_visible()
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// True while a cue handle is held (it may have finished playing)
    pub fn cue_active(&self) -> bool {
        self.cue.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Snapshot for rendering
    pub fn view(&self, now: Instant) -> PageView {
        let phase = self.intro.phase();
        let ufo = match phase {
            IntroPhase::Waiting => UfoPose::Hidden,
            IntroPhase::FlyingIn => UfoPose::FlyingIn {
                progress: self.intro.fly_in_progress(now).unwrap_or(0.0),
            },
            IntroPhase::Landed | IntroPhase::Revealed => UfoPose::Landed,
        };
        PageView {
            splash_visible: !self.started,
            phase,
            ufo,
            title_visible: phase >= IntroPhase::Landed,
            hint_visible: phase >= IntroPhase::Revealed && !self.overlay.is_open(),
            overlay: self.overlay,
            index: self.carousel.index(),
            active: self.carousel.active(),
            offset_px: self.compute_offset(),
            spacing: self.spacing,
            prev_enabled: self.carousel.can_go_previous(),
            next_enabled: self.carousel.can_go_next(),
            elapsed: now.saturating_duration_since(self.mounted_at),
        }
    }
}

impl Drop for PageController {
    fn drop(&mut self) {
        self.unmount();
    }
}
