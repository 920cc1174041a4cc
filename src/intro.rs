//! Intro Sequencer
//!
//! A one-shot, time-based chain of four visual phases that runs after the
//! splash gate is passed. The sequencer is cooperative: it never spawns a
//! thread or a timer of its own, it is polled with the current instant and
//! fires whatever transitions have come due.
//!
//! # Phase Flow
//!
//! ```text
//! Waiting      (only the star-field is visible)
//!     ↓ +500ms
//! FlyingIn     (UFO enters, audio cue plays)
//!     ↓ +6500ms
//! Landed       (UFO parked, title revealed, UFO clickable)
//!     ↓ +8000ms
//! Revealed     (click hint visible)
//! ```
//!
//! All delays are measured from activation, not from each other.

use std::fmt;
use std::time::{Duration, Instant};
use strum::EnumIter;
use thiserror::Error;

/// Length of the UFO fly-in animation, starting when `FlyingIn` is entered.
pub const FLY_IN_DURATION: Duration = Duration::from_millis(6000);

/// Delays from activation at which each phase is entered.
pub const INTRO_SCHEDULE: [(Duration, IntroPhase); 3] = [
    (Duration::from_millis(500), IntroPhase::FlyingIn),
    (Duration::from_millis(6500), IntroPhase::Landed),
    (Duration::from_millis(8000), IntroPhase::Revealed),
];

/// Ordinal stage of the entry animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, EnumIter)]
#[repr(u8)]
pub enum IntroPhase {
    /// Nothing but the background
    #[default]
    Waiting = 0,
    /// UFO flying in
    FlyingIn = 1,
    /// UFO landed, title visible
    Landed = 2,
    /// Click hint visible
    Revealed = 3,
}

impl IntroPhase {
    /// Numeric order of this phase (0-3)
    #[inline]
    pub const fn order(self) -> u8 {
        self as u8
    }

    /// Next phase in the chain, or None once revealed
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Waiting => Some(Self::FlyingIn),
            Self::FlyingIn => Some(Self::Landed),
            Self::Landed => Some(Self::Revealed),
            Self::Revealed => None,
        }
    }

    /// True once the UFO has landed and accepts activation
    #[inline]
    pub const fn ufo_landed(self) -> bool {
        self.order() >= Self::Landed.order()
    }

    /// Human-readable description
    pub const fn description(self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::FlyingIn => "UFO flying in",
            Self::Landed => "UFO landed",
            Self::Revealed => "Fully revealed",
        }
    }
}

impl fmt::Display for IntroPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Errors that can occur during phase transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhaseTransitionError {
    /// Attempted to skip one or more phases
    #[error("Cannot skip from {from} to {to}")]
    SkippedPhase { from: IntroPhase, to: IntroPhase },

    /// Attempted to go backwards
    #[error("Cannot go backwards from {from} to {to} (the intro only runs forward)")]
    BackwardTransition { from: IntroPhase, to: IntroPhase },

    /// Attempted to re-enter the current phase
    #[error("Already at phase {phase}")]
    AlreadyAtPhase { phase: IntroPhase },
}

/// A pending phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTransition {
    deadline: Instant,
    target: IntroPhase,
}

/// Owns the intro phase and its pending transitions.
///
/// Pending transitions are plain data owned by the sequencer, so dropping or
/// cancelling the sequencer is all it takes to guarantee that nothing fires
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct IntroSequencer {
    phase: IntroPhase,
    started_at: Option<Instant>,
    /// Ordered by deadline; the schedule is increasing so insertion order is enough
    pending: Vec<PendingTransition>,
    history: Vec<(IntroPhase, Instant)>,
}

impl IntroSequencer {
    /// A sequencer in the `Waiting` phase with nothing scheduled
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    #[inline]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// When the sequence was activated, if it was
    #[inline]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Number of transitions still waiting to fire
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Phases entered so far, with the instant each was entered
    pub fn history(&self) -> &[(IntroPhase, Instant)] {
        &self.history
    }

    /// Instant at which the given phase was entered
    pub fn entered_at(&self, phase: IntroPhase) -> Option<Instant> {
        self.history
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, at)| *at)
    }

    /// Schedule the three transitions relative to `now`.
    ///
    /// Returns false (and schedules nothing) if the sequence was already
    /// activated: the intro runs at most once per mount.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        self.pending = INTRO_SCHEDULE
            .iter()
            .map(|(delay, target)| PendingTransition {
                deadline: now + *delay,
                target: *target,
            })
            .collect();
        tracing::debug!("Intro scheduled: {} transitions", self.pending.len());
        true
    }

    /// Fire every transition whose deadline is at or before `now`.
    ///
    /// Returns the phases entered, in order. Each fires exactly once.
    pub fn poll(&mut self, now: Instant) -> Vec<IntroPhase> {
        let due = self
            .pending
            .iter()
            .take_while(|t| t.deadline <= now)
            .count();
        let fired: Vec<PendingTransition> = self.pending.drain(..due).collect();

        let mut entered = Vec::with_capacity(fired.len());
        for transition in fired {
            match self.transition_to(transition.target, transition.deadline) {
                Ok(phase) => entered.push(phase),
                Err(e) => tracing::warn!("Dropped intro transition: {}", e),
            }
        }
        entered
    }

    /// Enter `target`, which must be the immediate next phase.
    ///
    /// # Errors
    ///
    /// - `AlreadyAtPhase` if target is the current phase
    /// - `BackwardTransition` if target is before the current phase
    /// - `SkippedPhase` if target is more than one phase ahead
    pub fn transition_to(
        &mut self,
        target: IntroPhase,
        at: Instant,
    ) -> Result<IntroPhase, PhaseTransitionError> {
        let from = self.phase;
        if target == from {
            return Err(PhaseTransitionError::AlreadyAtPhase { phase: from });
        }
        if target < from {
            return Err(PhaseTransitionError::BackwardTransition { from, to: target });
        }
        if from.next() != Some(target) {
            return Err(PhaseTransitionError::SkippedPhase { from, to: target });
        }

        self.phase = target;
        self.history.push((target, at));
        tracing::info!("Intro phase {} -> {}", from.order(), target.order());
        Ok(target)
    }

    /// Cancel all pending transitions. Returns how many were cancelled.
    pub fn cancel(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        if cancelled > 0 {
            tracing::debug!("Cancelled {} pending intro transitions", cancelled);
        }
        cancelled
    }

    /// Fly-in progress in `[0, 1]` while the UFO is in the air.
    ///
    /// Returns None outside of `FlyingIn`.
    pub fn fly_in_progress(&self, now: Instant) -> Option<f32> {
        if self.phase != IntroPhase::FlyingIn {
            return None;
        }
        let since = self.entered_at(IntroPhase::FlyingIn)?;
        let elapsed = now.saturating_duration_since(since);
        Some((elapsed.as_secs_f32() / FLY_IN_DURATION.as_secs_f32()).min(1.0))
    }
}
