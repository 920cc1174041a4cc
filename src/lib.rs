//! UFO Burgers Library
//!
//! A cinematic landing experience for a burger brand, rendered in the
//! terminal: splash gate, timed UFO fly-in with a synthesized whoosh, and a
//! carousel of eight planet-themed burgers behind a light beam.

pub mod app;
pub mod audio;
pub mod carousel;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod intro;
pub mod layout;
pub mod overlay;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, Screen};
pub use audio::{AudioOutput, CueHandle, NullOutput, Playback};
pub use carousel::Carousel;
pub use catalog::{Burger, Planet, CATALOG};
pub use config::ExperienceConfig;
pub use controller::{KeyInput, PageController, PageView, Teardown, UfoPose};
pub use error::UfoError;
pub use intro::{IntroPhase, IntroSequencer, PhaseTransitionError};
pub use layout::{FixedViewport, Spacing, TerminalViewport, Viewport};
pub use overlay::OverlayState;
