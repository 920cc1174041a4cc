//! Shell state definitions
//!
//! The page controller owns the experience; the shell only tracks what sits
//! around it (help overlay, quit request) and which screen is showing.

use crate::controller::PageView;

/// Which screen the user is looking at, for keybindings and help
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Enter gate
    Splash,
    /// UFO not landed yet, nothing is interactive
    Intro,
    /// UFO landed, beam closed
    Landing,
    /// Beam open, carousel visible
    Carousel,
}

impl Screen {
    /// Derive the screen from a page snapshot
    pub fn from_view(view: &PageView) -> Self {
        if view.splash_visible {
            Self::Splash
        } else if view.overlay.is_open() {
            Self::Carousel
        } else if view.phase.ufo_landed() {
            Self::Landing
        } else {
            Self::Intro
        }
    }

    /// Display name
    pub const fn title(self) -> &'static str {
        match self {
            Self::Splash => "Splash",
            Self::Intro => "Arrival",
            Self::Landing => "Landing Site",
            Self::Carousel => "Burger Beam",
        }
    }
}

/// State of the terminal shell around the page
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Set once the user asks to leave
    pub quit_requested: bool,
}
