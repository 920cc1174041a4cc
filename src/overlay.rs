//! Overlay visibility state machine
//!
//! The beam, carousel and info card form one overlay. Modelling it as a
//! single enum makes "info visible while closed" unrepresentable.
//!
//! ```text
//!            activate                select
//! Closed ─────────────▶ Open ─────────────▶ OpenWithInfo
//!   ▲                    │                      │
//!   └──── activate / Esc ┴──────────────────────┘
//! ```

use std::fmt;

/// Combined visibility of the selection panel and its detail card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    /// Carousel visible, no burger picked yet
    Open,
    /// Carousel and info card visible
    OpenWithInfo,
}

impl OverlayState {
    /// True in either open sub-state
    #[inline]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// True only when the info card is showing
    #[inline]
    pub const fn info_visible(self) -> bool {
        matches!(self, Self::OpenWithInfo)
    }

    /// UFO activation: open when closed, close (and clear info) when open
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open | Self::OpenWithInfo => Self::Closed,
        }
    }

    /// A burger was selected. Reveals the card only when already open.
    pub const fn selected(self) -> Self {
        match self {
            Self::Closed => Self::Closed,
            Self::Open | Self::OpenWithInfo => Self::OpenWithInfo,
        }
    }

    /// Escape: always back to closed
    pub const fn dismissed(self) -> Self {
        Self::Closed
    }
}

impl fmt::Display for OverlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Closed => "closed",
            Self::Open => "open",
            Self::OpenWithInfo => "open with info",
        };
        write!(f, "{}", name)
    }
}
