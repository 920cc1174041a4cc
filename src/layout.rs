//! Responsive spacing and the viewport port
//!
//! The carousel pitch has two buckets chosen by viewport width. The
//! controller never asks the terminal directly; it reads a [`Viewport`].

/// Widths at or below this many pixels use the compact pitch
pub const COMPACT_BREAKPOINT_PX: u32 = 768;

/// Per-item horizontal pitch of the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spacing {
    /// 480px, wide viewports
    Wide,
    /// 390px, narrow viewports
    Compact,
}

impl Spacing {
    /// Pick the bucket for a viewport width. No hysteresis.
    pub const fn for_width(width_px: u32) -> Self {
        if width_px <= COMPACT_BREAKPOINT_PX {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    /// Pitch in pixels
    pub const fn pixels(self) -> u32 {
        match self {
            Self::Wide => 480,
            Self::Compact => 390,
        }
    }
}

/// Source of the current viewport width
pub trait Viewport {
    /// Current width in pixels, read synchronously
    fn width_px(&self) -> u32;
}

/// A terminal measured in character cells.
///
/// Columns are converted to pixels with a fixed cell width so the same
/// breakpoint applies as on any other surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalViewport {
    pub columns: u16,
    pub cell_width_px: u32,
}

impl TerminalViewport {
    pub fn new(columns: u16, cell_width_px: u32) -> Self {
        Self {
            columns,
            cell_width_px,
        }
    }
}

impl Viewport for TerminalViewport {
    fn width_px(&self) -> u32 {
        u32::from(self.columns) * self.cell_width_px
    }
}

/// A viewport with a fixed pixel width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub u32);

impl Viewport for FixedViewport {
    fn width_px(&self) -> u32 {
        self.0
    }
}
