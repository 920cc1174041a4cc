//! Centralized theme and styling for the landing screen
//!
//! A single source of truth for the cosmic palette and the styles built on it.
//!
//! # Usage
//! ```rust
//! use ufoburgers::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Deep space background for panels and the splash gate
    pub const BG_PRIMARY: Color = Color::Rgb(8, 8, 22);

    /// Info card background
    pub const BG_CARD: Color = Color::Rgb(24, 18, 36);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Brand title color
    pub const PRIMARY: Color = Color::Rgb(255, 196, 92);

    /// Highlights and the active burger
    pub const SECONDARY: Color = Color::Rgb(255, 150, 64);

    /// Warm beam/spotlight
    pub const BEAM: Color = Color::Rgb(255, 214, 140);

    /// UFO hull
    pub const UFO_HULL: Color = Color::Rgb(170, 180, 200);

    /// UFO glow and lights
    pub const UFO_GLOW: Color = Color::Rgb(120, 230, 255);

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Rgb(255, 196, 92);

    /// Inactive border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Brand title (warm gold, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Small caps label above headings
    pub fn label() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::ITALIC)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive border style
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Panel background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Info card background
    pub fn card_bg() -> Style {
        Style::default().bg(Colors::BG_CARD)
    }

    /// Active burger in the carousel
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Other burgers in the carousel
    pub fn unselected() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Dimmed control (disabled prev/next)
    pub fn disabled() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::DIM)
    }

    /// Enabled control
    pub fn control() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Light beam fill
    pub fn beam() -> Style {
        Style::default().fg(Colors::BEAM)
    }

    /// UFO hull
    pub fn ufo() -> Style {
        Style::default().fg(Colors::UFO_HULL)
    }

    /// UFO lights
    pub fn ufo_glow() -> Style {
        Style::default()
            .fg(Colors::UFO_GLOW)
            .add_modifier(Modifier::BOLD)
    }

    /// Key in the navigation bar
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Description in the navigation bar
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    /// Focused button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::BG_PRIMARY)
            .bg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_differs_from_control() {
        assert_ne!(Styles::disabled(), Styles::control());
    }

    #[test]
    fn test_title_is_bold() {
        assert!(Styles::title().add_modifier.contains(Modifier::BOLD));
    }
}
