//! Reusable UI components
//!
//! - `keybindings` - screen-aware key registry, nav bar items, help content
//! - `help_overlay` - floating help window
//! - `starfield` - procedural background

pub mod help_overlay;
pub mod keybindings;
pub mod starfield;
