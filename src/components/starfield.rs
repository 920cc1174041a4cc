//! Procedural star-field background
//!
//! Stars are placed by hashing cell coordinates, so the field is stable
//! across frames and needs no stored state. Brightness twinkles with time and
//! the whole field drifts slowly to the left.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use std::time::Duration;

/// Stars per thousand cells
const DENSITY_PERMILLE: u64 = 12;
/// Seconds for the field to drift one column
const DRIFT_SECS_PER_COLUMN: f32 = 4.0;

pub struct Starfield {
    elapsed: Duration,
}

impl Starfield {
    pub fn new(elapsed: Duration) -> Self {
        Self { elapsed }
    }
}

/// SplitMix64 finaliser over packed coordinates
fn cell_hash(x: u64, y: u64) -> u64 {
    let mut z = (x << 32 | y).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Star glyph and brightness (0..=255) for a field cell, if it holds a star
pub fn star_at(x: u64, y: u64, t: f32) -> Option<(char, u8)> {
    let h = cell_hash(x, y);
    if h % 1000 >= DENSITY_PERMILLE {
        return None;
    }
    let size = (h >> 10) % 4;
    let phase = ((h >> 20) % 628) as f32 / 100.0;
    let speed = 0.5 + ((h >> 30) % 100) as f32 / 100.0;
    let twinkle = 0.6 + 0.4 * (t * speed + phase).sin();
    let brightness = (twinkle * 255.0).clamp(0.0, 255.0) as u8;
    let glyph = match size {
        0 => '.',
        1 => '·',
        2 => '+',
        _ => '*',
    };
    Some((glyph, brightness))
}

impl Widget for Starfield {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = self.elapsed.as_secs_f32();
        let drift = (t / DRIFT_SECS_PER_COLUMN) as u64;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let field_x = u64::from(x) + drift;
                if let Some((glyph, b)) = star_at(field_x, u64::from(y), t) {
                    // Cool blue tint
                    let color = Color::Rgb(b / 2 + b / 4, b / 2 + b / 3, b);
                    buf[(x, y)].set_char(glyph).set_style(Style::default().fg(color));
                }
            }
        }
    }
}
