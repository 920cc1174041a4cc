//! Light beam, carousel strip and info card

use super::{centered_x, put_clipped};
use crate::catalog::{Burger, CATALOG};
use crate::controller::PageView;
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BURGER_ART: [&str; 3] = [r#" .-""""-. "#, "(________)", " `------' "];
const BURGER_WIDTH: usize = 10;

/// Warm cone widening downward from under the UFO
pub fn render_beam(f: &mut Frame, area: Rect) {
    let buf = f.buffer_mut();
    let mid = i32::from(area.x) + i32::from(area.width) / 2;
    for row in 0..area.height {
        let half = 4 + i32::from(row) * 2;
        let y = i32::from(area.y + row);
        let fill = "░".repeat((half * 2) as usize);
        put_clipped(buf, area, mid - half, y, &fill, Styles::beam());
    }
}

/// Column at which burger `index` is centered, given the strip offset.
///
/// `columns` converts pixels to terminal columns.
pub fn slot_center(area: Rect, view: &PageView, index: usize, columns: impl Fn(i64) -> i64) -> i64 {
    let centre = i64::from(area.x) + i64::from(area.width) / 2;
    // Convert once so the active slot lands exactly on the centre
    let px = index as i64 * i64::from(view.spacing.pixels()) + view.offset_px;
    centre + columns(px)
}

/// The carousel strip: every burger placed at its slot, translated by the offset
pub fn render_carousel(f: &mut Frame, area: Rect, view: &PageView, columns: impl Fn(i64) -> i64) {
    if area.height < 2 {
        return;
    }
    let art_top = i32::from(area.y) + (i32::from(area.height) - 4).max(0) / 2;
    let buf = f.buffer_mut();

    for (index, burger) in CATALOG.iter().enumerate() {
        let centre = slot_center(area, view, index, &columns) as i32;
        let active = index == view.index;
        let style = if active {
            Styles::selected()
        } else {
            Styles::unselected()
        };
        let left = centre - BURGER_WIDTH as i32 / 2;
        for (row, line) in BURGER_ART.iter().enumerate() {
            put_clipped(buf, area, left, art_top + row as i32, line, style);
        }
        let label = if active {
            format!("» {} «", burger.name)
        } else {
            burger.name.to_string()
        };
        let label_x = centre - label.chars().count() as i32 / 2;
        put_clipped(buf, area, label_x, art_top + BURGER_ART.len() as i32, &label, style);
    }

    // Prev/next controls, dimmed at the ends
    let chevron_y = art_top + 1;
    let prev_style = if view.prev_enabled {
        Styles::control()
    } else {
        Styles::disabled()
    };
    let next_style = if view.next_enabled {
        Styles::control()
    } else {
        Styles::disabled()
    };
    put_clipped(buf, area, i32::from(area.x) + 1, chevron_y, "‹", prev_style);
    put_clipped(buf, area, i32::from(area.right()) - 2, chevron_y, "›", next_style);
}

/// "Scroll" hint at the bottom of the beam
pub fn render_scroll_indicator(f: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let text = "Scroll ↓";
    let x = centered_x(area, text.chars().count());
    let y = i32::from(area.bottom()) - 1;
    put_clipped(f.buffer_mut(), area, x, y, text, Styles::text_muted());
}

/// Card describing the featured burger
pub fn render_info_card(f: &mut Frame, area: Rect, burger: &Burger) {
    let width = 36.min(area.width);
    let card = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };
    let lines = vec![
        Line::from(Span::styled("Now Featuring", Styles::label())),
        Line::from(Span::styled(burger.name, Styles::title())),
        Line::from(Span::styled(burger.tagline, Styles::text())),
        Line::from(Span::styled(" Explore Menu ", Styles::button_active())),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Styles::card_bg()),
    );
    f.render_widget(Clear, card);
    f.render_widget(paragraph, card);
}
