//! The Enter gate shown before anything else

use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SPLASH_WIDTH: u16 = 40;
const SPLASH_HEIGHT: u16 = 9;

/// Render the full-screen splash gate
pub fn render_splash(f: &mut Frame, area: Rect) {
    let width = SPLASH_WIDTH.min(area.width);
    let height = SPLASH_HEIGHT.min(area.height);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("UFO BURGERS", Styles::title())),
        Line::from(Span::styled("A Cosmic Experience", Styles::text_secondary())),
        Line::from(""),
        Line::from(Span::styled("  Enter  ", Styles::button_active())),
    ];
    let splash = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_inactive())
            .style(Styles::panel_bg()),
    );

    f.render_widget(Clear, panel);
    f.render_widget(splash, panel);
}
