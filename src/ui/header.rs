//! Hero title and navigation bar

use crate::components::keybindings::NavBarItem;
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the brand title and subtitle
pub fn render_title(f: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let lines = vec![
        Line::from(Span::styled("UFO BURGERS", Styles::title())),
        Line::from(Span::styled(
            "A Cosmic Experience Landing in Wallsend",
            Styles::text_secondary(),
        )),
    ];
    let title = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(title, area);
}

/// Render the navigation bar with key hints
pub fn render_nav_bar(f: &mut Frame, area: Rect, items: &[NavBarItem]) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let mut spans: Vec<Span> = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  |  ", Styles::nav_hint()));
        }
        spans.push(Span::styled(item.key_display.clone(), Styles::key_hint()));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
    }
    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(Styles::panel_bg());
    f.render_widget(bar, area);
}
