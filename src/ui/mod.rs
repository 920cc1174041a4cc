//! User interface rendering module
//!
//! Everything here is a pure function of a [`PageView`] snapshot:
//! - `header` - hero title and the navigation bar
//! - `splash` - the Enter gate
//! - `hero` - UFO, fly-in animation and click hint
//! - `beam` - light beam, carousel strip, info card, scroll indicator

mod beam;
mod header;
mod hero;
mod splash;

use crate::app::Screen;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::starfield::Starfield;
use crate::controller::PageView;
use crate::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

/// Rows taken by the hero title block
const TITLE_HEIGHT: u16 = 3;
/// Rows reserved for the UFO
const UFO_HEIGHT: u16 = 5;
/// Rows for the info card
const CARD_HEIGHT: u16 = 6;

/// Renders a frame from a page snapshot
pub struct UiRenderer {
    /// Pixels per terminal column, to place the carousel strip
    cell_width_px: u32,
}

impl UiRenderer {
    pub fn new(cell_width_px: u32) -> Self {
        Self {
            cell_width_px: cell_width_px.max(1),
        }
    }

    /// Convert a pixel distance to columns
    pub fn columns(&self, px: i64) -> i64 {
        px / i64::from(self.cell_width_px)
    }

    /// Draw one frame
    pub fn render(
        &self,
        f: &mut Frame,
        view: &PageView,
        keybinding_ctx: &KeybindingContext,
        help_visible: bool,
    ) {
        let area = f.area();
        f.render_widget(Block::default().style(Styles::panel_bg()), area);
        f.render_widget(Starfield::new(view.elapsed), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        let (stage, nav) = (chunks[0], chunks[1]);

        let screen = Screen::from_view(view);
        if view.splash_visible {
            splash::render_splash(f, stage);
        } else {
            self.render_stage(f, stage, view);
        }

        header::render_nav_bar(f, nav, &keybinding_ctx.get_nav_items(screen));

        if help_visible {
            HelpOverlay::new(screen, keybinding_ctx).render(f, area);
        }
    }

    fn render_stage(&self, f: &mut Frame, area: Rect, view: &PageView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Length(UFO_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(CARD_HEIGHT),
            ])
            .split(area);

        if view.title_visible {
            header::render_title(f, chunks[0]);
        }
        hero::render_ufo(f, chunks[1], view);
        if view.overlay.is_open() {
            beam::render_beam(f, chunks[2]);
            beam::render_carousel(f, chunks[2], view, |px| self.columns(px));
            beam::render_scroll_indicator(f, chunks[2]);
        } else if view.hint_visible {
            hero::render_click_hint(f, chunks[2]);
        }
        if view.overlay.info_visible() {
            beam::render_info_card(f, chunks[3], view.active);
        }
    }
}

/// Write `text` starting at possibly off-screen coordinates, clipped to `area`
pub(crate) fn put_clipped(buf: &mut Buffer, area: Rect, x: i32, y: i32, text: &str, style: Style) {
    if y < i32::from(area.top()) || y >= i32::from(area.bottom()) {
        return;
    }
    for (i, ch) in text.chars().enumerate() {
        let cx = x + i as i32;
        if cx < i32::from(area.left()) || cx >= i32::from(area.right()) {
            continue;
        }
        if ch == ' ' {
            continue;
        }
        buf[(cx as u16, y as u16)].set_char(ch).set_style(style);
    }
}

/// Column at which text of `width` chars is centered in `area`
pub(crate) fn centered_x(area: Rect, width: usize) -> i32 {
    i32::from(area.x) + (i32::from(area.width) - width as i32) / 2
}
