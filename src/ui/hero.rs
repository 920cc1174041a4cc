//! UFO and click hint

use super::{centered_x, put_clipped};
use crate::controller::{PageView, UfoPose};
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const UFO_HULL: [&str; 4] = [
    r#"     .-"""-.     "#,
    r#" .--'       '--. "#,
    r#"(_______________)"#,
    r#"    '-._____.-'  "#,
];
/// Cabin lights, drawn over the hull
const UFO_LIGHTS: [&str; 4] = [
    "",
    "      o   o      ",
    "  *   *   *   *  ",
    "",
];
const UFO_WIDTH: usize = 17;

/// Ease-out cubic, so the UFO decelerates into its landing spot
fn ease_out(p: f32) -> f32 {
    1.0 - (1.0 - p.clamp(0.0, 1.0)).powi(3)
}

/// Top-left corner of the UFO for the current pose, if it is visible
pub fn ufo_origin(area: Rect, pose: UfoPose) -> Option<(i32, i32)> {
    let landed = (centered_x(area, UFO_WIDTH), i32::from(area.y));
    match pose {
        UfoPose::Hidden => None,
        UfoPose::Landed => Some(landed),
        UfoPose::FlyingIn { progress } => {
            // Sweeps in from beyond the top-left corner
            let start = (
                i32::from(area.x) - UFO_WIDTH as i32,
                i32::from(area.y) - 2 * UFO_HULL.len() as i32,
            );
            let e = ease_out(progress);
            let x = start.0 + ((landed.0 - start.0) as f32 * e).round() as i32;
            let y = start.1 + ((landed.1 - start.1) as f32 * e).round() as i32;
            Some((x, y))
        }
    }
}

/// Render the UFO in its current pose. The stage area is the clip region so
/// the UFO can arrive from off-screen.
pub fn render_ufo(f: &mut Frame, area: Rect, view: &PageView) {
    let Some((x, y)) = ufo_origin(area, view.ufo) else {
        return;
    };
    let clip = f.area();
    let buf = f.buffer_mut();
    for (row, line) in UFO_HULL.iter().enumerate() {
        put_clipped(buf, clip, x, y + row as i32, line, Styles::ufo());
    }
    for (row, line) in UFO_LIGHTS.iter().enumerate() {
        put_clipped(buf, clip, x, y + row as i32, line, Styles::ufo_glow());
    }
}

/// "Click the UFO" prompt
pub fn render_click_hint(f: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Click the UFO", Styles::text()),
        Span::styled("  (Space)", Styles::text_muted()),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(
        hint,
        Rect {
            height: 1,
            ..area
        },
    );
}
