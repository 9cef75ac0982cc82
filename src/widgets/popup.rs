//! Placement helpers for floating popups

use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly under `anchor`, clamped to `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x.saturating_add(x_offset).min(bounds.right());
    let popup_y = anchor.bottom().min(bounds.bottom());

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(bounds.right().saturating_sub(popup_x)),
        height: height.min(bounds.bottom().saturating_sub(popup_y)),
    }
}

/// Area inside a bordered block
pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect::new(
        area.x.saturating_add(horizontal_margin),
        area.y.saturating_add(vertical_margin),
        area.width.saturating_sub(horizontal_margin.saturating_mul(2)),
        area.height.saturating_sub(vertical_margin.saturating_mul(2)),
    )
}

/// Blank out whatever was drawn under a floating popup
pub fn clear_area(frame: &mut Frame, area: Rect) {
    if !area.is_empty() {
        frame.render_widget(Clear, area);
    }
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
