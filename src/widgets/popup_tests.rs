//! Tests for widgets/popup

use super::*;

const BOUNDS: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 40,
};

#[test]
fn test_popup_below_anchor_basic() {
    let anchor = Rect::new(0, 1, 80, 3);

    let popup = popup_below_anchor(anchor, BOUNDS, 40, 12, 2);

    assert_eq!(popup.x, 2);
    assert_eq!(popup.y, 4);
    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 12);
}

#[test]
fn test_popup_below_anchor_clamped_to_bottom() {
    let anchor = Rect::new(0, 30, 80, 3);

    let popup = popup_below_anchor(anchor, BOUNDS, 40, 12, 2);

    assert_eq!(popup.y, 33);
    assert_eq!(popup.height, 7);
}

#[test]
fn test_popup_below_anchor_clamped_to_right_edge() {
    let anchor = Rect::new(90, 0, 10, 3);

    let popup = popup_below_anchor(anchor, BOUNDS, 40, 5, 2);

    assert_eq!(popup.x, 92);
    assert_eq!(popup.width, 8);
}

#[test]
fn test_popup_below_anchor_at_bottom_has_no_height() {
    let anchor = Rect::new(0, 37, 80, 3);

    let popup = popup_below_anchor(anchor, BOUNDS, 40, 5, 2);

    assert_eq!(popup.height, 0);
}

#[test]
fn test_inset_rect() {
    let inner = inset_rect(Rect::new(10, 5, 20, 8), 1, 1);
    assert_eq!(inner, Rect::new(11, 6, 18, 6));
}

#[test]
fn test_inset_rect_saturates() {
    let inner = inset_rect(Rect::new(0, 0, 1, 1), 1, 1);
    assert_eq!(inner.width, 0);
    assert_eq!(inner.height, 0);
}
