use super::*;

// =============================================================
// Header
// =============================================================

#[test]
fn header_switches_after_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(100.0));
    assert!(is_scrolled(100.5));
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_has_nothing_open() {
    let ui = UiState::default();
    assert_eq!(ui.order, None);
    assert!(!ui.menu_open);
}

#[test]
fn open_order_records_label_and_closes_menu() {
    let mut ui = UiState::default();
    ui.toggle_menu();
    ui.open_order(Some("Tandir 70 sm — 2 500 000 so'm".to_owned()));
    assert!(!ui.menu_open);
    assert_eq!(ui.order.as_ref().and_then(|o| o.product_label.as_deref()), Some("Tandir 70 sm — 2 500 000 so'm"));
    ui.close_order();
    assert_eq!(ui.order, None);
}

#[test]
fn general_order_has_no_label() {
    let mut ui = UiState::default();
    ui.open_order(None);
    assert_eq!(ui.order, Some(OrderTarget::default()));
}

// =============================================================
// Lightbox
// =============================================================

#[test]
fn lightbox_wraps_in_both_directions() {
    let mut lb = Lightbox::new(3);
    lb.open(2);
    lb.next();
    assert_eq!(lb.current(), Some(0));
    lb.prev();
    assert_eq!(lb.current(), Some(2));
}

#[test]
fn lightbox_ignores_out_of_range_and_closed_navigation() {
    let mut lb = Lightbox::new(3);
    lb.open(5);
    assert_eq!(lb.current(), None);
    lb.next();
    lb.prev();
    assert_eq!(lb.current(), None);
    lb.open(1);
    lb.close();
    assert_eq!(lb.current(), None);
}
