// Host-side tests for scroll-driven chrome and section offsets.

use folio_core::{scroll_effects, section_scroll_top, NavbarStyle, ScrollEffects};

#[test]
fn top_of_page_is_flat_without_back_to_top() {
    assert_eq!(
        scroll_effects(0.0),
        ScrollEffects {
            navbar: NavbarStyle::Flat,
            back_to_top_visible: false,
        }
    );
}

#[test]
fn deep_scroll_elevates_and_shows_back_to_top() {
    assert_eq!(
        scroll_effects(400.0),
        ScrollEffects {
            navbar: NavbarStyle::Elevated,
            back_to_top_visible: true,
        }
    );
}

#[test]
fn thresholds_are_strict() {
    assert_eq!(scroll_effects(50.0).navbar, NavbarStyle::Flat);
    assert_eq!(scroll_effects(50.5).navbar, NavbarStyle::Elevated);
    assert!(!scroll_effects(300.0).back_to_top_visible);
    assert!(scroll_effects(301.0).back_to_top_visible);
    // Between the two thresholds: elevated but no back-to-top yet
    let mid = scroll_effects(120.0);
    assert_eq!(mid.navbar, NavbarStyle::Elevated);
    assert!(!mid.back_to_top_visible);
}

#[test]
fn navbar_styles() {
    assert_eq!(NavbarStyle::Flat.box_shadow(), "none");
    assert_eq!(NavbarStyle::Flat.background(), "rgba(255, 255, 255, 0.95)");
    assert_eq!(NavbarStyle::Elevated.box_shadow(), "0 2px 20px rgba(0, 0, 0, 0.1)");
    assert_eq!(NavbarStyle::Elevated.background(), "rgba(255, 255, 255, 0.98)");
}

#[test]
fn section_target_clears_fixed_header() {
    assert_eq!(section_scroll_top(800.0), 730.0);
    assert_eq!(section_scroll_top(70.0), 0.0);
    assert_eq!(section_scroll_top(0.0), 0.0);
}
