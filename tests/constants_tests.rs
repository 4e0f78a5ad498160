// Host-side tests for presentation and tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_thresholds_are_ordered() {
    // The navbar elevates well before the back-to-top control appears
    assert!(NAVBAR_ELEVATE_AFTER_PX < BACK_TO_TOP_AFTER_PX);
    assert!(NAV_OFFSET_PX > 0.0);
    assert!(SCROLL_THROTTLE_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn notification_timing_is_consistent() {
    // Slide-in starts before the banner expires, and the exit fits in a frame budget
    assert!(NOTIFICATION_ENTER_DELAY_MS < NOTIFICATION_LIFETIME_MS);
    assert!(NOTIFICATION_EXIT_MS < NOTIFICATION_LIFETIME_MS);
    assert_eq!(NOTIFICATION_LIFETIME_MS, 5000);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_parameters_stay_in_range() {
    assert_eq!(PARTICLE_COUNT, 30);
    assert!(PARTICLE_OPACITY_MIN + PARTICLE_OPACITY_SPAN <= 1.0);
    assert!(PARTICLE_RADIUS_MIN > 0.0);
    assert!(PARTICLE_MAX_SPEED > 0.0);
}

#[test]
fn observer_options_match_layout() {
    assert_eq!(SECTION_OBSERVER.root_margin, "-70px 0px -70px 0px");
    assert!((SECTION_OBSERVER.threshold - 0.3).abs() < f64::EPSILON);
    assert_eq!(REVEAL_OBSERVER.root_margin, "0px 0px -50px 0px");
    assert!((REVEAL_OBSERVER.threshold - 0.1).abs() < f64::EPSILON);
}

#[test]
fn icons_use_font_awesome_classes() {
    assert_eq!(icon_class("info-circle"), "fas fa-info-circle");
    assert_eq!(icon_class(CLOSE_ICON), "fas fa-times");
    assert_ne!(NOTIFICATION_CONTENT_CLASS, NOTIFICATION_CLOSE_CLASS);
}

#[test]
fn ready_state_matches_the_dom_keyword() {
    // `document.readyState` is a plain string; only "loading" defers boot
    assert_eq!(READY_STATE_LOADING, "loading");
}

#[test]
fn slide_transforms_are_opposites() {
    assert_eq!(SLIDE_IN, "translateX(0)");
    assert_eq!(SLIDE_OUT, "translateX(100%)");
    assert!(NOTIFICATION_BASE_CSS.contains(SLIDE_OUT));
}
