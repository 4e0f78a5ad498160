// Host-side tests for notification kinds and the single-slot lifecycle.

use folio_core::{Notification, NotificationKind, NotificationSlot, Phase};

fn note(message: &str, kind: NotificationKind) -> Notification {
    Notification {
        message: message.into(),
        kind,
    }
}

#[test]
fn kinds_map_to_fixed_styles_and_icons() {
    assert_eq!(NotificationKind::Success.icon(), "check-circle");
    assert_eq!(NotificationKind::Error.icon(), "exclamation-circle");
    assert_eq!(NotificationKind::Info.icon(), "info-circle");

    let p = NotificationKind::Error.palette();
    assert_eq!((p.background, p.text, p.accent), ("#f8d7da", "#721c24", "#dc3545"));
    assert_eq!(
        NotificationKind::Success.color_css(),
        "background: #d4edda; color: #155724; border-left: 4px solid #28a745;"
    );
    assert_eq!(NotificationKind::Info.class_name(), "notification notification-info");
    assert_eq!(NotificationKind::default(), NotificationKind::Info);
}

#[test]
fn second_show_replaces_the_first_immediately() {
    let mut slot = NotificationSlot::new();
    let (first, evicted) = slot.show(note("one", NotificationKind::Info));
    assert_eq!(evicted, None);

    let (second, evicted) = slot.show(note("two", NotificationKind::Error));
    assert_eq!(evicted, Some(first));
    assert_ne!(first, second);
    assert_eq!(slot.current(), Some(&note("two", NotificationKind::Error)));
    assert!(slot.entered(second));
}

#[test]
fn stale_timers_do_not_touch_the_replacement() {
    let mut slot = NotificationSlot::new();
    let (first, _) = slot.show(note("one", NotificationKind::Info));
    let (second, _) = slot.show(note("two", NotificationKind::Info));

    // Timers scheduled for the evicted banner all bounce off
    assert!(!slot.entered(first));
    assert!(!slot.dismiss(first));
    assert!(!slot.detached(first));
    assert_eq!(slot.phase(), Some(Phase::Entering));
    assert!(slot.entered(second));
}

#[test]
fn full_lifecycle_enter_show_leave_detach() {
    let mut slot = NotificationSlot::new();
    let (id, _) = slot.show(note("saved", NotificationKind::Success));
    assert_eq!(slot.phase(), Some(Phase::Entering));

    assert!(slot.entered(id));
    assert_eq!(slot.phase(), Some(Phase::Shown));
    assert!(!slot.entered(id));

    assert!(slot.dismiss(id));
    assert_eq!(slot.phase(), Some(Phase::Leaving));
    // Auto-dismiss after a manual close is a no-op
    assert!(!slot.dismiss(id));

    assert!(slot.detached(id));
    assert_eq!(slot.current(), None);
    assert!(!slot.detached(id));
}

#[test]
fn detach_requires_a_slide_out_first() {
    let mut slot = NotificationSlot::new();
    let (id, _) = slot.show(note("hi", NotificationKind::Info));
    assert!(!slot.detached(id));
    assert!(slot.current().is_some());
}

#[test]
fn dismiss_before_slide_in_still_leaves() {
    let mut slot = NotificationSlot::new();
    let (id, _) = slot.show(note("hi", NotificationKind::Info));
    assert!(slot.dismiss(id));
    // The late slide-in timer must not pull a leaving banner back in
    assert!(!slot.entered(id));
    assert_eq!(slot.phase(), Some(Phase::Leaving));
}

#[test]
fn rapid_shows_leave_exactly_one_banner() {
    let mut slot = NotificationSlot::new();
    let mut last = None;
    for i in 0..10 {
        let (id, evicted) = slot.show(note(&format!("msg {i}"), NotificationKind::Info));
        assert_eq!(evicted, last);
        last = Some(id);
    }
    assert_eq!(slot.current().map(|n| n.message.as_str()), Some("msg 9"));
}
