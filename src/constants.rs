// Presentation strings used by the web frontend.
//
// Kept free of web-sys types so host-side tests can include this file.

// Submit control while a message is in flight
pub const LOADING_LABEL_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

// `document.readyState` while the HTML is still being parsed
pub const READY_STATE_LOADING: &str = "loading";

// CSS classes
pub const ACTIVE_CLASS: &str = "active"; // open menu/toggle, highlighted nav link, selected filter
pub const VISIBLE_CLASS: &str = "visible"; // back-to-top shown, element revealed
pub const FADE_IN_CLASS: &str = "fade-in";
pub const LOADED_CLASS: &str = "loaded";
pub const FILTER_BUTTON_CLASS: &str = "filter-btn";

// Notification banner
pub const NOTIFICATION_BASE_CSS: &str = "position: fixed; top: 20px; right: 20px; z-index: 10000; \
min-width: 300px; max-width: 400px; padding: 1rem; border-radius: 8px; \
box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15); transform: translateX(100%); \
transition: transform 0.3s ease;";
pub const NOTIFICATION_CONTENT_CSS: &str = "display: flex; align-items: center; gap: 10px;";
pub const NOTIFICATION_CLOSE_CSS: &str = "background: none; border: none; cursor: pointer; padding: 0; \
margin-left: auto; color: inherit; opacity: 0.7; transition: opacity 0.2s ease;";
pub const SLIDE_IN: &str = "translateX(0)";
pub const SLIDE_OUT: &str = "translateX(100%)";
pub const CLOSE_OPACITY_IDLE: &str = "0.7";
pub const CLOSE_OPACITY_HOVER: &str = "1";
pub const NOTIFICATION_CONTENT_CLASS: &str = "notification-content";
pub const NOTIFICATION_CLOSE_CLASS: &str = "notification-close";
pub const CLOSE_ICON: &str = "times";

// Particle canvas overlay
pub const PARTICLE_CANVAS_CSS: &str = "position: absolute; top: 0; left: 0; width: 100%; height: 100%; \
pointer-events: none; z-index: 0;";

// Skip link
pub const SKIP_LINK_TEXT: &str = "Skip to main content";
pub const SKIP_LINK_CSS: &str = "position: absolute; top: -40px; left: 6px; background: #667eea; \
color: white; padding: 8px; text-decoration: none; border-radius: 4px; z-index: 10001; \
transition: top 0.3s ease;";
pub const SKIP_LINK_TOP_FOCUSED: &str = "6px";
pub const SKIP_LINK_TOP_HIDDEN: &str = "-40px";

// Font Awesome class list for a glyph name
pub fn icon_class(icon: &str) -> String {
    format!("fas fa-{icon}")
}
