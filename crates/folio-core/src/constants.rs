/// Behavior tuning constants shared by the web frontend.
///
/// Distances are CSS pixels, delays are milliseconds. Keeping them here lets
/// the pure logic and the DOM wiring agree on one set of numbers.

// Navigation
pub const NAV_OFFSET_PX: f64 = 70.0; // fixed header height cleared when jumping to a section

// Scroll effects
pub const NAVBAR_ELEVATE_AFTER_PX: f64 = 50.0;
pub const BACK_TO_TOP_AFTER_PX: f64 = 300.0;
pub const SCROLL_THROTTLE_MS: u32 = 10;
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

// Intersection observers
pub const SECTION_OBSERVER: ObserverOptions = ObserverOptions {
    root_margin: "-70px 0px -70px 0px",
    threshold: 0.3,
};
pub const REVEAL_OBSERVER: ObserverOptions = ObserverOptions {
    root_margin: "0px 0px -50px 0px",
    threshold: 0.1,
};

// Contact form
pub const SUBMIT_DELAY_MS: u32 = 2000;
pub const SUBMIT_FAILURE_RATE: f64 = 0.1;

// Notifications
pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100; // lets the browser commit the off-screen start position
pub const NOTIFICATION_LIFETIME_MS: u32 = 5000;
pub const NOTIFICATION_EXIT_MS: u32 = 300; // matches the slide-out transition

// Particles
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_MIN_VIEWPORT_WIDTH: f64 = 1024.0;
pub const PARTICLE_MAX_SPEED: f32 = 0.25; // per axis, px per frame
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.1;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.3;
pub const PARTICLE_RGB: [u8; 3] = [17, 126, 35];

/// Margin and visibility threshold handed to an intersection observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}
