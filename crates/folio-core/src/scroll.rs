use crate::constants::{BACK_TO_TOP_AFTER_PX, NAVBAR_ELEVATE_AFTER_PX, NAV_OFFSET_PX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarStyle {
    /// At the top of the page: no shadow, translucent.
    Flat,
    /// Scrolled: drop shadow, nearly opaque.
    Elevated,
}

impl NavbarStyle {
    pub fn box_shadow(self) -> &'static str {
        match self {
            NavbarStyle::Flat => "none",
            NavbarStyle::Elevated => "0 2px 20px rgba(0, 0, 0, 0.1)",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NavbarStyle::Flat => "rgba(255, 255, 255, 0.95)",
            NavbarStyle::Elevated => "rgba(255, 255, 255, 0.98)",
        }
    }
}

/// What the page chrome should look like at a given scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollEffects {
    pub navbar: NavbarStyle,
    pub back_to_top_visible: bool,
}

pub fn scroll_effects(offset_y: f64) -> ScrollEffects {
    ScrollEffects {
        navbar: if offset_y > NAVBAR_ELEVATE_AFTER_PX {
            NavbarStyle::Elevated
        } else {
            NavbarStyle::Flat
        },
        back_to_top_visible: offset_y > BACK_TO_TOP_AFTER_PX,
    }
}

/// Document offset to scroll to so a section's top clears the fixed header.
pub fn section_scroll_top(section_offset_top: f64) -> f64 {
    (section_offset_top - NAV_OFFSET_PX).max(0.0)
}
