use crate::constants::VISIBLE_CLASS;
use crate::dom;
use crate::timing;
use folio_core::constants::SCROLL_THROTTLE_MS;
use folio_core::{scroll_effects, ScrollEffects};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Navbar elevation and the back-to-top control, both driven by scroll offset.
pub struct ScrollEffectsController {
    navbar: web::HtmlElement,
    back_to_top: web::Element,
    applied: Cell<Option<ScrollEffects>>,
}

impl ScrollEffectsController {
    pub fn new(navbar: web::HtmlElement, back_to_top: web::Element) -> Self {
        Self {
            navbar,
            back_to_top,
            applied: Cell::new(None),
        }
    }

    /// Restyle for `offset_y`; a no-op when nothing would change.
    pub fn apply(&self, offset_y: f64) {
        let effects = scroll_effects(offset_y);
        if self.applied.get() == Some(effects) {
            return;
        }
        dom::set_style(&self.navbar, "box-shadow", effects.navbar.box_shadow());
        dom::set_style(&self.navbar, "background", effects.navbar.background());
        dom::set_class(&self.back_to_top, VISIBLE_CLASS, effects.back_to_top_visible);
        log::debug!(
            "[scroll] navbar={:?} back_to_top={}",
            effects.navbar,
            effects.back_to_top_visible
        );
        self.applied.set(Some(effects));
    }

    pub fn wire(self: Rc<Self>, window: &web::Window) {
        self.apply(dom::scroll_offset(window));

        let this = self.clone();
        let win = window.clone();
        let mut on_scroll = timing::throttle(SCROLL_THROTTLE_MS, move || {
            this.apply(dom::scroll_offset(&win));
        });
        dom::listen(window, "scroll", move |_: web::Event| on_scroll());

        let win = window.clone();
        dom::listen(&self.back_to_top, "click", move |_: web::MouseEvent| {
            dom::smooth_scroll_to(&win, 0.0);
        });
    }
}
