use crate::constants::ACTIVE_CLASS;
use crate::dom;
use crate::events::keyboard;
use folio_core::{anchor_target, section_scroll_top, MenuEffect, MenuInput, MenuState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mobile menu toggle plus in-page link navigation.
#[derive(Clone)]
pub struct NavigationController {
    pub document: web::Document,
    pub toggle: web::HtmlElement,
    pub menu: web::Element,
    pub links: Vec<web::Element>,
    state: Rc<RefCell<MenuState>>,
}

impl NavigationController {
    pub fn new(
        document: web::Document,
        toggle: web::HtmlElement,
        menu: web::Element,
        links: Vec<web::Element>,
    ) -> Self {
        Self {
            document,
            toggle,
            menu,
            links,
            state: Rc::new(RefCell::new(MenuState::default())),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    /// Feed one input through the menu state and apply the result.
    pub fn handle(&self, input: MenuInput<'_>) -> MenuEffect {
        let effect = self.state.borrow_mut().handle(input);
        match effect {
            MenuEffect::Changed => self.sync_classes(),
            MenuEffect::ActivateToggle => self.toggle.click(),
            MenuEffect::None => {}
        }
        effect
    }

    fn sync_classes(&self) {
        let open = self.is_open();
        dom::set_class(&self.menu, ACTIVE_CLASS, open);
        dom::set_class(&self.toggle, ACTIVE_CLASS, open);
        log::debug!("[nav] menu open={}", open);
    }

    /// Scroll so the section behind `href` sits just below the fixed header.
    /// Returns false when `href` is not an in-page anchor to a known section.
    pub fn scroll_to_anchor(&self, href: &str) -> bool {
        let Some(section) = anchor_target(href)
            .and_then(|id| self.document.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            return false;
        };
        if let Some(window) = web::window() {
            let top = section_scroll_top(section.offset_top() as f64);
            dom::smooth_scroll_to(&window, top);
        }
        true
    }

    pub fn wire(&self) {
        let nav = self.clone();
        dom::listen(&self.toggle, "click", move |_: web::MouseEvent| {
            nav.handle(MenuInput::ToggleClicked);
        });

        for link in &self.links {
            let nav = self.clone();
            let href = link.get_attribute("href").unwrap_or_default();
            dom::listen(link, "click", move |ev: web::MouseEvent| {
                nav.handle(MenuInput::LinkClicked);
                if anchor_target(&href).is_some() {
                    ev.prevent_default();
                    if !nav.scroll_to_anchor(&href) {
                        log::warn!("[nav] no section for {}", href);
                    }
                }
            });
        }

        keyboard::wire_menu_keys(self);
    }
}
