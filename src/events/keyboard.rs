use crate::nav::NavigationController;
use folio_core::{MenuEffect, MenuInput};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys that operate a focused button the way a click would.
#[inline]
pub fn activates_control(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Escape anywhere closes the open menu; Enter/Space on the focused toggle
/// clicks it.
pub fn wire_menu_keys(nav: &NavigationController) {
    let doc_nav = nav.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if doc_nav.handle(MenuInput::DocumentKey(&key)) == MenuEffect::Changed {
            log::debug!("[nav] menu closed by {}", key);
        }
    }) as Box<dyn FnMut(_)>);
    _ = nav
        .document
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();

    let toggle_nav = nav.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if activates_control(&key) {
            ev.prevent_default();
        }
        toggle_nav.handle(MenuInput::ToggleKey(&key));
    }) as Box<dyn FnMut(_)>);
    _ = nav
        .toggle
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
