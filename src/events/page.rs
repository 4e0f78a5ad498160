use wasm_bindgen::JsCast;
use web_sys as web;

/// Log uncaught script errors and unhandled promise rejections. Rejections
/// have their default console report suppressed; nothing reaches the user.
pub fn wire_error_hooks(window: &web::Window) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::ErrorEvent| {
        log::error!("[page] script error: {} ({:?})", ev.message(), ev.error());
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
    closure.forget();

    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PromiseRejectionEvent| {
            log::error!("[page] unhandled rejection: {:?}", ev.reason());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("unhandledrejection", closure.as_ref().unchecked_ref());
    closure.forget();
}
