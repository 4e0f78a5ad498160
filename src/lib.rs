#![cfg(target_arch = "wasm32")]
use folio_core::constants::{REVEAL_OBSERVER, SECTION_OBSERVER};
use folio_core::{wants_particles, ContactForm, Selectors};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod a11y;
mod constants;
mod dom;
mod events;
mod filters;
mod form;
mod frame;
mod nav;
mod notify;
mod observe;
mod scroll;
mod timing;

thread_local! {
    static PARTICLES: RefCell<Option<frame::AnimationHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    events::page::wire_error_hooks(&window);

    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == constants::READY_STATE_LOADING {
        dom::listen(&document, "DOMContentLoaded", move |_: web::Event| run());
    } else {
        run();
    }
    Ok(())
}

/// Stop the hero particle animation, if it is running.
#[wasm_bindgen]
pub fn stop_particles() {
    PARTICLES.with(|p| {
        if let Some(handle) = p.borrow_mut().take() {
            handle.stop();
        }
    });
}

fn run() {
    if let Err(e) = init() {
        log::error!("[boot] init error: {:?}", e);
    }
}

/// Log a failed subsystem and keep booting the rest of the page.
fn soft(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::warn!("[boot] {} skipped: {:?}", name, e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let sel = Selectors::default();

    let links = dom::query_all(&document, sel.nav_link)?;
    let notifier = notify::NotificationPresenter::new(document.clone());

    soft("navigation", wire_navigation(&document, &sel, links.clone()));
    soft("scroll effects", wire_scroll_effects(&window, &document, &sel));
    soft(
        "section highlighter",
        dom::query_all(&document, sel.section)
            .and_then(|sections| observe::wire_section_highlighter(links, &sections, SECTION_OBSERVER)),
    );
    soft(
        "revealer",
        dom::query_all(&document, sel.reveal)
            .and_then(|elements| observe::wire_revealer(elements, REVEAL_OBSERVER)),
    );
    soft("contact form", wire_contact_form(&document, &sel, notifier));
    soft(
        "skip link",
        a11y::insert_skip_link(&document, sel.main_content_anchor),
    );

    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
    if wants_particles(width) {
        soft("particles", wire_particles(&document, &sel));
    } else {
        log::info!("[particles] skipped; viewport width {}", width);
    }

    if let Ok(Some(container)) = document.query_selector(sel.project_filters) {
        soft(
            "project filters",
            filters::wire_project_filters(&document, &container, sel.project_card),
        );
    }

    if let Some(body) = document.body() {
        dom::set_class(&body, constants::LOADED_CLASS, true);
    }
    log::info!("[boot] portfolio page ready");
    Ok(())
}

fn wire_navigation(
    document: &web::Document,
    sel: &Selectors,
    links: Vec<web::Element>,
) -> anyhow::Result<()> {
    let toggle = dom::by_id(document, sel.nav_toggle_id)?;
    let menu = dom::by_id(document, sel.nav_menu_id)?;
    nav::NavigationController::new(document.clone(), toggle, menu, links).wire();
    Ok(())
}

fn wire_scroll_effects(
    window: &web::Window,
    document: &web::Document,
    sel: &Selectors,
) -> anyhow::Result<()> {
    let navbar = dom::by_id(document, sel.navbar_id)?;
    let back_to_top = dom::by_id(document, sel.back_to_top_id)?;
    Rc::new(scroll::ScrollEffectsController::new(navbar, back_to_top)).wire(window);
    Ok(())
}

fn wire_contact_form(
    document: &web::Document,
    sel: &Selectors,
    notifier: notify::NotificationPresenter,
) -> anyhow::Result<()> {
    let element: web::HtmlFormElement = dom::by_id(document, sel.contact_form_id)?;
    let view = form::DomFormView::new(element.clone(), sel.submit_button)?;
    let controller = ContactForm::new(view, form::SimulatedSubmitter::default(), notifier);
    form::wire_contact_form(Rc::new(controller), &element);
    Ok(())
}

fn wire_particles(document: &web::Document, sel: &Selectors) -> anyhow::Result<()> {
    let Some(hero) = document.query_selector(sel.hero).map_err(dom::js_err)? else {
        return Ok(());
    };
    let hero = hero
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("{} is not an HtmlElement", sel.hero))?;
    let handle = frame::start_particles(document, hero)?;
    PARTICLES.with(|p| *p.borrow_mut() = Some(handle));
    Ok(())
}
