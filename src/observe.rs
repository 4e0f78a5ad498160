use crate::constants::{ACTIVE_CLASS, FADE_IN_CLASS, VISIBLE_CLASS};
use crate::dom;
use folio_core::constants::ObserverOptions;
use folio_core::{RevealTracker, SectionLinks, Sighting};
use std::cell::{Cell, RefCell};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn observer(
    options: ObserverOptions,
    callback: impl FnMut(Vec<web::IntersectionObserverEntry>, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let mut callback = callback;
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array, obs: web::IntersectionObserver| {
        let batch = entries
            .iter()
            .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
            .collect();
        callback(batch, &obs);
    }) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let obs = web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
        .map_err(dom::js_err)?;
    closure.forget();
    Ok(obs)
}

/// Marks the nav link whose section is currently in the viewport band.
pub fn wire_section_highlighter(
    links: Vec<web::Element>,
    sections: &[web::Element],
    options: ObserverOptions,
) -> anyhow::Result<()> {
    let map = SectionLinks::from_hrefs(links.iter().map(|l| l.get_attribute("href")));
    if map.is_empty() {
        log::info!("[sections] no nav links; highlighter not wired");
        return Ok(());
    }
    let active: Cell<Option<usize>> = Cell::new(None);

    let link_count = map.len();
    let obs = observer(options, move |entries, _| {
        let ids: Vec<(String, bool)> = entries
            .iter()
            .map(|e| (e.target().id(), e.is_intersecting()))
            .collect();
        let batch: Vec<Sighting<'_>> = ids
            .iter()
            .map(|(id, hit)| Sighting {
                section_id: id,
                intersecting: *hit,
            })
            .collect();
        let next = map.next_active(active.get(), &batch);
        if batch.iter().any(|s| s.intersecting) {
            for (i, link) in links.iter().enumerate() {
                dom::set_class(link, ACTIVE_CLASS, Some(i) == next);
            }
        }
        if next != active.get() {
            log::debug!("[sections] active link {:?} -> {:?}", active.get(), next);
            active.set(next);
        }
    })?;

    for section in sections {
        obs.observe(section);
    }
    log::info!(
        "[sections] observing {} sections for {} links",
        sections.len(),
        link_count
    );
    Ok(())
}

/// Tags every element hidden-but-transitionable, then marks each visible the
/// first time it scrolls into view.
pub fn wire_revealer(elements: Vec<web::Element>, options: ObserverOptions) -> anyhow::Result<()> {
    for el in &elements {
        dom::set_class(el, FADE_IN_CLASS, true);
    }
    let count = elements.len();
    let tracker = RefCell::new(RevealTracker::new(count));
    let observed = elements.clone();

    let obs = observer(options, move |entries, obs| {
        let mut tracker = tracker.borrow_mut();
        for entry in &entries {
            let target = entry.target();
            let Some(index) = observed.iter().position(|el| *el == target) else {
                continue;
            };
            if tracker.sighted(index, entry.is_intersecting()) {
                dom::set_class(&target, VISIBLE_CLASS, true);
                obs.unobserve(&target);
            }
        }
        if tracker.remaining() == 0 {
            obs.disconnect();
            log::debug!("[reveal] all elements revealed");
        }
    })?;

    for el in &elements {
        obs.observe(el);
    }
    log::info!("[reveal] observing {} elements", count);
    Ok(())
}
