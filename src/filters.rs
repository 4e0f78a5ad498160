use crate::constants::{ACTIVE_CLASS, FILTER_BUTTON_CLASS};
use crate::dom;
use folio_core::ProjectFilter;
use std::rc::Rc;
use web_sys as web;

/// Build the filter buttons inside `container` and hide project cards that do
/// not match the selected filter.
pub fn wire_project_filters(
    document: &web::Document,
    container: &web::Element,
    card_selector: &'static str,
) -> anyhow::Result<()> {
    let mut buttons = Vec::with_capacity(ProjectFilter::ALL.len());
    for filter in ProjectFilter::ALL {
        let button = document.create_element("button").map_err(dom::js_err)?;
        button.set_text_content(Some(filter.label()));
        button.set_class_name(FILTER_BUTTON_CLASS);
        dom::set_class(&button, ACTIVE_CLASS, filter == ProjectFilter::default());
        container.append_child(&button).map_err(dom::js_err)?;
        buttons.push((filter, button));
    }

    let buttons = Rc::new(buttons);
    for (filter, button) in buttons.iter() {
        let filter = *filter;
        let all = buttons.clone();
        let doc = document.clone();
        dom::listen(button, "click", move |_: web::MouseEvent| {
            for (f, b) in all.iter() {
                dom::set_class(b, ACTIVE_CLASS, *f == filter);
            }
            apply_filter(&doc, card_selector, filter);
        });
    }
    Ok(())
}

fn apply_filter(document: &web::Document, card_selector: &str, filter: ProjectFilter) {
    log::info!("[filters] filtering projects by: {}", filter.category());
    let cards = match dom::query_all(document, card_selector) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[filters] {:?}", e);
            return;
        }
    };
    for card in cards {
        let show = filter.matches(card.get_attribute("data-category").as_deref());
        if show {
            _ = card.remove_attribute("hidden");
        } else {
            _ = card.set_attribute("hidden", "");
        }
    }
}
