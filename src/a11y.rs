use crate::constants::*;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Insert an off-screen "skip to content" link as the first thing in
/// `<body>`; it slides into view while focused.
pub fn insert_skip_link(document: &web::Document, target: &str) -> anyhow::Result<()> {
    let link: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("anchor element has unexpected type"))?;
    link.set_href(target);
    link.set_text_content(Some(SKIP_LINK_TEXT));
    link.set_class_name("skip-link");
    link.style().set_css_text(SKIP_LINK_CSS);

    let focused = link.clone();
    dom::listen(&link, "focus", move |_: web::Event| {
        dom::set_style(&focused, "top", SKIP_LINK_TOP_FOCUSED);
    });
    let blurred = link.clone();
    dom::listen(&link, "blur", move |_: web::Event| {
        dom::set_style(&blurred, "top", SKIP_LINK_TOP_HIDDEN);
    });

    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    body.insert_before(&link, body.first_child().as_ref())
        .map_err(dom::js_err)?;
    Ok(())
}
