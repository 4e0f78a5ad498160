//! DOM hooks the page is expected to provide.
//!
//! Controllers never look elements up on their own; the bootstrap resolves
//! these selectors once and hands the elements over.

/// Element ids and CSS selectors for every hook the behavior layer touches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selectors {
    pub navbar_id: &'static str,
    pub nav_toggle_id: &'static str,
    pub nav_menu_id: &'static str,
    pub nav_link: &'static str,
    pub back_to_top_id: &'static str,
    pub contact_form_id: &'static str,
    pub submit_button: &'static str,
    pub section: &'static str,
    /// Elements that fade in once they scroll into view.
    pub reveal: &'static str,
    pub hero: &'static str,
    pub project_filters: &'static str,
    pub project_card: &'static str,
    pub main_content_anchor: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar_id: "navbar",
            nav_toggle_id: "nav-toggle",
            nav_menu_id: "nav-menu",
            nav_link: ".nav-link",
            back_to_top_id: "back-to-top",
            contact_form_id: "contact-form",
            submit_button: "button[type=\"submit\"]",
            section: ".section",
            reveal: ".fade-in, .project-card, .skill-item",
            hero: ".hero",
            project_filters: ".project-filters",
            project_card: ".project-card",
            main_content_anchor: "#main-content",
        }
    }
}
