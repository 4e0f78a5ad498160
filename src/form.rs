use crate::constants::LOADING_LABEL_HTML;
use crate::dom;
use crate::notify::NotificationPresenter;
use folio_core::constants::SUBMIT_DELAY_MS;
use folio_core::{simulated_outcome, ContactForm, FormFields, FormView, SubmitError, Submitter};
use gloo_timers::future::TimeoutFuture;
use rand::Rng;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// The contact form's DOM: its fields and the submit button.
pub struct DomFormView {
    form: web::HtmlFormElement,
    submit: web::HtmlButtonElement,
}

impl DomFormView {
    pub fn new(form: web::HtmlFormElement, submit_selector: &str) -> anyhow::Result<Self> {
        let submit = dom::query(&form, submit_selector)?;
        Ok(Self { form, submit })
    }
}

impl FormView for DomFormView {
    fn read_fields(&self) -> FormFields {
        match web::FormData::new_with_form(&self.form) {
            Ok(data) => FormFields::from_lookup(|key| data.get(key).as_string()),
            Err(e) => {
                log::error!("[form] could not read form data: {:?}", e);
                FormFields::default()
            }
        }
    }

    fn submit_label(&self) -> String {
        self.submit.inner_html()
    }

    fn set_submit_label(&self, label: &str) {
        self.submit.set_inner_html(label);
    }

    fn show_loading(&self) {
        self.submit.set_inner_html(LOADING_LABEL_HTML);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit.set_disabled(!enabled);
    }

    fn clear(&self) {
        self.form.reset();
    }
}

/// Stand-in backend: waits, then succeeds nine times out of ten.
pub struct SimulatedSubmitter {
    delay_ms: u32,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self {
            delay_ms: SUBMIT_DELAY_MS,
        }
    }
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, payload: FormFields) -> Result<FormFields, SubmitError> {
        TimeoutFuture::new(self.delay_ms).await;
        let roll: f64 = rand::thread_rng().gen();
        simulated_outcome(payload, roll)
    }
}

pub type DomContactForm = ContactForm<DomFormView, SimulatedSubmitter, NotificationPresenter>;

/// Intercept the form's submit event and run the controller.
pub fn wire_contact_form(form: Rc<DomContactForm>, element: &web::HtmlFormElement) {
    dom::listen(element, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let form = form.clone();
        spawn_local(async move {
            let outcome = form.submit().await;
            log::debug!("[form] attempt finished: {:?}", outcome);
        });
    });
}
