//! Contact form flow: validate, lock the submit control, send, report, unlock.

use crate::notification::{NotificationKind, Notifier};
use crate::submit::{SubmitError, Submitter};
use crate::validate::{validate_with, FormFields, ValidationError};
use std::cell::Cell;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";

/// The form as the controller sees it.
pub trait FormView {
    fn read_fields(&self) -> FormFields;
    /// Current submit-control label, restored after the attempt.
    fn submit_label(&self) -> String;
    fn set_submit_label(&self, label: &str);
    /// Swap the submit-control label for a loading indicator.
    fn show_loading(&self);
    fn set_submit_enabled(&self, enabled: bool);
    /// Reset every field to empty.
    fn clear(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(ValidationError),
    Sent,
    Failed(SubmitError),
    /// A submission was already in flight; nothing happened.
    Busy,
}

/// Puts the submit control back the way it was and returns the form to
/// `Idle`, whichever way the attempt ends (including a dropped future).
struct SubmitLock<'a, V: FormView> {
    view: &'a V,
    state: &'a Cell<FormState>,
    label: String,
}

impl<'a, V: FormView> SubmitLock<'a, V> {
    fn engage(view: &'a V, state: &'a Cell<FormState>) -> Self {
        let label = view.submit_label();
        view.show_loading();
        view.set_submit_enabled(false);
        state.set(FormState::Submitting);
        Self { view, state, label }
    }
}

impl<V: FormView> Drop for SubmitLock<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_label(&self.label);
        self.view.set_submit_enabled(true);
        self.state.set(FormState::Idle);
    }
}

pub struct ContactForm<V, S, N> {
    view: V,
    submitter: S,
    notifier: N,
    state: Cell<FormState>,
}

impl<V: FormView, S: Submitter, N: Notifier> ContactForm<V, S, N> {
    pub fn new(view: V, submitter: S, notifier: N) -> Self {
        Self {
            view,
            submitter,
            notifier,
            state: Cell::new(FormState::Idle),
        }
    }

    pub fn state(&self) -> FormState {
        self.state.get()
    }

    /// Run one submit attempt to completion. Always ends back in `Idle`.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.state.get() != FormState::Idle {
            log::warn!("[form] submit ignored; state={:?}", self.state.get());
            return SubmitOutcome::Busy;
        }

        self.state.set(FormState::Validating);
        let payload = self.view.read_fields();
        if let Err(e) = validate_with(&payload, &self.notifier) {
            self.state.set(FormState::Idle);
            return SubmitOutcome::Invalid(e);
        }

        let _lock = SubmitLock::engage(&self.view, &self.state);
        match self.submitter.submit(payload).await {
            Ok(_) => {
                self.state.set(FormState::Success);
                log::info!("[form] message sent");
                self.notifier.notify(SUCCESS_MESSAGE, NotificationKind::Success);
                self.view.clear();
                SubmitOutcome::Sent
            }
            Err(e) => {
                self.state.set(FormState::Failed);
                log::warn!("[form] submission failed: {}", e);
                self.notifier.notify(FAILURE_MESSAGE, NotificationKind::Error);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
