use crate::constants::SUBMIT_FAILURE_RATE;
use crate::validate::FormFields;
use std::future::Future;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
}

/// Transport for a validated contact-form payload.
///
/// Implementations must always settle: hand the payload back on success or
/// fail with [`SubmitError`], never hang.
pub trait Submitter {
    fn submit(&self, payload: FormFields) -> impl Future<Output = Result<FormFields, SubmitError>>;
}

/// Outcome of the simulated backend for a uniform `roll` in `[0, 1)`.
///
/// Succeeds unless the roll lands in the bottom [`SUBMIT_FAILURE_RATE`] slice.
pub fn simulated_outcome(payload: FormFields, roll: f64) -> Result<FormFields, SubmitError> {
    if roll > SUBMIT_FAILURE_RATE {
        Ok(payload)
    } else {
        Err(SubmitError::Network("simulated transport failure".into()))
    }
}
