//! Notifications published by the controller as the form changes.

use crate::{state::SubmissionState, validation::FieldErrors};

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    LocationsLoaded { count: usize },
    LocationsFailed { reason: String },
    ValidationFailed(FieldErrors),
    StateChanged(SubmissionState),
}
