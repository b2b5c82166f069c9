use crate::{
    draft::ConsignmentDraft,
    state::{LocationState, SubmissionState},
    validation::FieldErrors,
};

pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUCCESS_MESSAGE: &str = "Consignment submitted successfully!";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to submit consignment.";
pub const LOCATIONS_FAILURE_MESSAGE: &str = "Failed to load locations.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success { consignment_id: String },
    Error { message: String },
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Banner::Success { .. } => SUCCESS_MESSAGE,
            Banner::Error { message } => message,
        }
    }
}

/// Everything a renderer needs to draw the form at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub draft: ConsignmentDraft,
    pub location_options: Vec<String>,
    pub locations_disabled: bool,
    pub location_notice: Option<&'static str>,
    pub field_errors: FieldErrors,
    pub state: SubmissionState,
    pub submit_disabled: bool,
    pub submit_label: &'static str,
    pub banner: Option<Banner>,
}

impl FormView {
    pub(crate) fn render(
        draft: &ConsignmentDraft,
        locations: &LocationState,
        field_errors: &FieldErrors,
        state: &SubmissionState,
    ) -> Self {
        let banner = match state {
            SubmissionState::Success { consignment_id } => Some(Banner::Success {
                consignment_id: consignment_id.clone(),
            }),
            SubmissionState::Error { message } => Some(Banner::Error {
                message: message.clone(),
            }),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        };

        Self {
            draft: draft.clone(),
            location_options: locations.options().to_vec(),
            locations_disabled: locations.is_loading(),
            location_notice: matches!(locations, LocationState::Failed { .. })
                .then_some(LOCATIONS_FAILURE_MESSAGE),
            field_errors: field_errors.clone(),
            state: state.clone(),
            submit_disabled: state.is_submitting(),
            submit_label: if state.is_submitting() {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            banner,
        }
    }
}
