//! Consignment entry form: draft state, validation rules, unit handling and
//! the submission state machine driving user feedback.

pub mod controller;
pub mod draft;
pub mod error;
pub mod events;
pub mod settings;
pub mod state;
mod task;
pub mod units;
pub mod validation;
pub mod view;

pub use controller::{ConsignmentFormController, SubmitOutcome};
pub use draft::{ConsignmentDraft, Field};
pub use error::FormError;
pub use events::FormEvent;
pub use settings::FormSettings;
pub use state::{LocationState, SubmissionState};
pub use units::convert_units;
pub use validation::{compose_payload, validate, FieldErrors};
pub use view::{Banner, FormView};
