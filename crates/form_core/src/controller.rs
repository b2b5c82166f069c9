//! Form controller: owns the draft, runs validation on submit and drives the
//! submission state machine against the location and submission collaborators.

use std::{
    sync::{Arc, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use consignment_api::{LocationProvider, SubmissionSink};
use shared::{
    domain::Units,
    protocol::{ConsignmentPayload, SubmissionReceipt},
};
use tokio::sync::{broadcast, oneshot, watch, Mutex};
use tracing::{debug, error, info, warn};

use crate::{
    draft::{ConsignmentDraft, Field},
    error::FormError,
    events::FormEvent,
    settings::FormSettings,
    state::{LocationState, SubmissionState},
    task::ScopedTask,
    validation::{compose_payload, FieldErrors},
    view::{FormView, SUBMIT_FAILURE_MESSAGE},
};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the sink was not called.
    Invalid(FieldErrors),
    /// A submission is already in flight.
    Busy,
    Submitted(SubmissionReceipt),
    Failed { reason: String },
}

#[derive(Default)]
struct FormState {
    draft: ConsignmentDraft,
    locations: LocationState,
    field_errors: FieldErrors,
    submission: SubmissionState,
}

pub struct ConsignmentFormController {
    inner: Arc<Mutex<FormState>>,
    sink: Arc<dyn SubmissionSink>,
    settings: FormSettings,
    events: broadcast::Sender<FormEvent>,
    locations_settled: watch::Receiver<bool>,
    _location_fetch: ScopedTask,
    // The sink call runs here so that dropping a `submit` future cannot strand
    // the form in `Submitting`.
    in_flight: std::sync::Mutex<Option<ScopedTask>>,
    success_timer: Arc<std::sync::Mutex<Option<ScopedTask>>>,
}

impl ConsignmentFormController {
    /// Creates the form with a default draft and starts the one-shot location
    /// fetch. Must be called from within a Tokio runtime.
    pub fn mount(
        provider: Arc<dyn LocationProvider>,
        sink: Arc<dyn SubmissionSink>,
        settings: FormSettings,
    ) -> Self {
        let inner = Arc::new(Mutex::new(FormState::default()));
        let (events, _) = broadcast::channel(settings.event_capacity.max(1));
        let (settled_tx, settled_rx) = watch::channel(false);

        let location_fetch = ScopedTask::spawn(fetch_locations(
            provider,
            Arc::downgrade(&inner),
            events.clone(),
            settled_tx,
        ));
        debug!("consignment form mounted");

        Self {
            inner,
            sink,
            settings,
            events,
            locations_settled: settled_rx,
            _location_fetch: location_fetch,
            in_flight: std::sync::Mutex::new(None),
            success_timer: Arc::new(std::sync::Mutex::new(None)),
        }
    }

    /// Tears the form down, cancelling the location fetch and any pending
    /// success reset.
    pub fn unmount(self) {
        debug!("consignment form unmounted");
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<FormEvent> {
        self.events.subscribe()
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Resolves once the location fetch has either succeeded or failed.
    pub async fn locations_settled(&self) {
        let mut settled = self.locations_settled.clone();
        // An Err means the fetch task is gone; nothing more will arrive.
        let _ = settled.wait_for(|done| *done).await;
    }

    pub async fn set_field(&self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        let mut state = self.inner.lock().await;

        if field.is_location() {
            if state.locations.is_loading() {
                return Err(FormError::LocationsLoading { field });
            }
            if !value.is_empty() && !state.locations.contains(&value) {
                return Err(FormError::UnknownLocation {
                    field,
                    location: value,
                });
            }
        }

        state.draft.set(field, value);
        Ok(())
    }

    /// Changes the unit selector. Entered dimensions are kept as typed.
    pub async fn set_units(&self, units: Units) {
        let mut state = self.inner.lock().await;
        state.draft.units = units;
    }

    pub async fn draft(&self) -> ConsignmentDraft {
        self.inner.lock().await.draft.clone()
    }

    pub async fn state(&self) -> SubmissionState {
        self.inner.lock().await.submission.clone()
    }

    pub async fn locations(&self) -> LocationState {
        self.inner.lock().await.locations.clone()
    }

    pub async fn field_errors(&self) -> FieldErrors {
        self.inner.lock().await.field_errors.clone()
    }

    pub async fn view(&self) -> FormView {
        let state = self.inner.lock().await;
        FormView::render(
            &state.draft,
            &state.locations,
            &state.field_errors,
            &state.submission,
        )
    }

    /// Validates the draft and, when it passes, hands the payload to the sink.
    ///
    /// The sink call runs on a task owned by the controller, so the form still
    /// settles into `Success` or `Error` if this future is dropped early.
    pub async fn submit(&self) -> SubmitOutcome {
        let outcome = {
            let mut state = self.inner.lock().await;
            if state.submission.is_submitting() {
                debug!("submit ignored while a submission is in flight");
                return SubmitOutcome::Busy;
            }

            match compose_payload(&state.draft) {
                Err(errors) => {
                    info!(
                        invalid_fields = errors.len(),
                        state = state.submission.name(),
                        "consignment failed validation"
                    );
                    state.field_errors = errors.clone();
                    let _ = self.events.send(FormEvent::ValidationFailed(errors.clone()));
                    return SubmitOutcome::Invalid(errors);
                }
                Ok(payload) => {
                    lock_slot(&self.success_timer).take();
                    state.field_errors = FieldErrors::default();
                    transition(&self.events, &mut state, SubmissionState::Submitting);

                    let (outcome_tx, outcome_rx) = oneshot::channel();
                    let completion = Completion {
                        inner: Arc::downgrade(&self.inner),
                        events: self.events.clone(),
                        success_timer: self.success_timer.clone(),
                        reset_delay: self.settings.success_reset_delay,
                    };
                    *lock_slot(&self.in_flight) = Some(ScopedTask::spawn(completion.run(
                        self.sink.clone(),
                        payload,
                        outcome_tx,
                    )));
                    outcome_rx
                }
            }
        };

        match outcome.await {
            Ok(outcome) => outcome,
            // Only reachable if the controller is torn down mid-flight.
            Err(_) => SubmitOutcome::Failed {
                reason: "submission task cancelled".to_string(),
            },
        }
    }
}

fn lock_slot(slot: &std::sync::Mutex<Option<ScopedTask>>) -> MutexGuard<'_, Option<ScopedTask>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn transition(events: &broadcast::Sender<FormEvent>, state: &mut FormState, next: SubmissionState) {
    debug!(from = state.submission.name(), to = next.name(), "submission state change");
    state.submission = next.clone();
    let _ = events.send(FormEvent::StateChanged(next));
}

/// Finishes a submission independently of the caller awaiting it.
struct Completion {
    inner: Weak<Mutex<FormState>>,
    events: broadcast::Sender<FormEvent>,
    success_timer: Arc<std::sync::Mutex<Option<ScopedTask>>>,
    reset_delay: Duration,
}

impl Completion {
    async fn run(
        self,
        sink: Arc<dyn SubmissionSink>,
        payload: ConsignmentPayload,
        outcome_tx: oneshot::Sender<SubmitOutcome>,
    ) {
        let result = sink.submit_consignment(payload).await;
        let Some(inner) = self.inner.upgrade() else {
            return;
        };

        let mut state = inner.lock().await;
        let outcome = match result {
            Ok(receipt) => {
                info!(consignment_id = %receipt.consignment_id, "consignment submitted");
                state.draft = ConsignmentDraft::default();
                state.field_errors = FieldErrors::default();
                transition(
                    &self.events,
                    &mut state,
                    SubmissionState::Success {
                        consignment_id: receipt.consignment_id.clone(),
                    },
                );
                let timer = ScopedTask::spawn(reset_after_success(
                    Arc::downgrade(&inner),
                    self.events.clone(),
                    self.reset_delay,
                ));
                *lock_slot(&self.success_timer) = Some(timer);
                SubmitOutcome::Submitted(receipt)
            }
            Err(err) => {
                error!(error = %err, "consignment submission failed");
                transition(
                    &self.events,
                    &mut state,
                    SubmissionState::Error {
                        message: SUBMIT_FAILURE_MESSAGE.to_string(),
                    },
                );
                SubmitOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        };
        drop(state);

        // The caller may have stopped waiting; the state above is what counts.
        let _ = outcome_tx.send(outcome);
    }
}

async fn fetch_locations(
    provider: Arc<dyn LocationProvider>,
    inner: Weak<Mutex<FormState>>,
    events: broadcast::Sender<FormEvent>,
    settled: watch::Sender<bool>,
) {
    let result = provider.fetch_locations().await;
    let Some(inner) = inner.upgrade() else {
        return;
    };

    let mut state = inner.lock().await;
    match result {
        Ok(response) => {
            let count = response.locations.len();
            info!(count, "locations loaded");
            state.locations = LocationState::Ready(response.locations);
            let _ = events.send(FormEvent::LocationsLoaded { count });
        }
        Err(err) => {
            warn!(error = %err, "failed to load locations");
            let reason = err.to_string();
            state.locations = LocationState::Failed {
                reason: reason.clone(),
            };
            let _ = events.send(FormEvent::LocationsFailed { reason });
        }
    }
    drop(state);
    let _ = settled.send(true);
}

async fn reset_after_success(
    inner: Weak<Mutex<FormState>>,
    events: broadcast::Sender<FormEvent>,
    delay: Duration,
) {
    tokio::time::sleep(delay).await;
    let Some(inner) = inner.upgrade() else {
        return;
    };

    let mut state = inner.lock().await;
    if matches!(state.submission, SubmissionState::Success { .. }) {
        debug!("success banner expired");
        state.submission = SubmissionState::Idle;
        let _ = events.send(FormEvent::StateChanged(SubmissionState::Idle));
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
