use std::sync::Arc;

use consignment_api::MockConsignmentApi;

use crate::config::Settings;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) backend: Arc<MockConsignmentApi>,
}

impl AppState {
    pub(crate) fn from_settings(settings: &Settings) -> Self {
        let backend = MockConsignmentApi::new()
            .with_locations(settings.locations.clone())
            .with_locations_delay(settings.locations_delay());
        backend.set_fail_submissions(settings.fail_submissions);
        Self {
            backend: Arc::new(backend),
        }
    }
}
