use std::{
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    time::Duration,
};

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use shared::protocol::{ConsignmentPayload, LocationsResponse, SubmissionReceipt};
use tracing::{debug, info};

use crate::{generate_consignment_id, LocationProvider, SubmissionSink};

pub const DEFAULT_LOCATIONS: [&str; 8] = [
    "Perth",
    "Sydney",
    "Melbourne",
    "Brisbane",
    "Adelaide",
    "Darwin",
    "Hobart",
    "Canberra",
];

pub const DEFAULT_LOCATIONS_DELAY: Duration = Duration::from_millis(1000);

/// In-process stand-in for the consignment backend.
pub struct MockConsignmentApi {
    locations: Vec<String>,
    locations_delay: Duration,
    fail_locations: bool,
    fail_submissions: AtomicBool,
    submissions: AtomicUsize,
}

impl Default for MockConsignmentApi {
    fn default() -> Self {
        Self {
            locations: DEFAULT_LOCATIONS.iter().map(|loc| loc.to_string()).collect(),
            locations_delay: DEFAULT_LOCATIONS_DELAY,
            fail_locations: false,
            fail_submissions: AtomicBool::new(false),
            submissions: AtomicUsize::new(0),
        }
    }
}

impl MockConsignmentApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_locations_delay(mut self, delay: Duration) -> Self {
        self.locations_delay = delay;
        self
    }

    pub fn with_failing_locations(mut self) -> Self {
        self.fail_locations = true;
        self
    }

    pub fn with_failing_submissions(self) -> Self {
        self.fail_submissions.store(true, Ordering::SeqCst);
        self
    }

    pub fn set_fail_submissions(&self, fail: bool) {
        self.fail_submissions.store(fail, Ordering::SeqCst);
    }

    /// Number of payloads that reached the sink, including rejected ones.
    pub fn submission_count(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationProvider for MockConsignmentApi {
    async fn fetch_locations(&self) -> anyhow::Result<LocationsResponse> {
        tokio::time::sleep(self.locations_delay).await;
        if self.fail_locations {
            return Err(anyhow!("location service unavailable"));
        }
        debug!(count = self.locations.len(), "serving mock locations");
        Ok(LocationsResponse {
            locations: self.locations.clone(),
        })
    }
}

#[async_trait]
impl SubmissionSink for MockConsignmentApi {
    async fn submit_consignment(
        &self,
        payload: ConsignmentPayload,
    ) -> anyhow::Result<SubmissionReceipt> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        if self.fail_submissions.load(Ordering::SeqCst) {
            return Err(anyhow!("submission rejected by mock backend"));
        }

        let consignment_id = generate_consignment_id(Utc::now(), &mut rand::thread_rng());
        info!(%consignment_id, source = %payload.source, destination = %payload.destination, "mock consignment accepted");
        Ok(SubmissionReceipt {
            consignment_id,
            consignment: payload,
        })
    }
}
