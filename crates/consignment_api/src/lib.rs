//! Collaborator seams for the consignment form: where locations come from and
//! where finished consignments go.

use async_trait::async_trait;
use shared::protocol::{ConsignmentPayload, LocationsResponse, SubmissionReceipt};

pub mod http;
pub mod id;
pub mod mock;

pub use http::{ApiClientError, HttpConsignmentApi};
pub use id::{generate_consignment_id, is_consignment_id};
pub use mock::{MockConsignmentApi, DEFAULT_LOCATIONS};

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn fetch_locations(&self) -> anyhow::Result<LocationsResponse>;
}

#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit_consignment(
        &self,
        payload: ConsignmentPayload,
    ) -> anyhow::Result<SubmissionReceipt>;
}
