use serde::{Deserialize, Serialize};

use crate::domain::{Dimensions, Units};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

/// Body accepted by the submission endpoint.
///
/// The dimension values are sent twice: once as flat fields and once nested
/// under `dimensions`. Consumers of the endpoint read either shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsignmentPayload {
    pub source: String,
    pub destination: String,
    pub weight: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub units: Units,
    pub dimensions: Dimensions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    #[serde(rename = "consignmentId", alias = "consignment_id")]
    pub consignment_id: String,
    #[serde(flatten)]
    pub consignment: ConsignmentPayload,
}
