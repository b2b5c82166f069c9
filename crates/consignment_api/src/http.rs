//! HTTP binding of the location and submission collaborators.

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    error::ApiError,
    protocol::{ConsignmentPayload, LocationsResponse, SubmissionReceipt},
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::{LocationProvider, SubmissionSink};

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("invalid server url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Clone)]
pub struct HttpConsignmentApi {
    http: Client,
    base_url: Url,
}

impl HttpConsignmentApi {
    pub fn new(server_url: &str) -> Result<Self, ApiClientError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, ApiClientError> {
        let trimmed = server_url.trim().trim_end_matches('/');
        let base_url = Url::parse(&format!("{trimmed}/")).map_err(|source| {
            ApiClientError::InvalidUrl {
                url: server_url.to_string(),
                source,
            }
        })?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiClientError> {
        self.base_url
            .join(path)
            .map_err(|source| ApiClientError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                source,
            })
    }

    pub async fn get_locations(&self) -> Result<LocationsResponse, ApiClientError> {
        let url = self.endpoint("locations")?;
        debug!(%url, "fetching locations");
        let response = self.http.get(url).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    pub async fn post_consignment(
        &self,
        payload: &ConsignmentPayload,
    ) -> Result<SubmissionReceipt, ApiClientError> {
        let url = self.endpoint("consignments")?;
        debug!(%url, "posting consignment");
        let response = self.http.post(url).json(payload).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&body)
        .map(|err| err.message)
        .unwrap_or(body);
    warn!(status = status.as_u16(), %message, "consignment api request failed");
    Err(ApiClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl LocationProvider for HttpConsignmentApi {
    async fn fetch_locations(&self) -> anyhow::Result<LocationsResponse> {
        Ok(self.get_locations().await?)
    }
}

#[async_trait]
impl SubmissionSink for HttpConsignmentApi {
    async fn submit_consignment(
        &self,
        payload: ConsignmentPayload,
    ) -> anyhow::Result<SubmissionReceipt> {
        Ok(self.post_consignment(&payload).await?)
    }
}

#[cfg(test)]
#[path = "tests/http_tests.rs"]
mod tests;
