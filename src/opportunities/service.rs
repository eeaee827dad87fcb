// src/opportunities/service.rs
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::core::api_client::{ApiClient, ApiError};
use crate::opportunities::types::{JobListing, ListFilters, Paged, Scholarship};
use crate::types::response::ApiEnvelope;

const JOBS_ENDPOINT: &str = "/api/jobs/";
const SCHOLARSHIPS_ENDPOINT: &str = "/api/scholarships/";
const AI_MATCHED_ENDPOINT: &str = "/api/scholarships/ai-matched/";

const RETRY_ATTEMPTS: u32 = 3;
const RETRY_DELAY_MS: u64 = 1500;

/// Listing and apply/save wrappers for the opportunity endpoints.
///
/// Reads get a fixed-delay retry; writes are attempted once since they are
/// not idempotent.
#[derive(Clone)]
pub struct OpportunityService {
    client: ApiClient,
}

impl OpportunityService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_jobs(&self, filters: &ListFilters) -> Result<Paged<JobListing>, ApiError> {
        self.get_with_retry(JOBS_ENDPOINT, &filters.to_query()).await
    }

    pub async fn list_scholarships(
        &self,
        filters: &ListFilters,
    ) -> Result<Paged<Scholarship>, ApiError> {
        self.get_with_retry(SCHOLARSHIPS_ENDPOINT, &filters.to_query())
            .await
    }

    /// Ranked list computed server-side; consumed as-is, highest match first.
    pub async fn ai_matched_scholarships(&self) -> Result<Vec<Scholarship>, ApiError> {
        self.get_with_retry(AI_MATCHED_ENDPOINT, &[]).await
    }

    pub async fn apply_to_job(&self, job_id: i64) -> Result<(), ApiError> {
        let path = format!("{}{}/apply/", JOBS_ENDPOINT, job_id);
        let envelope: ApiEnvelope = self.client.post_json(&path, &serde_json::json!({})).await?;
        if envelope.success {
            info!("Applied to job {}", job_id);
            Ok(())
        } else {
            Err(ApiError::Api {
                status: 200,
                message: envelope
                    .message
                    .unwrap_or_else(|| "Application was not accepted".to_string()),
            })
        }
    }

    pub async fn save_job(&self, job_id: i64) -> Result<(), ApiError> {
        let path = format!("{}{}/save/", JOBS_ENDPOINT, job_id);
        let _: ApiEnvelope = self.client.post_json(&path, &serde_json::json!({})).await?;
        Ok(())
    }

    pub async fn unsave_job(&self, job_id: i64) -> Result<(), ApiError> {
        let path = format!("{}{}/save/", JOBS_ENDPOINT, job_id);
        let _: ApiEnvelope = self.client.delete_json(&path).await?;
        Ok(())
    }

    /// Fixed-delay retry around an idempotent GET. Client-side errors (4xx)
    /// are returned immediately since retrying them cannot help.
    async fn get_with_retry<R>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.client.get_json_with_query(path, query).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    let retryable = match &e {
                        ApiError::Http(_) => true,
                        ApiError::Api { status, .. } => *status >= 500,
                        ApiError::Parse(_) => false,
                    };
                    if !retryable || attempt >= RETRY_ATTEMPTS {
                        return Err(e);
                    }
                    warn!(
                        "Request to {} failed (attempt {}/{}): {}",
                        path, attempt, RETRY_ATTEMPTS, e
                    );
                    tokio::time::sleep(std::time::Duration::from_millis(RETRY_DELAY_MS)).await;
                }
            }
        }
    }
}
