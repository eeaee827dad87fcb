// src/profile/api.rs
//! Endpoint wrappers for the remote profile API

use crate::core::api_client::{ApiClient, ApiError};
use crate::types::profile_data::{
    CareerProfilePayload, EducationPayload, ExperiencePayload, OpportunitiesInterestPayload,
    PersonalInfoPayload, ProjectPayload, RecommendationPriorityPayload,
};
use crate::types::response::{ApiEnvelope, ComprehensiveProfileResponse};

const COMPREHENSIVE_ENDPOINT: &str = "/api/profile/comprehensive/";
const PERSONAL_ENDPOINT: &str = "/api/profile/personal/";
const CAREER_ENDPOINT: &str = "/api/profile/career/";
const EDUCATION_ENDPOINT: &str = "/api/profile/education/";
const EXPERIENCE_ENDPOINT: &str = "/api/profile/experience/";
const PROJECT_ENDPOINT: &str = "/api/profile/project/";
const OPPORTUNITIES_INTEREST_ENDPOINT: &str = "/api/profile/opportunities-interest/";
const RECOMMENDATION_PRIORITY_ENDPOINT: &str = "/api/profile/recommendation-priority/";

#[derive(Clone)]
pub struct ProfileApi {
    client: ApiClient,
}

impl ProfileApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn fetch_comprehensive(&self) -> Result<ComprehensiveProfileResponse, ApiError> {
        self.client.get_json(COMPREHENSIVE_ENDPOINT).await
    }

    pub async fn upsert_personal(&self, payload: &PersonalInfoPayload) -> Result<(), ApiError> {
        let envelope: ApiEnvelope = self.client.post_json(PERSONAL_ENDPOINT, payload).await?;
        ensure_success(envelope)
    }

    pub async fn upsert_career(&self, payload: &CareerProfilePayload) -> Result<(), ApiError> {
        let envelope: ApiEnvelope = self.client.post_json(CAREER_ENDPOINT, payload).await?;
        ensure_success(envelope)
    }

    // ----- Education -----

    /// Returns the backend-assigned id for the new row.
    pub async fn create_education(&self, payload: &EducationPayload) -> Result<Option<i64>, ApiError> {
        let envelope: ApiEnvelope = self.client.post_json(EDUCATION_ENDPOINT, payload).await?;
        envelope_id(envelope)
    }

    pub async fn update_education(
        &self,
        id: i64,
        payload: &EducationPayload,
    ) -> Result<(), ApiError> {
        let path = format!("{}{}/", EDUCATION_ENDPOINT, id);
        let envelope: ApiEnvelope = self.client.put_json(&path, payload).await?;
        ensure_success(envelope)
    }

    pub async fn delete_education(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("{}{}/", EDUCATION_ENDPOINT, id);
        let envelope: ApiEnvelope = self.client.delete_json(&path).await?;
        ensure_success(envelope)
    }

    // ----- Experience -----

    pub async fn create_experience(
        &self,
        payload: &ExperiencePayload,
    ) -> Result<Option<i64>, ApiError> {
        let envelope: ApiEnvelope = self.client.post_json(EXPERIENCE_ENDPOINT, payload).await?;
        envelope_id(envelope)
    }

    pub async fn update_experience(
        &self,
        id: i64,
        payload: &ExperiencePayload,
    ) -> Result<(), ApiError> {
        let path = format!("{}{}/", EXPERIENCE_ENDPOINT, id);
        let envelope: ApiEnvelope = self.client.put_json(&path, payload).await?;
        ensure_success(envelope)
    }

    pub async fn delete_experience(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("{}{}/", EXPERIENCE_ENDPOINT, id);
        let envelope: ApiEnvelope = self.client.delete_json(&path).await?;
        ensure_success(envelope)
    }

    // ----- Projects -----

    pub async fn create_project(&self, payload: &ProjectPayload) -> Result<Option<i64>, ApiError> {
        let envelope: ApiEnvelope = self.client.post_json(PROJECT_ENDPOINT, payload).await?;
        envelope_id(envelope)
    }

    pub async fn update_project(&self, id: i64, payload: &ProjectPayload) -> Result<(), ApiError> {
        let path = format!("{}{}/", PROJECT_ENDPOINT, id);
        let envelope: ApiEnvelope = self.client.put_json(&path, payload).await?;
        ensure_success(envelope)
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("{}{}/", PROJECT_ENDPOINT, id);
        let envelope: ApiEnvelope = self.client.delete_json(&path).await?;
        ensure_success(envelope)
    }

    // ----- AI preference flags -----

    pub async fn upsert_interests(
        &self,
        payload: &OpportunitiesInterestPayload,
    ) -> Result<(), ApiError> {
        let envelope: ApiEnvelope = self
            .client
            .post_json(OPPORTUNITIES_INTEREST_ENDPOINT, payload)
            .await?;
        ensure_success(envelope)
    }

    pub async fn upsert_priorities(
        &self,
        payload: &RecommendationPriorityPayload,
    ) -> Result<(), ApiError> {
        let envelope: ApiEnvelope = self
            .client
            .post_json(RECOMMENDATION_PRIORITY_ENDPOINT, payload)
            .await?;
        ensure_success(envelope)
    }
}

// A 2xx body can still report `success: false`; surface it as an API error.
fn ensure_success(envelope: ApiEnvelope) -> Result<(), ApiError> {
    if envelope.success {
        Ok(())
    } else {
        Err(ApiError::Api {
            status: 200,
            message: envelope
                .message
                .unwrap_or_else(|| "API reported failure".to_string()),
        })
    }
}

fn envelope_id(envelope: ApiEnvelope) -> Result<Option<i64>, ApiError> {
    let id = envelope.id;
    ensure_success(envelope)?;
    Ok(id)
}
