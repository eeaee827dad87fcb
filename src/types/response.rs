use serde::Deserialize;

use crate::types::profile_data::ProfileData;

// ===== API Response Envelopes =====

/// Generic `{ success, id?, message? }` envelope returned by every write
/// endpoint. `id` is only populated by the create endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    pub id: Option<i64>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ComprehensiveProfileResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<ProfileData>,
}
