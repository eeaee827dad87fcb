use anyhow::Result;
use std::sync::Arc;

pub mod auth;
pub mod config;
pub mod core;
pub mod opportunities;
pub mod profile;
pub mod types;

pub use auth::AuthTokens;
pub use config::ApiConfig;
pub use core::api_client::{ApiClient, ApiError};
pub use profile::api::ProfileApi;
pub use profile::reconciler::{ProfileSync, Section};
pub use profile::store::ProfileStore;

/// Convenience constructor: build a client from config + tokens and perform
/// the initial profile load.
pub async fn connect(config: &ApiConfig, tokens: Arc<AuthTokens>) -> Result<ProfileSync> {
    let client = ApiClient::new(config, tokens)?;
    Ok(ProfileSync::connect(ProfileApi::new(client)).await)
}
