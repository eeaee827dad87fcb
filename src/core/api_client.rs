// src/core/api_client.rs
//! JSON-over-HTTPS client for the remote profile API

use crate::auth::AuthTokens;
use crate::config::ApiConfig;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Error bodies vary across endpoints; the first populated field wins.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    detail: Option<String>,
}

pub(crate) fn extract_error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error).or(b.detail))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("API error: {}", status))
}

/// Thin reqwest wrapper carrying the base URL and the injected auth context.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<AuthTokens>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, tokens: Arc<AuthTokens>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, &url);
        if let Some(token) = self.tokens.bearer() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder
    }

    pub async fn get_json<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: serde::de::DeserializeOwned,
    {
        let response = self.request(Method::GET, path).send().await?;
        self.handle(response).await
    }

    pub async fn get_json_with_query<R>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ApiError>
    where
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .request(Method::GET, path)
            .query(query)
            .send()
            .await?;
        self.handle(response).await
    }

    pub async fn post_json<T, R>(&self, path: &str, payload: &T) -> Result<R, ApiError>
    where
        T: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .request(Method::POST, path)
            .json(payload)
            .send()
            .await?;
        self.handle(response).await
    }

    pub async fn put_json<T, R>(&self, path: &str, payload: &T) -> Result<R, ApiError>
    where
        T: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .request(Method::PUT, path)
            .json(payload)
            .send()
            .await?;
        self.handle(response).await
    }

    pub async fn delete_json<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: serde::de::DeserializeOwned,
    {
        let response = self.request(Method::DELETE, path).send().await?;
        self.handle(response).await
    }

    /// Convert the raw response: 2xx parses the body, anything else becomes
    /// an `ApiError::Api` carrying the server's message. A 401 clears the
    /// token context first so a stale token is never re-sent.
    async fn handle<R>(&self, response: reqwest::Response) -> Result<R, ApiError>
    where
        R: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }

        if status == StatusCode::UNAUTHORIZED {
            warn!("Received 401 from API, clearing stored credentials");
            self.tokens.clear();
        }

        Err(ApiError::Api {
            status: status.as_u16(),
            message: extract_error_message(&text, status.as_u16()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_prefers_message_field() {
        let body = r#"{"message": "Profile not found", "detail": "ignored"}"#;
        assert_eq!(extract_error_message(body, 404), "Profile not found");
    }

    #[test]
    fn test_extract_error_message_falls_through_fields() {
        let body = r#"{"error": "bad token"}"#;
        assert_eq!(extract_error_message(body, 401), "bad token");

        let body = r#"{"detail": "Not authorized"}"#;
        assert_eq!(extract_error_message(body, 403), "Not authorized");
    }

    #[test]
    fn test_extract_error_message_generic_fallback() {
        assert_eq!(extract_error_message("", 500), "API error: 500");
        assert_eq!(extract_error_message("<html>boom</html>", 502), "API error: 502");
        assert_eq!(extract_error_message(r#"{"message": ""}"#, 400), "API error: 400");
    }
}
