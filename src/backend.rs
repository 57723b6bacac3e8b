//! Shared HTTP plumbing for the commerce and content backends.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::StorefrontConfig;
use crate::error::AppError;

pub const PUBLISHABLE_KEY_HEADER: &str = "x-publishable-api-key";

/// A configured HTTP client bound to the store API base URL.
#[derive(Debug, Clone)]
pub struct BackendHttp {
    client: reqwest::Client,
    base_url: String,
    publishable_key: Option<String>,
}

impl BackendHttp {
    pub fn new(
        base_url: impl Into<String>,
        publishable_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            publishable_key,
        })
    }

    pub fn from_config(config: &StorefrontConfig) -> Result<Self, AppError> {
        Self::new(
            config.backend_url.clone(),
            config.publishable_key.clone(),
            config.backend_timeout,
        )
    }

    pub fn publishable_key(&self) -> Option<&str> {
        self.publishable_key.as_deref()
    }

    /// `GET {base_url}{path}` and decode the JSON body.
    ///
    /// 404 maps to [`AppError::NotFound`]; any other failure (transport,
    /// non-success status, undecodable body) maps to
    /// [`AppError::SourceUnavailable`].
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(&url).query(query);
        if let Some(key) = &self.publishable_key {
            request = request.header(PUBLISHABLE_KEY_HEADER, key);
        }

        tracing::debug!(%url, "Requesting store API");

        let response = request
            .send()
            .await
            .map_err(|e| AppError::SourceUnavailable(format!("GET {path} failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("GET {path} returned 404")));
        }
        if !status.is_success() {
            return Err(AppError::SourceUnavailable(format!(
                "GET {path} returned {status}"
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::SourceUnavailable(format!("GET {path} returned an invalid body: {e}"))
        })
    }
}
