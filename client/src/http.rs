// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and status handling.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::{ApiConfig, AuthMethod};
use crate::error::ApiError;

/// HTTP client for event backend operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not absolute or the HTTP client
    /// cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        url::Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {:?}: {e}", config.base_url)))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a request with authentication headers.
    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.client.request(method, self.full_url(path));

        match &self.config.auth {
            AuthMethod::Token { token } => {
                req = req.header(reqwest::header::AUTHORIZATION, format!("Token {token}"));
            }
            AuthMethod::Bearer { token } => {
                req = req.bearer_auth(token);
            }
            AuthMethod::None => {}
        }

        req
    }

    /// Executes a request and maps error statuses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns a non-success status.
    pub async fn execute(&self, path: &str, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        tracing::debug!(%status, path, "request failed");
        Err(ApiError::from_status(status, path, &text))
    }

    /// Executes a request and decodes its JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not the expected JSON.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        path: &str,
        req: RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = self.execute(path, req).await?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}
