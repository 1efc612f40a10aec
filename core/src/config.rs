// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use gatepass_client::ApiConfig;

/// The name of the application.
pub const APP_NAME: &str = "gatepass";

/// Configuration for the scan flow.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Event backend to talk to.
    pub server: ApiConfig,

    /// User id sent with check-ins. Looked up from the profile when unset.
    #[serde(default)]
    pub user_id: Option<u64>,
}

impl Config {
    /// Creates a configuration for the given server.
    pub fn new(server: ApiConfig) -> Self {
        Self {
            server,
            user_id: None,
        }
    }

    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        let base_url = self.server.base_url.trim();
        let url = url::Url::parse(base_url)
            .map_err(|e| format!("Invalid server base_url {base_url:?}: {e}"))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Invalid server base_url {base_url:?}: expected an http or https URL"
            )
            .into());
        }

        self.server.base_url = base_url.trim_end_matches('/').to_string();
        Ok(())
    }
}
