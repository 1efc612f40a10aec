// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use gatepass_core::{APP_NAME, Config as CoreConfig};

const GATEPASS_CONFIG_ENV: &str = "GATEPASS_CONFIG";
const GATEPASS_DEV_ENV: &str = "GATEPASS_DEV";

const GATEPASS_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const GATEPASS_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Locate, read and normalize the configuration.
///
/// The file is taken from `path`, then `GATEPASS_CONFIG`, then the user
/// config directory. A truthy `GATEPASS_DEV` turns the last step off.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(GATEPASS_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({GATEPASS_DEV_ENV} is set): config must be explicitly specified via --config or {GATEPASS_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    tracing::debug!(path = %path.display(), "reading config");
    let mut config = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?
        .core;

    config.normalize()?;
    Ok(config)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(GATEPASS_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if GATEPASS_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if GATEPASS_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            GATEPASS_DEV_ENV,
            val,
            GATEPASS_DEV_VALID_TRUE.join(", "),
            GATEPASS_DEV_VALID_FALSE.join(", ")
        );
        None
    }
}
