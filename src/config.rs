// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Which site this deployment renders. The profile selects the content
/// pools, FAQ copy, service catalog, and meta-title tables.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SiteProfile {
    Gutter,
    DryerVent,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7080
}

fn default_workers() -> u16 {
    4
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_description")]
    pub description: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            description: default_app_description(),
        }
    }
}

fn default_app_name() -> String {
    "GeoPress".to_string()
}

fn default_app_description() -> String {
    "Programmatic local-SEO directory site server".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    pub profile: SiteProfile,
    pub brand: String,
    /// Apex domain the site is served under, e.g. "example.com". Used to
    /// recognize vanity subdomains; never includes a scheme or port.
    pub domain: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    /// When unset, defaults by profile: the dryer-vent site runs city-state
    /// vanity subdomains, the gutter site does not.
    pub subdomain_rewrites: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_locations_file")]
    pub locations_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            locations_file: default_locations_file(),
        }
    }
}

fn default_locations_file() -> String {
    "locations.yaml".to_string()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub app: AppConfig,
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub site: ValidatedSiteConfig,
    pub logging: LoggingConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone)]
pub struct ValidatedSiteConfig {
    pub profile: SiteProfile,
    pub brand: String,
    pub domain: String,
    pub phone: String,
    pub email: String,
    pub subdomain_rewrites: bool,
}

impl Config {
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join("config.yaml");
        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        let config: Config = serde_yaml::from_str(&config_content).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to parse config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Loads and validates configuration at startup. If validation fails, the
    /// application should not start.
    pub fn load_and_validate(root: &Path) -> Result<ValidatedConfig, ConfigError> {
        let config = Self::load(root)?;
        config.validate()
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }
        if self.server.workers == 0 {
            return Err(ConfigError::ValidationError(
                "server.workers must be at least 1".to_string(),
            ));
        }

        Self::validate_logging(&self.logging)?;

        let site = Self::validate_site(self.site)?;

        if self.data.locations_file.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "data.locations_file must not be empty".to_string(),
            ));
        }

        Ok(ValidatedConfig {
            server: self.server,
            app: self.app,
            site,
            logging: self.logging,
            data: self.data,
        })
    }

    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        match logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::ValidationError(format!(
                "logging.level must be one of trace/debug/info/warn/error, got: {}",
                other
            ))),
        }
    }

    fn validate_site(site: SiteConfig) -> Result<ValidatedSiteConfig, ConfigError> {
        let brand = site.brand.trim().to_string();
        if brand.is_empty() {
            return Err(ConfigError::ValidationError(
                "site.brand must not be empty".to_string(),
            ));
        }

        let domain = site.domain.trim().to_ascii_lowercase();
        if domain.is_empty() {
            return Err(ConfigError::ValidationError(
                "site.domain must not be empty".to_string(),
            ));
        }
        if domain.contains('/') || domain.contains(':') {
            return Err(ConfigError::ValidationError(format!(
                "site.domain must be a bare hostname without scheme or port, got: {}",
                domain
            )));
        }

        let phone = site.phone.trim().to_string();
        if phone.is_empty() {
            return Err(ConfigError::ValidationError(
                "site.phone must not be empty".to_string(),
            ));
        }

        let subdomain_rewrites = site
            .subdomain_rewrites
            .unwrap_or(site.profile == SiteProfile::DryerVent);

        Ok(ValidatedSiteConfig {
            profile: site.profile,
            brand,
            domain,
            phone,
            email: site.email.trim().to_string(),
            subdomain_rewrites,
        })
    }
}
