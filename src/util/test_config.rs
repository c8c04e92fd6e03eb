// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use crate::config::{
    AppConfig, DataConfig, LoggingConfig, ServerConfig, SiteProfile, ValidatedConfig,
    ValidatedSiteConfig,
};

#[derive(Debug, Clone)]
pub struct TestConfigBuilder {
    config: ValidatedConfig,
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ValidatedConfig {
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 5466,
                    workers: 1,
                },
                app: AppConfig {
                    name: "GeoPress Test".to_string(),
                    description: "Test instance".to_string(),
                },
                site: ValidatedSiteConfig {
                    profile: SiteProfile::DryerVent,
                    brand: "Test Vent Pros".to_string(),
                    domain: "example.com".to_string(),
                    phone: "(503) 555-0100".to_string(),
                    email: "help@example.com".to_string(),
                    subdomain_rewrites: true,
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                },
                data: DataConfig {
                    locations_file: "locations.yaml".to_string(),
                },
            },
        }
    }

    pub fn with_profile(mut self, profile: SiteProfile) -> Self {
        self.config.site.profile = profile;
        self
    }

    pub fn with_domain(mut self, domain: &str) -> Self {
        self.config.site.domain = domain.to_string();
        self
    }

    pub fn with_subdomain_rewrites(mut self, enabled: bool) -> Self {
        self.config.site.subdomain_rewrites = enabled;
        self
    }

    pub fn with_brand(mut self, brand: &str) -> Self {
        self.config.site.brand = brand.to_string();
        self
    }

    pub fn build(self) -> ValidatedConfig {
        self.config
    }
}
