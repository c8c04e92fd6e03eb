// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! First-run setup. Creates the runtime root, seeds a starter config.yaml
//! and locations.yaml when absent, then loads and validates the config.
//! Runs before logging is configured, so it reports to stderr directly.

use crate::config::{Config, ConfigError, ValidatedConfig};
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum BootstrapError {
    Io(io::Error),
    Config(ConfigError),
}

impl std::fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootstrapError::Io(e) => write!(f, "Bootstrap I/O error: {}", e),
            BootstrapError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BootstrapError {}

impl From<io::Error> for BootstrapError {
    fn from(e: io::Error) -> Self {
        BootstrapError::Io(e)
    }
}

impl From<ConfigError> for BootstrapError {
    fn from(e: ConfigError) -> Self {
        BootstrapError::Config(e)
    }
}

#[derive(Debug)]
pub struct BootstrapResult {
    pub root: PathBuf,
    pub validated_config: ValidatedConfig,
    pub created_config: bool,
    pub created_locations: bool,
}

pub fn bootstrap_runtime(root: &Path) -> Result<BootstrapResult, BootstrapError> {
    fs::create_dir_all(root)?;

    let created_config = seed_file(&root.join("config.yaml"), DEFAULT_CONFIG_YAML)?;
    if created_config {
        eprintln!(
            "Created starter config at {} - edit site.brand and site.domain before going live",
            root.join("config.yaml").display()
        );
    }

    let validated_config = Config::load_and_validate(root)?;

    let locations_path = root.join(&validated_config.data.locations_file);
    let created_locations = seed_file(&locations_path, STARTER_LOCATIONS_YAML)?;
    if created_locations {
        eprintln!(
            "Created starter location data at {} - replace with your full city list",
            locations_path.display()
        );
    }

    Ok(BootstrapResult {
        root: root.to_path_buf(),
        validated_config,
        created_config,
        created_locations,
    })
}

/// Writes the file only if it does not already exist. Uses create_new so a
/// concurrent start cannot truncate a file another process just wrote.
fn seed_file(path: &Path, contents: &str) -> Result<bool, io::Error> {
    match fs::OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(contents.as_bytes())?;
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

const DEFAULT_CONFIG_YAML: &str = r#"# GeoPress site configuration
server:
  host: "0.0.0.0"
  port: 7080
  workers: 4

app:
  name: "GeoPress"

site:
  # gutter or dryer_vent
  profile: dryer_vent
  brand: "My Vent Company"
  domain: "example.com"
  phone: "(503) 555-0100"
  email: ""
  # defaults by profile when omitted
  # subdomain_rewrites: true

logging:
  level: "info"

data:
  locations_file: "locations.yaml"
"#;

const STARTER_LOCATIONS_YAML: &str = r#"# Starter location data. Replace with your full city list.
locations:
  - city: Portland
    state_name: Oregon
    state_code: OR
    zip_codes: "97201 97202 97203"
    population: 635067
  - city: Estacada
    state_name: Oregon
    state_code: OR
    zip_codes: "97023"
    population: 5425
  - city: West Linn
    state_name: Oregon
    state_code: OR
    zip_codes: "97068"
    population: 27373
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_seeds_config_and_locations_once() {
        let dir = tempfile::tempdir().expect("temp dir");
        let root = dir.path().join("runtime");

        let first = bootstrap_runtime(&root).expect("first bootstrap");
        assert!(first.created_config);
        assert!(first.created_locations);
        assert_eq!(first.validated_config.app.name, "GeoPress");
        assert!(first.validated_config.site.subdomain_rewrites);

        let second = bootstrap_runtime(&root).expect("second bootstrap");
        assert!(!second.created_config);
        assert!(!second.created_locations);
    }

    #[test]
    fn bootstrap_respects_existing_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let root = dir.path();
        fs::write(
            root.join("config.yaml"),
            "site:\n  profile: gutter\n  brand: \"Gutter Pros\"\n  domain: \"gutterpros.com\"\n  phone: \"(503) 555-0123\"\n",
        )
        .expect("write config");

        let result = bootstrap_runtime(root).expect("bootstrap");
        assert!(!result.created_config);
        assert_eq!(result.validated_config.site.brand, "Gutter Pros");
        assert!(!result.validated_config.site.subdomain_rewrites);
    }

    #[test]
    fn bootstrap_surfaces_invalid_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let root = dir.path();
        fs::write(root.join("config.yaml"), "site:\n  profile: gutter\n").expect("write config");

        let error = bootstrap_runtime(root).expect_err("invalid config");
        assert!(matches!(error, BootstrapError::Config(_)));
    }

    #[test]
    fn starter_locations_parse() {
        let dir = tempfile::tempdir().expect("temp dir");
        let root = dir.path().join("runtime");
        let result = bootstrap_runtime(&root).expect("bootstrap");

        let store = crate::locations::LocationStore::load(
            &root.join(&result.validated_config.data.locations_file),
        )
        .expect("starter data loads");
        assert_eq!(store.len(), 3);
    }
}
