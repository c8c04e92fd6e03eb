// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Read-only city/state database, loaded once at startup from
//! `locations.yaml` under the runtime root. The web layer never mutates it;
//! a data refresh is a file swap and a restart.

use crate::content::states;
use crate::util::slug::{city_slug, slug_to_search_term};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum LocationStoreError {
    LoadError(String),
    ParseError(String),
}

impl std::fmt::Display for LocationStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationStoreError::LoadError(msg) => write!(f, "Location data load error: {}", msg),
            LocationStoreError::ParseError(msg) => write!(f, "Location data parse error: {}", msg),
        }
    }
}

impl std::error::Error for LocationStoreError {}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationRecord {
    pub city: String,
    pub state_name: String,
    pub state_code: String,
    /// Space-delimited, as delivered by the upstream data pipeline.
    #[serde(default)]
    pub zip_codes: String,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl LocationRecord {
    pub fn slug(&self) -> String {
        city_slug(&self.city)
    }

    pub fn zip_list(&self) -> Vec<&str> {
        self.zip_codes.split_whitespace().collect()
    }
}

#[derive(Debug, Deserialize)]
struct LocationFile {
    locations: Vec<LocationRecord>,
}

#[derive(Debug)]
pub struct LocationStore {
    records: Vec<LocationRecord>,
    by_state: HashMap<String, Vec<usize>>,
}

impl LocationStore {
    pub fn load(path: &Path) -> Result<Self, LocationStoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            LocationStoreError::LoadError(format!(
                "Failed to read locations file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let file: LocationFile = serde_yaml::from_str(&content).map_err(|e| {
            LocationStoreError::ParseError(format!(
                "Failed to parse locations file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::from_records(file.locations))
    }

    pub fn from_records(records: Vec<LocationRecord>) -> Self {
        let mut by_state: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, record) in records.iter().enumerate() {
            by_state
                .entry(record.state_code.to_ascii_lowercase())
                .or_default()
                .push(index);
        }
        Self { records, by_state }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationRecord> {
        self.records.iter()
    }

    /// States with at least one city, as (lowercase code, display name)
    /// pairs sorted by name. The display name prefers the USPS table over
    /// whatever casing the data file carries.
    pub fn states(&self) -> Vec<(String, String)> {
        let mut states: Vec<(String, String)> = self
            .by_state
            .iter()
            .map(|(code, indexes)| {
                let name = states::state_name(code)
                    .map(str::to_string)
                    .or_else(|| {
                        indexes
                            .first()
                            .and_then(|&index| self.records.get(index))
                            .map(|record| record.state_name.clone())
                    })
                    .unwrap_or_else(|| code.to_ascii_uppercase());
                (code.clone(), name)
            })
            .collect();
        states.sort_by(|left, right| left.1.cmp(&right.1));
        states
    }

    /// All cities in a state, sorted by city name. Unknown codes return an
    /// empty list rather than an error.
    pub fn cities_in_state(&self, state_code: &str) -> Vec<&LocationRecord> {
        let mut cities: Vec<&LocationRecord> = self
            .by_state
            .get(&state_code.to_ascii_lowercase())
            .map(|indexes| {
                indexes
                    .iter()
                    .filter_map(|&index| self.records.get(index))
                    .collect()
            })
            .unwrap_or_default();
        cities.sort_by(|left, right| left.city.cmp(&right.city));
        cities
    }

    /// Resolves a city slug within a state. Exact slug equality wins; failing
    /// that, a case-insensitive contains match on the decoded search term
    /// catches hyphenated city names whose slugs do not round-trip
    /// ("winston-salem" decodes to "winston salem").
    pub fn find_city(&self, state_code: &str, slug: &str) -> Option<&LocationRecord> {
        let indexes = self.by_state.get(&state_code.to_ascii_lowercase())?;
        let slug = slug.to_ascii_lowercase();

        if let Some(record) = indexes
            .iter()
            .filter_map(|&index| self.records.get(index))
            .find(|record| record.slug() == slug)
        {
            return Some(record);
        }

        let term = slug_to_search_term(&slug);
        let normalized = term.to_lowercase();
        indexes
            .iter()
            .filter_map(|&index| self.records.get(index))
            .find(|record| {
                record
                    .city
                    .to_lowercase()
                    .replace('-', " ")
                    .contains(&normalized)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_fixtures::{sample_records, sample_store};
    use std::io::Write;

    #[test]
    fn states_are_sorted_by_display_name() {
        let store = sample_store();
        let states = store.states();
        let names: Vec<&str> = states.iter().map(|(_, name)| name.as_str()).collect();
        assert_eq!(names, vec!["Illinois", "North Carolina", "Oregon"]);
        assert!(states.iter().any(|(code, _)| code == "or"));
    }

    #[test]
    fn cities_are_sorted_and_scoped_to_state() {
        let store = sample_store();
        let cities: Vec<&str> = store
            .cities_in_state("OR")
            .iter()
            .map(|record| record.city.as_str())
            .collect();
        assert_eq!(cities, vec!["Estacada", "Portland", "West Linn"]);
        assert!(store.cities_in_state("zz").is_empty());
    }

    #[test]
    fn find_city_matches_exact_slug_case_insensitively() {
        let store = sample_store();
        let record = store.find_city("or", "west-linn").expect("west linn");
        assert_eq!(record.city, "West Linn");
        let record = store.find_city("OR", "WEST-LINN").expect("west linn");
        assert_eq!(record.city, "West Linn");
    }

    #[test]
    fn find_city_falls_back_to_contains_for_hyphenated_names() {
        let store = sample_store();
        // "Winston-Salem" slugs to "winston-salem", which decodes to
        // "winston salem" and only matches via the contains fallback.
        let record = store.find_city("nc", "winston-salem").expect("match");
        assert_eq!(record.city, "Winston-Salem");
    }

    #[test]
    fn find_city_misses_cleanly() {
        let store = sample_store();
        assert!(store.find_city("or", "nowhere").is_none());
        assert!(store.find_city("zz", "estacada").is_none());
    }

    #[test]
    fn zip_list_splits_on_whitespace() {
        let records = sample_records();
        let portland = records
            .iter()
            .find(|record| record.city == "Portland")
            .expect("portland");
        assert_eq!(portland.zip_list(), vec!["97201", "97202", "97203"]);
    }

    #[test]
    fn load_reads_a_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "locations:\n  - city: Estacada\n    state_name: Oregon\n    state_code: OR\n    zip_codes: \"97023\"\n    population: 5425\n"
        )
        .expect("write yaml");

        let store = LocationStore::load(file.path()).expect("load store");
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.find_city("or", "estacada").expect("estacada").city,
            "Estacada"
        );
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let error = LocationStore::load(Path::new("/nonexistent/locations.yaml"))
            .expect_err("missing file");
        assert!(matches!(error, LocationStoreError::LoadError(_)));

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "locations: 42").expect("write yaml");
        let error = LocationStore::load(file.path()).expect_err("bad yaml");
        assert!(matches!(error, LocationStoreError::ParseError(_)));
    }
}
