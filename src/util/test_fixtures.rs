// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use crate::locations::{LocationRecord, LocationStore};

pub fn sample_records() -> Vec<LocationRecord> {
    vec![
        record("Estacada", "Oregon", "OR", "97023", Some(5_425)),
        record("Portland", "Oregon", "OR", "97201 97202 97203", Some(635_067)),
        record("West Linn", "Oregon", "OR", "97068", Some(27_373)),
        record("Springfield", "Illinois", "IL", "62701 62702", Some(113_273)),
        record("Winston-Salem", "North Carolina", "NC", "27101", Some(250_320)),
    ]
}

pub fn sample_store() -> LocationStore {
    LocationStore::from_records(sample_records())
}

fn record(
    city: &str,
    state_name: &str,
    state_code: &str,
    zip_codes: &str,
    population: Option<u64>,
) -> LocationRecord {
    LocationRecord {
        city: city.to_string(),
        state_name: state_name.to_string(),
        state_code: state_code.to_string(),
        zip_codes: zip_codes.to_string(),
        population,
        latitude: None,
        longitude: None,
    }
}
