// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Per-state meta-title patterns.
//!
//! Patterns contain the literal tokens `{City}`, `{StateCode}` and
//! `{StateName}`. Every token occurrence is substituted; a missing state name
//! substitutes the state code so a literal placeholder never reaches a page.

use crate::config::SiteProfile;

pub fn resolve_city_title(
    profile: SiteProfile,
    state_code: &str,
    city: &str,
    state_name: Option<&str>,
) -> String {
    let code = state_code.trim().to_ascii_uppercase();
    let pattern = lookup(city_patterns(profile), &code).unwrap_or(match profile {
        SiteProfile::Gutter => GUTTER_CITY_DEFAULT,
        SiteProfile::DryerVent => DRYER_CITY_DEFAULT,
    });
    substitute(pattern, Some(city), &code, state_name)
}

pub fn resolve_state_title(
    profile: SiteProfile,
    state_code: &str,
    state_name: Option<&str>,
) -> String {
    let code = state_code.trim().to_ascii_uppercase();
    let pattern = lookup(state_patterns(profile), &code).unwrap_or(match profile {
        SiteProfile::Gutter => GUTTER_STATE_DEFAULT,
        SiteProfile::DryerVent => DRYER_STATE_DEFAULT,
    });
    substitute(pattern, None, &code, state_name)
}

fn substitute(pattern: &str, city: Option<&str>, code: &str, state_name: Option<&str>) -> String {
    let state_display = match state_name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => code.to_string(),
    };
    let mut title = pattern
        .replace("{StateCode}", code)
        .replace("{StateName}", &state_display);
    if let Some(city) = city {
        title = title.replace("{City}", city);
    } else {
        // state-level patterns never carry {City}; substitute the code if one
        // sneaks in rather than leaking a placeholder
        title = title.replace("{City}", code);
    }
    title
}

fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, pattern)| *pattern)
}

fn city_patterns(profile: SiteProfile) -> &'static [(&'static str, &'static str)] {
    match profile {
        SiteProfile::Gutter => GUTTER_CITY_PATTERNS,
        SiteProfile::DryerVent => DRYER_CITY_PATTERNS,
    }
}

fn state_patterns(profile: SiteProfile) -> &'static [(&'static str, &'static str)] {
    match profile {
        SiteProfile::Gutter => GUTTER_STATE_PATTERNS,
        SiteProfile::DryerVent => DRYER_STATE_PATTERNS,
    }
}

// Gutter city-page title shapes. Assignment per state below was tuned by the
// SEO team; treat the mapping as data, not as something to normalize.
const G1: &str = "Gutter Installation {City}, {StateCode} | Seamless Gutters & Guards";
const G2: &str = "Seamless Gutter Installation in {City}, {StateName} | Free Quotes";
const G3: &str = "{City} Gutter Installation & Repair | Trusted {StateName} Pros";
const G4: &str = "Gutter Installation in {City}, {StateCode} | Licensed & Insured";
const G5: &str = "Top-Rated Gutter Installation {City}, {StateName} | Same-Week Service";
const G6: &str = "{City}, {StateCode} Gutter Installation | Lifetime Workmanship Warranty";
const GUTTER_CITY_DEFAULT: &str = "Gutter Installation in {City}, {StateCode} | Seamless Gutters";

const GUTTER_CITY_PATTERNS: &[(&str, &str)] = &[
    ("AL", G2),
    ("AK", G6),
    ("AZ", G1),
    ("AR", G3),
    ("CA", G5),
    ("CO", G4),
    ("CT", G2),
    ("DE", G1),
    ("DC", G4),
    ("FL", G5),
    ("GA", G3),
    ("HI", G1),
    ("ID", G6),
    ("IL", G2),
    ("IN", G4),
    ("IA", G3),
    ("KS", G1),
    ("KY", G2),
    ("LA", G5),
    ("ME", G6),
    ("MD", G4),
    ("MA", G2),
    ("MI", G3),
    ("MN", G6),
    ("MS", G1),
    ("MO", G4),
    ("MT", G6),
    ("NE", G3),
    ("NV", G1),
    ("NH", G2),
    ("NJ", G5),
    ("NM", G1),
    ("NY", G5),
    ("NC", G3),
    ("ND", G6),
    ("OH", G4),
    ("OK", G1),
    ("OR", G2),
    ("PA", G4),
    ("RI", G2),
    ("SC", G3),
    ("SD", G6),
    ("TN", G3),
    ("TX", G5),
    ("UT", G4),
    ("VT", G6),
    ("VA", G3),
    ("WA", G2),
    ("WV", G4),
    ("WI", G6),
    ("WY", G1),
];

const GS1: &str = "{StateName} Gutter Installation | City-by-City Directory";
const GS2: &str = "Seamless Gutter Installation Across {StateName} ({StateCode})";
const GS3: &str = "Gutter Installation in {StateName} | Find Your City";
const GUTTER_STATE_DEFAULT: &str = "{StateName} ({StateCode}) Gutter Installation Directory";

const GUTTER_STATE_PATTERNS: &[(&str, &str)] = &[
    ("AL", GS2),
    ("AK", GS1),
    ("AZ", GS3),
    ("AR", GS1),
    ("CA", GS2),
    ("CO", GS3),
    ("CT", GS1),
    ("DE", GS3),
    ("DC", GS1),
    ("FL", GS2),
    ("GA", GS1),
    ("HI", GS3),
    ("ID", GS2),
    ("IL", GS1),
    ("IN", GS3),
    ("IA", GS2),
    ("KS", GS1),
    ("KY", GS3),
    ("LA", GS2),
    ("ME", GS1),
    ("MD", GS3),
    ("MA", GS2),
    ("MI", GS1),
    ("MN", GS3),
    ("MS", GS2),
    ("MO", GS1),
    ("MT", GS3),
    ("NE", GS2),
    ("NV", GS1),
    ("NH", GS3),
    ("NJ", GS2),
    ("NM", GS1),
    ("NY", GS3),
    ("NC", GS2),
    ("ND", GS1),
    ("OH", GS3),
    ("OK", GS2),
    ("OR", GS1),
    ("PA", GS3),
    ("RI", GS2),
    ("SC", GS1),
    ("SD", GS3),
    ("TN", GS2),
    ("TX", GS1),
    ("UT", GS3),
    ("VT", GS2),
    ("VA", GS1),
    ("WA", GS3),
    ("WV", GS2),
    ("WI", GS1),
    ("WY", GS3),
];

const D1: &str = "Dryer Vent Cleaning {City}, {StateCode} | Certified Local Techs";
const D2: &str = "Dryer Vent Cleaning in {City}, {StateName} | Same-Week Service";
const D3: &str = "{City} Dryer Vent Cleaning & Repair | {StateName} Specialists";
const D4: &str = "Dryer Vent Cleaning in {City}, {StateCode} | Flat-Rate Pricing";
const D5: &str = "Top-Rated Dryer Vent Cleaning {City}, {StateName} | Airflow Verified";
const D6: &str = "{City}, {StateCode} Dryer Vent Cleaning | Fire-Safety Inspection Included";
const DRYER_CITY_DEFAULT: &str = "Dryer Vent Cleaning in {City}, {StateCode} | Book Online";

const DRYER_CITY_PATTERNS: &[(&str, &str)] = &[
    ("AL", D3),
    ("AK", D1),
    ("AZ", D4),
    ("AR", D2),
    ("CA", D5),
    ("CO", D6),
    ("CT", D3),
    ("DE", D4),
    ("DC", D1),
    ("FL", D5),
    ("GA", D2),
    ("HI", D4),
    ("ID", D1),
    ("IL", D3),
    ("IN", D6),
    ("IA", D2),
    ("KS", D4),
    ("KY", D1),
    ("LA", D5),
    ("ME", D6),
    ("MD", D3),
    ("MA", D2),
    ("MI", D1),
    ("MN", D6),
    ("MS", D4),
    ("MO", D3),
    ("MT", D1),
    ("NE", D2),
    ("NV", D4),
    ("NH", D6),
    ("NJ", D5),
    ("NM", D1),
    ("NY", D5),
    ("NC", D3),
    ("ND", D6),
    ("OH", D2),
    ("OK", D4),
    ("OR", D2),
    ("PA", D3),
    ("RI", D1),
    ("SC", D2),
    ("SD", D6),
    ("TN", D3),
    ("TX", D5),
    ("UT", D4),
    ("VT", D6),
    ("VA", D3),
    ("WA", D2),
    ("WV", D4),
    ("WI", D1),
    ("WY", D6),
];

const DS1: &str = "{StateName} Dryer Vent Cleaning | City-by-City Directory";
const DS2: &str = "Dryer Vent Cleaning Across {StateName} ({StateCode})";
const DS3: &str = "Dryer Vent Cleaning in {StateName} | Find Your City";
const DRYER_STATE_DEFAULT: &str = "{StateName} ({StateCode}) Dryer Vent Cleaning Directory";

const DRYER_STATE_PATTERNS: &[(&str, &str)] = &[
    ("AL", DS1),
    ("AK", DS3),
    ("AZ", DS2),
    ("AR", DS3),
    ("CA", DS1),
    ("CO", DS2),
    ("CT", DS3),
    ("DE", DS1),
    ("DC", DS2),
    ("FL", DS1),
    ("GA", DS3),
    ("HI", DS2),
    ("ID", DS1),
    ("IL", DS3),
    ("IN", DS2),
    ("IA", DS1),
    ("KS", DS3),
    ("KY", DS2),
    ("LA", DS1),
    ("ME", DS3),
    ("MD", DS2),
    ("MA", DS1),
    ("MI", DS3),
    ("MN", DS2),
    ("MS", DS1),
    ("MO", DS3),
    ("MT", DS2),
    ("NE", DS1),
    ("NV", DS3),
    ("NH", DS2),
    ("NJ", DS1),
    ("NM", DS3),
    ("NY", DS2),
    ("NC", DS1),
    ("ND", DS3),
    ("OH", DS2),
    ("OK", DS1),
    ("OR", DS3),
    ("PA", DS2),
    ("RI", DS1),
    ("SC", DS3),
    ("SD", DS2),
    ("TN", DS1),
    ("TX", DS3),
    ("UT", DS2),
    ("VT", DS1),
    ("VA", DS3),
    ("WA", DS2),
    ("WV", DS1),
    ("WI", DS3),
    ("WY", DS2),
];
