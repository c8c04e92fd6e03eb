// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

/// URL slug for a city display name: lowercase, spaces to hyphens.
pub fn city_slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

/// Inverse of `city_slug` for lookup purposes: hyphens back to spaces.
///
/// Lossy for city names that legitimately contain hyphens
/// (e.g. "Winston-Salem"); the location store compensates with a
/// case-insensitive contains match.
pub fn slug_to_search_term(slug: &str) -> String {
    slug.trim().replace('-', " ")
}

/// Title-cases a hyphen- or space-delimited name for display. Cosmetic only;
/// never use the result as a lookup key.
pub fn title_case(name: &str) -> String {
    name.split([' ', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_encodes_spaces_and_case() {
        assert_eq!(city_slug("New York"), "new-york");
        assert_eq!(city_slug("Estacada"), "estacada");
        assert_eq!(city_slug(" West Linn "), "west-linn");
    }

    #[test]
    fn decode_round_trips_unhyphenated_names() {
        assert_eq!(slug_to_search_term(&city_slug("New York")), "new york");
        // hyphenated city names are lossy by design
        assert_eq!(
            slug_to_search_term(&city_slug("Winston-Salem")),
            "winston salem"
        );
    }

    #[test]
    fn title_case_handles_both_delimiters() {
        assert_eq!(title_case("new-york"), "New York");
        assert_eq!(title_case("west linn"), "West Linn");
        assert_eq!(title_case("ESTACADA"), "Estacada");
    }

    #[test]
    fn title_case_is_idempotent() {
        let once = title_case("new-york city");
        assert_eq!(title_case(&once), once);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(city_slug(""), "");
        assert_eq!(title_case(""), "");
    }
}
