// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

/// Bucketing hash for content variant selection.
///
/// Every city keeps the same hash across releases and across deployments, so
/// a given city always renders the same copy. The accumulator is a 31-times
/// rolling sum over UTF-16 code units, truncated to 32 bits at every step.
/// Collisions between distinct cities are fine; this only picks pool indexes.
pub fn seo_hash(input: &str) -> u32 {
    let mut acc: i32 = 0;
    for unit in input.encode_utf16() {
        acc = acc.wrapping_mul(31).wrapping_add(unit as i32);
    }
    acc.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(seo_hash(""), 0);
    }

    #[test]
    fn single_character_is_its_code_unit() {
        assert_eq!(seo_hash("A"), 65);
        assert_eq!(seo_hash("a"), 97);
    }

    #[test]
    fn known_values_stay_stable() {
        // Pinned so a refactor cannot silently reshuffle every city's copy.
        assert_eq!(seo_hash("ab"), 97 * 31 + 98);
        assert_eq!(seo_hash("ba"), 98 * 31 + 97);
    }

    #[test]
    fn long_inputs_never_go_negative() {
        let long = "EstacadaOregon".repeat(200);
        // unsigned_abs means the sign bit can never leak through
        let _ = seo_hash(&long);
        assert!(seo_hash("Mississippi Mississippi Mississippi") < u32::MAX);
    }

    #[test]
    fn deterministic_across_calls() {
        let city = "West LinnOregon";
        assert_eq!(seo_hash(city), seo_hash(city));
    }

    #[test]
    fn non_ascii_uses_utf16_units() {
        // 'é' is U+00E9, a single UTF-16 unit
        assert_eq!(seo_hash("é"), 0x00E9);
    }
}
