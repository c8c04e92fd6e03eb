// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! JSON-LD blocks embedded in city pages. Serialized with serde_json so the
//! output is valid JSON regardless of what the location data contains.

use crate::config::{SiteProfile, ValidatedSiteConfig};
use crate::content::FaqEntry;
use crate::locations::LocationRecord;
use crate::public::render::copy_plain;
use serde_json::{Value, json};

pub fn local_business(site: &ValidatedSiteConfig, record: &LocationRecord) -> Value {
    let business_type = match site.profile {
        SiteProfile::Gutter => "RoofingContractor",
        SiteProfile::DryerVent => "HVACBusiness",
    };

    let mut business = json!({
        "@context": "https://schema.org",
        "@type": business_type,
        "name": format!("{} - {}, {}", site.brand, record.city, record.state_code),
        "telephone": site.phone,
        "url": format!(
            "https://{}/{}/{}",
            site.domain,
            record.state_code.to_ascii_lowercase(),
            record.slug()
        ),
        "address": {
            "@type": "PostalAddress",
            "addressLocality": record.city,
            "addressRegion": record.state_code,
            "addressCountry": "US",
        },
        "areaServed": {
            "@type": "City",
            "name": record.city,
        },
    });

    if let (Some(latitude), Some(longitude)) = (record.latitude, record.longitude) {
        business["geo"] = json!({
            "@type": "GeoCoordinates",
            "latitude": latitude,
            "longitude": longitude,
        });
    }
    if !site.email.is_empty() {
        business["email"] = json!(site.email);
    }

    business
}

pub fn faq_page(entries: &[FaqEntry]) -> Value {
    let questions: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": copy_plain(&entry.answer),
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{faq_entries, select_content};
    use crate::util::TestConfigBuilder;
    use crate::util::test_fixtures::sample_records;

    fn test_site(profile: SiteProfile) -> ValidatedSiteConfig {
        TestConfigBuilder::new().with_profile(profile).build().site
    }

    #[test]
    fn local_business_type_follows_profile() {
        let records = sample_records();
        let estacada = &records[0];

        let gutter = test_site(SiteProfile::Gutter);
        let value = local_business(&gutter, estacada);
        assert_eq!(value["@type"], "RoofingContractor");
        assert_eq!(value["address"]["addressLocality"], "Estacada");
        assert_eq!(value["url"], "https://example.com/or/estacada");

        let dryer = TestConfigBuilder::new().build().site;
        let value = local_business(&dryer, estacada);
        assert_eq!(value["@type"], "HVACBusiness");
    }

    #[test]
    fn geo_coordinates_appear_only_when_present() {
        let mut records = sample_records();
        let site = test_site(SiteProfile::Gutter);

        assert!(local_business(&site, &records[0]).get("geo").is_none());

        records[0].latitude = Some(45.289);
        records[0].longitude = Some(-122.333);
        let value = local_business(&site, &records[0]);
        assert_eq!(value["geo"]["latitude"], 45.289);
    }

    #[test]
    fn faq_page_answers_are_plain_text() {
        let bundle = select_content(SiteProfile::DryerVent, "Estacada", "Oregon", Some("OR"));
        let entries = faq_entries(SiteProfile::DryerVent, &bundle.faqs);
        let value = faq_page(&entries);

        let questions = value["mainEntity"].as_array().expect("question array");
        assert_eq!(questions.len(), entries.len());
        for question in questions {
            let text = question["acceptedAnswer"]["text"]
                .as_str()
                .expect("answer text");
            assert!(!text.contains("**"));
        }
    }
}
