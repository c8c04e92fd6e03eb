// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Static per-profile service catalogs. Fixed at build time; looked up by
//! URL slug, unknown slugs simply return `None` and the router 404s.

use crate::config::SiteProfile;

pub struct ServiceDefinition {
    pub title: &'static str,
    pub slug: &'static str,
    pub icon: &'static str,
    pub blurb: fn(&str, &str) -> String,
    pub features: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

pub fn service_catalog(profile: SiteProfile) -> &'static [ServiceDefinition] {
    match profile {
        SiteProfile::Gutter => GUTTER_SERVICES,
        SiteProfile::DryerVent => DRYER_SERVICES,
    }
}

pub fn find_service(profile: SiteProfile, slug: &str) -> Option<&'static ServiceDefinition> {
    service_catalog(profile)
        .iter()
        .find(|service| service.slug == slug)
}

static GUTTER_SERVICES: &[ServiceDefinition] = &[
    ServiceDefinition {
        title: "Seamless Gutter Installation",
        slug: "seamless-gutter-installation",
        icon: "🏠",
        blurb: |city, state| {
            format!(
                "Custom roll-formed seamless gutters, fabricated on-site in \
                 {city}, {state} and installed in a single day."
            )
        },
        features: &[
            "On-site roll forming to exact run length",
            "5-inch and 6-inch K-style profiles",
            "Hidden hangers every 24 inches",
            "25+ factory finish colors",
        ],
        benefits: &[
            "No mid-run seams to leak",
            "Lifetime workmanship warranty",
            "Completed in one day",
        ],
    },
    ServiceDefinition {
        title: "Gutter Guard Installation",
        slug: "gutter-guard-installation",
        icon: "🛡",
        blurb: |city, _state| {
            format!(
                "Micro-mesh stainless guards fitted to new or existing \
                 gutters anywhere in {city}, ending ladder season for good."
            )
        },
        features: &[
            "Surgical stainless micro-mesh",
            "Fits existing 5-inch and 6-inch gutter",
            "Fastened to the gutter lip, never the shingles",
        ],
        benefits: &[
            "Blocks pine needles and roof grit",
            "No-clog guarantee",
            "Cuts cleaning to an annual rinse",
        ],
    },
    ServiceDefinition {
        title: "Gutter Repair",
        slug: "gutter-repair",
        icon: "🔧",
        blurb: |city, _state| {
            format!(
                "Sagging runs, leaking miters, and detached downspouts \
                 repaired across {city} — usually in one visit."
            )
        },
        features: &[
            "Re-pitching and re-hanging of existing runs",
            "Miter and end-cap resealing",
            "Downspout reattachment and extension",
        ],
        benefits: &[
            "Cheaper than replacement when the metal is sound",
            "Stops fascia rot at the source",
        ],
    },
    ServiceDefinition {
        title: "Gutter Replacement",
        slug: "gutter-replacement",
        icon: "♻",
        blurb: |city, state| {
            format!(
                "Full tear-off and replacement for {city} homes with rusted, \
                 undersized, or spike-and-ferrule systems, disposed of per \
                 {state} recycling rules."
            )
        },
        features: &[
            "Old system haul-away included",
            "Fascia inspection before hanging",
            "Upsized outlets where the roof area demands",
        ],
        benefits: &[
            "One crew, measurement to water test",
            "Fixed-price quote good for 30 days",
        ],
    },
    ServiceDefinition {
        title: "Soffit & Fascia Repair",
        slug: "soffit-fascia-repair",
        icon: "🪚",
        blurb: |city, _state| {
            format!(
                "Rotten fascia and ventilated soffit replaced before new \
                 gutter goes up — the board has to hold the hanger, and in \
                 {city}'s wet seasons it often doesn't."
            )
        },
        features: &[
            "Primed cedar and composite fascia stock",
            "Vented aluminum soffit panels",
            "Color-matched to existing trim",
        ],
        benefits: &[
            "Solid anchoring for gutter hangers",
            "Keeps attic ventilation code-compliant",
        ],
    },
    ServiceDefinition {
        title: "Downspout Installation",
        slug: "downspout-installation",
        icon: "⬇",
        blurb: |city, _state| {
            format!(
                "Added or relocated downspouts with buried extensions that \
                 carry roof water clear of {city} foundations."
            )
        },
        features: &[
            "2x3 and 3x4 profiles",
            "Buried drain line tie-ins",
            "Splash block and rain barrel setups",
        ],
        benefits: &[
            "One downspout per 600 sq ft of roof drainage",
            "Keeps crawlspaces and basements dry",
        ],
    },
];

static DRYER_SERVICES: &[ServiceDefinition] = &[
    ServiceDefinition {
        title: "Dryer Vent Cleaning",
        slug: "dryer-vent-cleaning",
        icon: "🌀",
        blurb: |city, state| {
            format!(
                "Rotary brush cleaning of the full duct run for {city}, \
                 {state} homes, verified with before-and-after airflow \
                 readings."
            )
        },
        features: &[
            "Brush-and-vacuum cleaning from both ends",
            "Reaches 40-foot runs and 90-degree elbows",
            "Anemometer airflow verification",
        ],
        benefits: &[
            "Cuts drying times back to one cycle",
            "Removes the #1 dryer fire fuel source",
            "Dated service report for your insurer",
        ],
    },
    ServiceDefinition {
        title: "Dryer Vent Repair",
        slug: "dryer-vent-repair",
        icon: "🔧",
        blurb: |city, _state| {
            format!(
                "Crushed, disconnected, or sagging duct sections in {city} \
                 replaced with rigid metal and properly supported."
            )
        },
        features: &[
            "Rigid and semi-rigid metal replacement duct",
            "Foil-tape sealed joints, no screws",
            "Support strapping every four feet",
        ],
        benefits: &[
            "Restores code compliance",
            "5-year workmanship warranty",
        ],
    },
    ServiceDefinition {
        title: "Dryer Vent Installation",
        slug: "dryer-vent-installation",
        icon: "🏗",
        blurb: |city, state| {
            format!(
                "New vent runs for remodels and relocated laundry rooms, \
                 routed and terminated to {state} mechanical code for {city} \
                 homes."
            )
        },
        features: &[
            "Equivalent-length calculation before routing",
            "Wall and roof termination options",
            "Booster fan sizing for long runs",
        ],
        benefits: &[
            "Shortest practical run, fewest elbows",
            "Inspection-ready documentation",
        ],
    },
    ServiceDefinition {
        title: "Dryer Vent Rerouting",
        slug: "dryer-vent-rerouting",
        icon: "↪",
        blurb: |city, _state| {
            format!(
                "Vents that dump into attics, crawlspaces, or soffits \
                 rerouted to a proper exterior termination — a violation we \
                 find weekly in {city}."
            )
        },
        features: &[
            "Attic and soffit discharge correction",
            "New exterior wall or roof termination",
            "Insulation moisture assessment",
        ],
        benefits: &[
            "Stops attic condensation and mold",
            "Brings the run inside the 35-foot code limit",
        ],
    },
    ServiceDefinition {
        title: "Bird Nest Removal",
        slug: "bird-nest-removal",
        icon: "🪺",
        blurb: |city, _state| {
            format!(
                "Nests and debris cleared from {city} vent terminations, \
                 followed by a full-run cleaning and a pest-resistant hood."
            )
        },
        features: &[
            "Humane nest clearing",
            "Full duct cleaning after removal",
            "Low-resistance pest-guard hood install",
        ],
        benefits: &[
            "Keeps exhaust moving at full speed",
            "Prevents repeat nesting",
        ],
    },
    ServiceDefinition {
        title: "Annual Maintenance Plan",
        slug: "annual-maintenance",
        icon: "📅",
        blurb: |city, _state| {
            format!(
                "A scheduled yearly cleaning and inspection for {city} \
                 households and property managers, with reminder scheduling \
                 handled by us."
            )
        },
        features: &[
            "Yearly cleaning and airflow test",
            "Termination hardware check",
            "Priority emergency scheduling",
        ],
        benefits: &[
            "Locked-in flat rate",
            "Records your insurer will accept",
        ],
    },
];
