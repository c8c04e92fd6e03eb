// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::hash::seo_hash;
use crate::config::SiteProfile;
use serde::Serialize;

/// One narrative paragraph template: (city, state) -> copy.
type SlotTemplate = fn(&str, &str) -> String;

/// The climate slot additionally receives the resolved climate-hazard phrase.
type ClimateTemplate = fn(&str, &str, &str) -> String;

// Slot numbers double as the per-slot hash shift. Using a different shift per
// slot keeps the slots from selecting in lockstep when hashes share low bits.
const SLOT_INTRO: u32 = 0;
const SLOT_SERVICE_DESCRIPTION: u32 = 1;
const SLOT_MATERIALS: u32 = 2;
const SLOT_WHY_CHOOSE: u32 = 3;
const SLOT_TECHNICAL_SPECS: u32 = 4;
const SLOT_CLIMATE: u32 = 5;

struct VariantPools {
    intro: &'static [SlotTemplate],
    service_description: &'static [SlotTemplate],
    materials: &'static [SlotTemplate],
    why_choose: &'static [SlotTemplate],
    technical_specs: &'static [SlotTemplate],
    climate: &'static [ClimateTemplate],
}

/// The selected copy for one city page. Shape is fixed; only the text varies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBundle {
    pub intro: String,
    pub service_description: String,
    pub materials: String,
    pub why_choose: String,
    pub technical_specs: String,
    pub climate: String,
    pub process_intro: String,
    pub faqs: FaqAnswers,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqAnswers {
    pub cost: String,
    pub timeline: String,
    pub warranty: String,
    pub permit: String,
    pub best_guard: String,
    pub emergency: String,
    pub cleaning_frequency: String,
    pub soffit_fascia: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: String,
}

/// Deterministically selects one template per content slot for a city page.
///
/// The selection depends only on the hash of `city + state` and on each
/// pool's length, never on pool contents, timestamps or randomness, so
/// repeated builds render byte-identical pages.
pub fn select_content(
    profile: SiteProfile,
    city: &str,
    state: &str,
    state_code: Option<&str>,
) -> ContentBundle {
    let pools = pools_for(profile);
    let h = seo_hash(&format!("{city}{state}"));

    let intro = pick(pools.intro, h, SLOT_INTRO)(city, state);
    let service_description =
        pick(pools.service_description, h, SLOT_SERVICE_DESCRIPTION)(city, state);
    let materials = pick(pools.materials, h, SLOT_MATERIALS)(city, state);
    let why_choose = pick(pools.why_choose, h, SLOT_WHY_CHOOSE)(city, state);
    let technical_specs = pick(pools.technical_specs, h, SLOT_TECHNICAL_SPECS)(city, state);

    let phrase = climate_phrase(profile, state_code.unwrap_or(""));
    let climate = pick(pools.climate, h, SLOT_CLIMATE)(city, state, phrase);

    ContentBundle {
        intro,
        service_description,
        materials,
        why_choose,
        technical_specs,
        climate,
        process_intro: process_intro(profile).to_string(),
        faqs: faq_answers(profile, city, state),
    }
}

fn pick<T: Copy>(pool: &'static [T], hash: u32, slot: u32) -> T {
    pool[slot_index(hash, slot, pool.len())]
}

pub(crate) fn slot_index(hash: u32, slot: u32, pool_len: usize) -> usize {
    (hash >> slot) as usize % pool_len
}

fn pools_for(profile: SiteProfile) -> &'static VariantPools {
    match profile {
        SiteProfile::Gutter => &GUTTER_POOLS,
        SiteProfile::DryerVent => &DRYER_POOLS,
    }
}

/// Climate-hazard phrase for a state, used by the climate slot templates.
/// Unknown codes fall back to a generic per-profile phrase.
pub fn climate_phrase(profile: SiteProfile, state_code: &str) -> &'static str {
    let code = state_code.trim().to_ascii_uppercase();
    CLIMATE_PHRASES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, phrase)| *phrase)
        .unwrap_or(match profile {
            SiteProfile::Gutter => "seasonal weather changes",
            SiteProfile::DryerVent => "seasonal temperature and humidity changes",
        })
}

const CLIMATE_PHRASES: &[(&str, &str)] = &[
    ("AK", "ice dams and heavy snow loads"),
    ("AZ", "monsoon downpours and intense desert sun"),
    ("CA", "atmospheric rivers and wildfire debris"),
    ("CO", "spring hail and rapid freeze-thaw cycles"),
    ("CT", "nor'easters and ice dams"),
    ("FL", "hurricane-driven rain and constant humidity"),
    ("GA", "heavy thunderstorms and pine needle buildup"),
    ("IA", "derechos and freezing winter rain"),
    ("ID", "heavy mountain snowmelt"),
    ("IL", "lake-effect storms and deep winter freezes"),
    ("KS", "large hail and high plains winds"),
    ("LA", "tropical downpours and year-round humidity"),
    ("MA", "nor'easters and ice dams"),
    ("ME", "ice dams and heavy snow loads"),
    ("MI", "lake-effect snow and freeze-thaw cycles"),
    ("MN", "deep freezes and heavy spring melt"),
    ("MO", "severe thunderstorms and sudden cold snaps"),
    ("MT", "heavy snow loads and chinook wind swings"),
    ("NH", "ice dams and heavy snow loads"),
    ("NY", "lake-effect snow and ice dams"),
    ("OH", "freezing rain and saturated spring soil"),
    ("OK", "wind-driven hail and tornado-season downpours"),
    ("OR", "months of steady rain and moss growth"),
    ("PA", "freeze-thaw cycles and heavy leaf fall"),
    ("TX", "flash flooding and baking summer heat"),
    ("VT", "ice dams and heavy snow loads"),
    ("WA", "persistent rain and evergreen needle buildup"),
    ("WI", "deep freezes and lake-effect snow"),
];

fn process_intro(profile: SiteProfile) -> &'static str {
    match profile {
        SiteProfile::Gutter => {
            "Every installation follows the same proven process: an on-site \
             measurement, a written fixed-price quote, custom fabrication on \
             the day of install, and a final water test before we leave."
        }
        SiteProfile::DryerVent => {
            "Every visit follows the same checklist: an airflow reading at the \
             machine, a camera inspection of the full duct run, rotary brush \
             cleaning from both ends, and a verified airflow reading afterward."
        }
    }
}

// ---------------------------------------------------------------------------
// Gutter profile pools
// ---------------------------------------------------------------------------
// Pool order is load-bearing: a city's selection is (hash >> slot) % len, so
// reordering or removing entries reshuffles copy across every published page.
// Append new variants at the end only.

static GUTTER_POOLS: VariantPools = VariantPools {
    intro: &[
        gutter_intro_homeowners,
        gutter_intro_protect,
        gutter_intro_local,
        gutter_intro_rainfall,
        gutter_intro_estimate,
    ],
    service_description: &[
        gutter_service_seamless,
        gutter_service_full,
        gutter_service_custom,
        gutter_service_same_week,
    ],
    materials: &[
        gutter_materials_aluminum,
        gutter_materials_choices,
        gutter_materials_gauge,
        gutter_materials_color,
    ],
    why_choose: &[
        gutter_why_local,
        gutter_why_warranty,
        gutter_why_crew,
        gutter_why_cleanup,
    ],
    technical_specs: &[
        gutter_specs_sizing,
        gutter_specs_pitch,
        gutter_specs_hangers,
    ],
    climate: &[
        gutter_climate_builtfor,
        gutter_climate_yearround,
        gutter_climate_sized,
    ],
};

fn gutter_intro_homeowners(city: &str, state: &str) -> String {
    format!(
        "Homeowners across {city}, {state} trust us for seamless gutter \
         installation that protects their roofline, siding, and foundation. \
         Our crews fabricate every run on-site to the exact length of your \
         home, so there are no mid-run seams to fail."
    )
}

fn gutter_intro_protect(city: &str, state: &str) -> String {
    format!(
        "Protect your {city} home with professionally installed seamless \
         gutters. From historic houses to new construction across {state}, we \
         design complete drainage systems that move water away from your \
         foundation where it belongs."
    )
}

fn gutter_intro_local(city: &str, state: &str) -> String {
    format!(
        "Looking for gutter installation in {city}? Our local {state} crews \
         have hung thousands of feet of seamless gutter in your area and know \
         exactly what neighborhood rooflines demand."
    )
}

fn gutter_intro_rainfall(city: &str, state: &str) -> String {
    format!(
        "When storms roll through {city}, {state}, undersized or sagging \
         gutters put your foundation at risk. We install seamless systems \
         sized for real local rainfall, not national averages."
    )
}

fn gutter_intro_estimate(city: &str, state: &str) -> String {
    format!(
        "Get a **free on-site estimate** for seamless gutter installation in \
         {city}. We measure every fascia run, check your downspout drainage, \
         and quote a fixed price good for 30 days anywhere in {state}."
    )
}

fn gutter_service_seamless(city: &str, _state: &str) -> String {
    format!(
        "Our seamless gutters are roll-formed from a single coil of aluminum \
         right in your {city} driveway. One continuous piece per run means no \
         joints to leak, no seams to catch debris, and a cleaner sightline \
         from the street."
    )
}

fn gutter_service_full(city: &str, state: &str) -> String {
    format!(
        "We handle the complete system: gutters, downspouts, outlets, \
         mitered corners, and splash management. Whether your {city} home \
         needs a simple single-story run or a complex multi-gable layout, the \
         same {state}-licensed crew takes it from measurement to water test."
    )
}

fn gutter_service_custom(city: &str, _state: &str) -> String {
    format!(
        "Every home in {city} gets a custom drainage plan. We walk the \
         roofline, map where water actually sheds, and place downspouts where \
         they drain away from the structure instead of wherever the old ones \
         happened to be."
    )
}

fn gutter_service_same_week(city: &str, state: &str) -> String {
    format!(
        "Most {city} installations are completed in a single day, and we can \
         usually schedule within the week. Old gutters are hauled away and \
         recycled at no extra charge, per {state} disposal rules."
    )
}

fn gutter_materials_aluminum(_city: &str, _state: &str) -> String {
    "We install **0.027-gauge and 0.032-gauge aluminum** as standard, with \
     copper and galvanized steel available on request. Aluminum never rusts, \
     weighs little enough for any fascia, and carries a baked-on finish \
     warranted against fading for 20 years."
        .to_string()
}

fn gutter_materials_choices(city: &str, _state: &str) -> String {
    format!(
        "Choose from aluminum, copper, or steel in K-style and half-round \
         profiles. Our {city} estimators bring physical samples so you can \
         see gauge and finish in person before you commit."
    )
}

fn gutter_materials_gauge(_city: &str, state: &str) -> String {
    format!(
        "Heavier-gauge metal matters in {state}: thicker coil resists ladder \
         dents, ice load, and hanger pull-through. We stock heavy 0.032 \
         aluminum for long runs and snow country."
    )
}

fn gutter_materials_color(city: &str, _state: &str) -> String {
    format!(
        "With more than 25 factory colors in stock, your new gutters can \
         match or deliberately accent your {city} home's trim. The finish is \
         baked on at the mill, not sprayed on-site, so it will not peel."
    )
}

fn gutter_why_local(city: &str, state: &str) -> String {
    format!(
        "We are a local {state} company, not a lead broker. The crew that \
         quotes your {city} job is the crew that shows up, and the owner's \
         number is on the invoice."
    )
}

fn gutter_why_warranty(_city: &str, _state: &str) -> String {
    "Workmanship is covered by a **lifetime installation warranty** on top of \
     the manufacturer's finish warranty. If a hanger pulls loose or a miter \
     drips, we come back and fix it at no charge."
        .to_string()
}

fn gutter_why_crew(city: &str, _state: &str) -> String {
    format!(
        "Our installers are employees, background-checked and factory \
         trained — no day-labor subcontracting. That is why {city} homeowners \
         keep referring us to their neighbors."
    )
}

fn gutter_why_cleanup(city: &str, _state: &str) -> String {
    format!(
        "We treat your {city} property like our own: drop cloths under every \
         cut station, magnetic sweepers for stray screws, and a full walk-\
         around with you before the trailer leaves the driveway."
    )
}

fn gutter_specs_sizing(_city: &str, _state: &str) -> String {
    "Standard installs use 5-inch K-style gutter with 2x3-inch downspouts; \
     larger rooflines step up to 6-inch gutter with 3x4-inch downspouts. We \
     size by roof square footage and pitch, placing one downspout per 600 \
     square feet of drainage area."
        .to_string()
}

fn gutter_specs_pitch(_city: &str, _state: &str) -> String {
    "Runs are pitched a quarter inch per ten feet toward each outlet — \
     enough to drain completely, shallow enough to stay invisible from the \
     ground. Long runs get a center high point draining to both ends."
        .to_string()
}

fn gutter_specs_hangers(_city: &str, _state: &str) -> String {
    "Hidden hangers with structural screws go in every 24 inches (every 18 \
     in snow zones), biting into the rafter tails rather than bare fascia \
     board. Spike-and-ferrule fastening is something we remove, not install."
        .to_string()
}

fn gutter_climate_builtfor(city: &str, _state: &str, phrase: &str) -> String {
    format!(
        "Gutters in {city} have to stand up to {phrase}. We spec hanger \
         spacing, gutter gauge, and downspout capacity for those conditions, \
         not for a national average."
    )
}

fn gutter_climate_yearround(city: &str, state: &str, phrase: &str) -> String {
    format!(
        "{state} weather is hard on drainage systems — {phrase} will find \
         every weak seam and loose hanger. Our installs are detailed for what \
         {city} actually gets, season after season."
    )
}

fn gutter_climate_sized(_city: &str, state: &str, phrase: &str) -> String {
    format!(
        "Because {state} homes face {phrase}, we upsize outlets and add \
         downspouts where the math calls for it. Capacity costs a little more \
         once; overflow damage costs every year."
    )
}

// ---------------------------------------------------------------------------
// Dryer vent profile pools
// ---------------------------------------------------------------------------

static DRYER_POOLS: VariantPools = VariantPools {
    intro: &[
        dryer_intro_safety,
        dryer_intro_slow,
        dryer_intro_local,
        dryer_intro_insurance,
        dryer_intro_sameday,
    ],
    service_description: &[
        dryer_service_full,
        dryer_service_camera,
        dryer_service_repair,
        dryer_service_any_run,
    ],
    materials: &[
        dryer_materials_rigid,
        dryer_materials_code,
        dryer_materials_terminations,
        dryer_materials_no_foil,
    ],
    why_choose: &[
        dryer_why_specialists,
        dryer_why_verified,
        dryer_why_flat_rate,
        dryer_why_local,
    ],
    technical_specs: &[
        dryer_specs_airflow,
        dryer_specs_length,
        dryer_specs_slope,
    ],
    climate: &[
        dryer_climate_lint,
        dryer_climate_moisture,
        dryer_climate_terminations,
    ],
};

fn dryer_intro_safety(city: &str, state: &str) -> String {
    format!(
        "Clogged dryer vents are one of the leading causes of house fires in \
         {state}. Our certified technicians serve {city} with full-length \
         duct cleaning, airflow testing, and code-compliant repairs — usually \
         in a single visit."
    )
}

fn dryer_intro_slow(city: &str, _state: &str) -> String {
    format!(
        "If your dryer takes two cycles to finish a load, the problem is \
         almost never the dryer — it is the vent. We restore full airflow for \
         {city} homeowners with a rotary brush cleaning of the entire run, \
         from the transition hose to the exterior hood."
    )
}

fn dryer_intro_local(city: &str, state: &str) -> String {
    format!(
        "Looking for dryer vent cleaning in {city}? We are a local {state} \
         crew, not a national call center, and we have cleaned hundreds of \
         runs in homes exactly like yours."
    )
}

fn dryer_intro_insurance(city: &str, state: &str) -> String {
    format!(
        "Many {state} insurers now ask for proof of dryer vent maintenance. \
         Every {city} cleaning comes with a dated service report and \
         before/after airflow readings you can file away."
    )
}

fn dryer_intro_sameday(city: &str, _state: &str) -> String {
    format!(
        "Book **same-week service** in {city} — most cleanings take under 90 \
         minutes, and you will see the lint we pulled out before we vacuum it \
         up. No upsells, no surprise line items."
    )
}

fn dryer_service_full(city: &str, _state: &str) -> String {
    format!(
        "A full-service visit covers the transition hose, the concealed duct \
         run, and the exterior termination. We brush, vacuum, and then verify \
         with an anemometer — every {city} job ends with a measured airflow \
         number, not a guess."
    )
}

fn dryer_service_camera(city: &str, _state: &str) -> String {
    format!(
        "Long or twisting runs get a camera inspection first. If your {city} \
         home routes the vent through a crawlspace, attic, or roof, we find \
         crushed sections and disconnected joints before we quote any repair."
    )
}

fn dryer_service_repair(city: &str, state: &str) -> String {
    format!(
        "Beyond cleaning, we repair and replace: crushed flex duct swapped \
         for rigid metal, missing joint support added, and terminations \
         brought up to {state} mechanical code. Everything is quoted before \
         work starts at your {city} home."
    )
}

fn dryer_service_any_run(city: &str, _state: &str) -> String {
    format!(
        "Roof terminations, multi-story chases, shared laundry closets — no \
         run in {city} is too awkward. Our brush systems reach 40 feet and \
         turn 90-degree elbows without scratching the duct wall."
    )
}

fn dryer_materials_rigid(_city: &str, _state: &str) -> String {
    "Replacement duct is always **rigid or semi-rigid metal**, never plastic \
     or foil. Smooth metal wall resists lint buildup, survives every \
     cleaning, and is what every major dryer manufacturer requires for \
     warranty coverage."
        .to_string()
}

fn dryer_materials_code(_city: &str, state: &str) -> String {
    format!(
        "All materials meet {state} mechanical code and UL 2158A where a \
         transition duct is needed. Joints are fastened with foil tape rated \
         for duct service — never screws, which snag lint inside the run."
    )
}

fn dryer_materials_terminations(city: &str, _state: &str) -> String {
    format!(
        "Exterior hoods matter as much as the duct. We stock low-resistance \
         terminations with integral pest guards for {city} installs, sized so \
         the damper actually opens at dryer pressure."
    )
}

fn dryer_materials_no_foil(_city: &str, _state: &str) -> String {
    "If we find white vinyl or thin foil duct behind your dryer, we will \
     show you why it fails: the spiral wall traps lint, the plastic sags \
     into moisture pockets, and neither survives a proper brush cleaning. \
     Replacement with semi-rigid aluminum is quick and inexpensive."
        .to_string()
}

fn dryer_why_specialists(city: &str, _state: &str) -> String {
    format!(
        "Dryer vents are all we do — we are not a carpet cleaner with a \
         drill brush in the van. That focus is why property managers across \
         {city} put us on their annual maintenance schedule."
    )
}

fn dryer_why_verified(_city: &str, _state: &str) -> String {
    "Every job is verified with before-and-after airflow measurements, and \
     the numbers go on your receipt. If the after reading is not a clear \
     improvement, you do not pay."
        .to_string()
}

fn dryer_why_flat_rate(city: &str, _state: &str) -> String {
    format!(
        "Pricing is flat-rate by run configuration, quoted on the phone and \
         honored on-site. {city} customers never see a different number after \
         the work is done."
    )
}

fn dryer_why_local(city: &str, state: &str) -> String {
    format!(
        "We live and work in {state}. When you call, you reach a technician \
         who has been inside {city} attics and crawlspaces, not a scheduling \
         script three time zones away."
    )
}

fn dryer_specs_airflow(_city: &str, _state: &str) -> String {
    "A healthy vent moves dryer exhaust at **1,500 feet per minute or \
     better** at the termination. Below that, lint starts settling in the \
     run. We measure at the hood with a calibrated anemometer on arrival and \
     after cleaning."
        .to_string()
}

fn dryer_specs_length(_city: &str, _state: &str) -> String {
    "Mechanical code limits a dryer duct to 35 equivalent feet, with each \
     90-degree elbow counting as five. Longer runs need a booster fan or a \
     reroute — we calculate the equivalent length on every inspection."
        .to_string()
}

fn dryer_specs_slope(_city: &str, _state: &str) -> String {
    "Horizontal runs should fall slightly toward the exterior so condensate \
     drains out rather than pooling where lint can mat. Joints overlap in \
     the direction of airflow, and concealed duct gets support every four \
     feet."
        .to_string()
}

fn dryer_climate_lint(city: &str, _state: &str, phrase: &str) -> String {
    format!(
        "Homes in {city} deal with {phrase}, and dryers run harder for it — \
         which means faster lint accumulation in the vent. An annual cleaning \
         keeps exhaust moving at full speed year-round."
    )
}

fn dryer_climate_moisture(_city: &str, state: &str, phrase: &str) -> String {
    format!(
        "{state}'s {phrase} push moisture into duct runs, and damp lint mats \
         hard against the duct wall. We see it constantly in terminations \
         that vent through unconditioned spaces."
    )
}

fn dryer_climate_terminations(city: &str, _state: &str, phrase: &str) -> String {
    format!(
        "Exterior hoods in {city} take a beating from {phrase}. A stuck or \
         broken damper either traps exhaust or invites pests, so we check \
         termination hardware on every visit."
    )
}

// ---------------------------------------------------------------------------
// FAQ answers
// ---------------------------------------------------------------------------
// The answer set is fixed-shape across both profiles; the page layer decides
// which entries a given site displays.

fn faq_answers(profile: SiteProfile, city: &str, state: &str) -> FaqAnswers {
    match profile {
        SiteProfile::Gutter => FaqAnswers {
            cost: format!(
                "Most seamless gutter installations in {city} run between \
                 **$1,200 and $3,800** depending on linear footage, stories, \
                 and material. Every quote is fixed-price after an on-site \
                 measurement."
            ),
            timeline: format!(
                "Nearly all {city} homes are completed in a single day. \
                 Fabrication happens on-site, so there is no waiting on a \
                 factory order."
            ),
            warranty: "Installation workmanship carries a lifetime warranty, \
                       and the aluminum finish carries the manufacturer's \
                       20-year fade warranty."
                .to_string(),
            permit: format!(
                "Gutter replacement rarely requires a permit in {state}; \
                 where a municipality does require one, we pull it and the \
                 cost is included in your quote."
            ),
            best_guard: "Micro-mesh stainless guards are the only style we \
                         recommend: they exclude pine needles and roof grit, \
                         and unlike foam or brush inserts they can be \
                         warrantied to never clog."
                .to_string(),
            emergency: format!(
                "Yes — for storm damage in {city} we offer priority \
                 scheduling and temporary downspout routing so water keeps \
                 moving away from your foundation until the repair."
            ),
            cleaning_frequency: format!(
                "Unguarded gutters in {state} should be cleaned at least \
                 twice a year — after the spring seed drop and again after \
                 leaf fall. With micro-mesh guards, an annual rinse is \
                 usually enough."
            ),
            soffit_fascia: format!(
                "We repair and replace fascia and soffit alongside gutter \
                 work. Rotten fascia cannot hold hangers, so {city} installs \
                 include a board-by-board inspection before anything is hung."
            ),
        },
        SiteProfile::DryerVent => FaqAnswers {
            cost: format!(
                "A standard dryer vent cleaning in {city} is a flat \
                 **$129–$189** depending on run length and termination \
                 access. Camera inspections and repairs are quoted before any \
                 work starts."
            ),
            timeline: "Most cleanings take 60–90 minutes door to door, \
                       including the before-and-after airflow measurements."
                .to_string(),
            warranty: "Cleanings carry a 30-day clog-free guarantee, and \
                       replacement duct work carries a 5-year workmanship \
                       warranty."
                .to_string(),
            permit: format!(
                "Cleaning never needs a permit. Rerouting a duct through new \
                 framing can, depending on your {state} municipality — if so, \
                 we handle the paperwork."
            ),
            best_guard: "A louvered low-resistance hood with an integral \
                         screenless pest guard is the safest termination. \
                         Fine mesh screens are a lint trap and a fire risk; \
                         we remove them when we find them."
                .to_string(),
            emergency: format!(
                "If your dryer shuts off on thermal overload or you smell \
                 hot lint, stop using it and call — we keep same-day slots \
                 open for {city} for exactly this."
            ),
            cleaning_frequency: format!(
                "Once a year for most {city} households; every six months \
                 for heavy use, pet-heavy homes, or runs longer than 25 \
                 feet."
            ),
            soffit_fascia: "Venting into a soffit is a code violation we \
                            correct often: exhaust re-enters the attic and \
                            soaks the insulation. We reroute those runs to a \
                            proper wall or roof termination."
                .to_string(),
        },
    }
}

/// Display order and question wording for the FAQ section of a city page.
/// Both profiles share the core four; the last two are profile-specific.
pub fn faq_entries(profile: SiteProfile, faqs: &FaqAnswers) -> Vec<FaqEntry> {
    let mut entries = vec![
        FaqEntry {
            question: match profile {
                SiteProfile::Gutter => "How much does gutter installation cost?",
                SiteProfile::DryerVent => "How much does dryer vent cleaning cost?",
            },
            answer: faqs.cost.clone(),
        },
        FaqEntry {
            question: "How long does the work take?",
            answer: faqs.timeline.clone(),
        },
        FaqEntry {
            question: "What warranty do you offer?",
            answer: faqs.warranty.clone(),
        },
        FaqEntry {
            question: "Do I need a permit?",
            answer: faqs.permit.clone(),
        },
    ];

    match profile {
        SiteProfile::Gutter => {
            entries.push(FaqEntry {
                question: "What is the best gutter guard?",
                answer: faqs.best_guard.clone(),
            });
            entries.push(FaqEntry {
                question: "Can you repair soffit and fascia too?",
                answer: faqs.soffit_fascia.clone(),
            });
        }
        SiteProfile::DryerVent => {
            entries.push(FaqEntry {
                question: "How often should a dryer vent be cleaned?",
                answer: faqs.cleaning_frequency.clone(),
            });
            entries.push(FaqEntry {
                question: "Do you offer emergency service?",
                answer: faqs.emergency.clone(),
            });
        }
    }

    entries
}
