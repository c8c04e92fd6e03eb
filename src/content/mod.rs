// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod hash;
pub mod meta;
pub mod services;
pub mod states;
pub mod variants;

pub use hash::seo_hash;
pub use meta::{resolve_city_title, resolve_state_title};
pub use services::{ServiceDefinition, find_service, service_catalog};
pub use states::state_name;
pub use variants::{ContentBundle, FaqAnswers, FaqEntry, climate_phrase, faq_entries, select_content};
