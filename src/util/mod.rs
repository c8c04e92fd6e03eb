// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod route_normalize;
pub mod slug;
pub mod test_config;
pub mod test_fixtures;

// Re-export commonly used items for convenience
pub use route_normalize::RouteNormalizeMiddlewareFactory;
pub use slug::{city_slug, slug_to_search_term, title_case};
pub use test_config::TestConfigBuilder;
