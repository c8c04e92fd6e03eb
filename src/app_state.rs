// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;

use crate::locations::LocationStore;
use crate::public::error::ErrorRenderer;
use crate::templates::{MiniJinjaEngine, TemplateEngine};

pub struct AppState {
    pub templates: Arc<dyn TemplateEngine>,
    pub error_renderer: ErrorRenderer,
    pub locations: LocationStore,
}

impl AppState {
    pub fn new(brand: &str, locations: LocationStore) -> Self {
        Self {
            templates: Arc::new(MiniJinjaEngine::new()),
            error_renderer: ErrorRenderer::new(brand.to_string()),
            locations,
        }
    }
}

#[cfg(test)]
impl AppState {
    pub fn new_for_tests(brand: &str) -> Self {
        Self::new(brand, crate::util::test_fixtures::sample_store())
    }
}
