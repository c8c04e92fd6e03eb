// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::Value;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPageContext {
    pub brand: String,
}

impl ErrorPageContext {
    pub fn new(brand: &str) -> Self {
        Self {
            brand: brand.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        Value::from_serialize(self)
    }
}
