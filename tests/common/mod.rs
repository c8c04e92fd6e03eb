// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, web};
use geopress::app_state::AppState;
use geopress::config::{SiteProfile, ValidatedConfig};
use geopress::public;
use geopress::util::RouteNormalizeMiddlewareFactory;
use geopress::util::test_config::TestConfigBuilder;
use geopress::util::test_fixtures::sample_store;
use std::sync::Arc;

pub struct TestHarness {
    pub config: Arc<ValidatedConfig>,
    pub app_state: Arc<AppState>,
}

impl TestHarness {
    /// Dryer-vent profile with subdomain rewrites on, matching the
    /// TestConfigBuilder defaults.
    pub fn new() -> Self {
        Self::with_config(TestConfigBuilder::new().build())
    }

    pub fn gutter() -> Self {
        Self::with_config(
            TestConfigBuilder::new()
                .with_profile(SiteProfile::Gutter)
                .with_brand("Test Gutter Pros")
                .build(),
        )
    }

    pub fn with_config(config: ValidatedConfig) -> Self {
        let app_state = Arc::new(AppState::new(&config.site.brand, sample_store()));
        Self {
            config: Arc::new(config),
            app_state,
        }
    }
}

pub fn build_test_app(
    harness: &TestHarness,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(web::Data::from(harness.config.clone()))
        .app_data(web::Data::from(harness.app_state.clone()))
        .wrap(NormalizePath::trim())
        .wrap(RouteNormalizeMiddlewareFactory)
        .configure(public::configure)
        .default_service(web::route().to(public::handlers::not_found))
}
