// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! End-to-end checks that vanity-subdomain requests land on real pages and
//! that case canonicalization redirects before routing.

mod common;

use actix_web::http::{StatusCode, header};
use actix_web::test;
use geopress::config::SiteProfile;
use geopress::util::test_config::TestConfigBuilder;

#[actix_web::test]
async fn state_subdomain_serves_the_city_page() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let req = test::TestRequest::get()
        .uri("/estacada")
        .insert_header((header::HOST, "or.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("Estacada"));
}

#[actix_web::test]
async fn city_state_subdomain_root_serves_the_city_page() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((header::HOST, "west-linn-or.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("West Linn"));
}

#[actix_web::test]
async fn legacy_services_prefix_lands_on_the_service_page() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let req = test::TestRequest::get()
        .uri("/services/dryer-vent-cleaning")
        .insert_header((header::HOST, "estacada-or.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("Dryer Vent Cleaning"));
    assert!(text.contains("Estacada"));
}

#[actix_web::test]
async fn uppercase_paths_redirect_to_canonical_form() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let req = test::TestRequest::get()
        .uri("/OR/Estacada")
        .insert_header((header::HOST, "www.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/or/estacada")
    );
}

#[actix_web::test]
async fn rewrites_stay_off_when_disabled() {
    let harness = common::TestHarness::with_config(
        TestConfigBuilder::new()
            .with_profile(SiteProfile::DryerVent)
            .with_subdomain_rewrites(false)
            .build(),
    );
    let app = test::init_service(common::build_test_app(&harness)).await;

    // /estacada is now a state lookup, which misses
    let req = test::TestRequest::get()
        .uri("/estacada")
        .insert_header((header::HOST, "or.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
