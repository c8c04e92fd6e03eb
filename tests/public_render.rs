// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::{http::StatusCode, test};

macro_rules! get_body {
    ($app:expr, $path:expr) => {{
        let req = test::TestRequest::get().uri($path).to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8_lossy(&body).to_string())
    }};
}

#[actix_web::test]
async fn home_page_lists_states_for_each_profile() {
    let dryer = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&dryer)).await;
    let (status, body) = get_body!(app, "/");
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Dryer Vent Cleaning"));
    assert!(body.contains("Oregon"));
    assert!(body.contains("North Carolina"));

    let gutter = common::TestHarness::gutter();
    let app = test::init_service(common::build_test_app(&gutter)).await;
    let (status, body) = get_body!(app, "/");
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Gutter Installation"));
    assert!(body.contains("Test Gutter Pros"));
}

#[actix_web::test]
async fn city_page_is_deterministic_across_requests() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let (status, first) = get_body!(app, "/or/estacada");
    assert_eq!(status, StatusCode::OK);
    let (_, second) = get_body!(app, "/or/estacada");
    assert_eq!(first, second);

    assert!(first.contains("Estacada"));
    assert!(first.contains("application/ld+json"));
    assert!(first.contains("97023"));
}

#[actix_web::test]
async fn neighboring_cities_render_distinct_copy() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let (_, estacada) = get_body!(app, "/or/estacada");
    let (_, portland) = get_body!(app, "/or/portland");
    assert_ne!(estacada, portland);
}

#[actix_web::test]
async fn service_page_renders_and_unknown_service_404s() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let (status, body) = get_body!(app, "/or/estacada/dryer-vent-cleaning");
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Dryer Vent Cleaning"));
    assert!(body.contains("Estacada"));

    let (status, _) = get_body!(app, "/or/estacada/gutter-repair");
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn error_page_carries_the_brand() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let (status, body) = get_body!(app, "/or/no-such-city");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Test Vent Pros"));
}

#[actix_web::test]
async fn stylesheet_is_served_with_css_content_type() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let req = test::TestRequest::get().uri("/static/site.css").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/css"));
}
