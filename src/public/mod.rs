// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;

pub mod error;
pub mod handlers;
pub mod render;
pub mod seo;
pub mod structured_data;

/// Public route table, shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/about", web::get().to(handlers::about))
        .route("/contact", web::get().to(handlers::contact))
        .route("/privacy", web::get().to(handlers::privacy))
        .route("/terms", web::get().to(handlers::terms))
        .route("/robots.txt", web::get().to(seo::robots_txt))
        .route("/sitemap.xml", web::get().to(seo::sitemap_xml))
        .route("/static/site.css", web::get().to(handlers::site_css))
        .route("/{state}", web::get().to(handlers::state_page))
        .route("/{state}/{city}", web::get().to(handlers::city_page))
        .route(
            "/{state}/{city}/{service}",
            web::get().to(handlers::service_page),
        );
}
