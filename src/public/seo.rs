// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::app_state::AppState;
use crate::config::{SiteProfile, ValidatedConfig};
use crate::content::service_catalog;
use crate::locations::LocationStore;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use chrono::{DateTime, Utc};
use std::fmt::Write;
use std::time::SystemTime;

pub async fn robots_txt(req: HttpRequest) -> Result<HttpResponse> {
    let base_url = request_base_url(&req);

    let mut body = String::new();
    body.push_str("User-agent: *\n");
    body.push_str("Disallow: /api/\n");
    body.push_str("Disallow: /static/\n");
    body.push_str("Allow: /\n\n");
    let _ = writeln!(body, "Sitemap: {}/sitemap.xml", base_url);

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body))
}

pub async fn sitemap_xml(
    req: HttpRequest,
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let base_url = request_base_url(&req);
    let lastmod = format_lastmod(SystemTime::now());

    let mut paths = sitemap_paths(config.site.profile, &app_state.locations);
    paths.sort();

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for path in paths {
        let loc = escape_xml(&format!("{}{}", base_url, path));
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", loc);
        let _ = writeln!(xml, "    <lastmod>{}</lastmod>", lastmod);
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");

    Ok(HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(xml))
}

/// Every canonical path the site serves. State and city paths come from the
/// location store; service paths are the catalog crossed with every city.
fn sitemap_paths(profile: SiteProfile, locations: &LocationStore) -> Vec<String> {
    let mut paths: Vec<String> = ["/", "/about", "/contact", "/privacy", "/terms"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    for (code, _) in locations.states() {
        paths.push(format!("/{}", code));
    }

    for record in locations.iter() {
        let code = record.state_code.to_ascii_lowercase();
        let slug = record.slug();
        paths.push(format!("/{}/{}", code, slug));
        for service in service_catalog(profile) {
            paths.push(format!("/{}/{}/{}", code, slug, service.slug));
        }
    }

    paths
}

fn request_base_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn format_lastmod(timestamp: SystemTime) -> String {
    let datetime: DateTime<Utc> = timestamp.into();
    datetime.format("%Y-%m-%d").to_string()
}
