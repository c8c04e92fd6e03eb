// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::app_state::AppState;
use crate::config::{SiteProfile, ValidatedConfig, ValidatedSiteConfig};
use crate::content::{
    faq_entries, find_service, resolve_city_title, resolve_state_title, select_content,
    service_catalog, state_name,
};
use crate::public::error::{serve_404, serve_500};
use crate::public::render::{copy_html, copy_plain};
use crate::public::structured_data;
use crate::templates::render_minijinja_template;
use actix_web::{HttpResponse, Result, web};
use chrono::{Datelike, Utc};
use minijinja::{Value, context};

pub async fn index(
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let site = &config.site;

    let states: Vec<Value> = app_state
        .locations
        .states()
        .into_iter()
        .map(|(code, name)| context! { code => code, name => name })
        .collect();

    let services: Vec<Value> = service_catalog(site.profile)
        .iter()
        .map(|service| context! { title => service.title, icon => service.icon })
        .collect();

    let ctx = context! {
        site => site_context(site),
        page_title => format!("{} | {} Near You", site.brand, service_label(site.profile)),
        meta_description => format!(
            "{} provides professional {} across the country. Find your state and city to get started.",
            site.brand,
            service_label(site.profile).to_lowercase()
        ),
        states => states,
        services => services,
    };

    render_page(&app_state, "public/home.html", ctx)
}

pub async fn state_page(
    path: web::Path<String>,
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let site = &config.site;
    let state_code = path.into_inner().to_lowercase();

    let records = app_state.locations.cities_in_state(&state_code);
    if records.is_empty() {
        return serve_404(
            &app_state.error_renderer,
            Some(app_state.templates.as_ref()),
        );
    }

    let state_display = state_name(&state_code)
        .map(str::to_string)
        .unwrap_or_else(|| records[0].state_name.clone());

    let cities: Vec<Value> = records
        .iter()
        .map(|record| {
            context! {
                name => record.city,
                href => format!("/{}/{}", state_code, record.slug()),
            }
        })
        .collect();

    let ctx = context! {
        site => site_context(site),
        page_title => resolve_state_title(site.profile, &state_code, Some(&state_display)),
        meta_description => format!(
            "Find {} in {} cities. Local crews, upfront answers, fast scheduling.",
            service_label(site.profile).to_lowercase(),
            state_display
        ),
        state_name => state_display,
        cities => cities,
    };

    render_page(&app_state, "public/state.html", ctx)
}

pub async fn city_page(
    path: web::Path<(String, String)>,
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let site = &config.site;
    let (state_code, city_slug) = path.into_inner();
    let state_code = state_code.to_lowercase();

    let Some(record) = app_state.locations.find_city(&state_code, &city_slug) else {
        return serve_404(
            &app_state.error_renderer,
            Some(app_state.templates.as_ref()),
        );
    };

    let bundle = select_content(
        site.profile,
        &record.city,
        &record.state_name,
        Some(&record.state_code),
    );
    let entries = faq_entries(site.profile, &bundle.faqs);

    let faqs: Vec<Value> = entries
        .iter()
        .map(|entry| {
            context! {
                question => entry.question,
                answer_html => copy_html(&entry.answer),
            }
        })
        .collect();

    let services: Vec<Value> = service_catalog(site.profile)
        .iter()
        .map(|service| {
            context! {
                title => service.title,
                icon => service.icon,
                blurb => (service.blurb)(&record.city, &record.state_name),
                href => format!("/{}/{}/{}", state_code, record.slug(), service.slug),
            }
        })
        .collect();

    let jsonld = vec![
        structured_data::local_business(site, record),
        structured_data::faq_page(&entries),
    ];
    let jsonld: Vec<String> = jsonld
        .iter()
        .map(|value| serde_json::to_string(value).unwrap_or_default())
        .collect();

    let ctx = context! {
        site => site_context(site),
        page_title => resolve_city_title(
            site.profile,
            &record.state_code,
            &record.city,
            Some(&record.state_name),
        ),
        meta_description => meta_description(&bundle.intro),
        city => record.city,
        state_code => record.state_code.to_ascii_uppercase(),
        state_name => record.state_name,
        state_slug => state_code,
        intro_html => copy_html(&bundle.intro),
        service_description_html => copy_html(&bundle.service_description),
        materials_html => copy_html(&bundle.materials),
        why_choose_html => copy_html(&bundle.why_choose),
        technical_specs_html => copy_html(&bundle.technical_specs),
        climate_html => copy_html(&bundle.climate),
        process_intro_html => copy_html(&bundle.process_intro),
        services => services,
        faqs => faqs,
        zip_codes => record.zip_list(),
        jsonld => jsonld,
    };

    render_page(&app_state, "public/city.html", ctx)
}

pub async fn service_page(
    path: web::Path<(String, String, String)>,
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let site = &config.site;
    let (state_code, city_slug, service_slug) = path.into_inner();
    let state_code = state_code.to_lowercase();

    let record = app_state.locations.find_city(&state_code, &city_slug);
    let service = find_service(site.profile, &service_slug);
    let (Some(record), Some(service)) = (record, service) else {
        return serve_404(
            &app_state.error_renderer,
            Some(app_state.templates.as_ref()),
        );
    };

    let city_href = format!("/{}/{}", state_code, record.slug());

    let ctx = context! {
        site => site_context(site),
        page_title => format!(
            "{} in {}, {} | {}",
            service.title,
            record.city,
            record.state_code.to_ascii_uppercase(),
            site.brand
        ),
        meta_description => meta_description(&(service.blurb)(&record.city, &record.state_name)),
        service_title => service.title,
        city => record.city,
        state_code => record.state_code.to_ascii_uppercase(),
        city_href => city_href,
        blurb => (service.blurb)(&record.city, &record.state_name),
        features => service.features,
        benefits => service.benefits,
    };

    render_page(&app_state, "public/service.html", ctx)
}

pub async fn about(
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let site = &config.site;
    let body = format!(
        "<p>{brand} is a local-first {label} company. Every job is performed by a \
         licensed, insured crew based in the community it serves.</p>\
         <p>We publish our pricing answers, our materials and our process on every \
         city page, so you know what to expect before you call.</p>\
         <p>Questions? Call <a href=\"tel:{phone}\">{phone}</a>.</p>",
        brand = site.brand,
        label = service_label(site.profile).to_lowercase(),
        phone = site.phone,
    );
    static_page(&config, &app_state, "About Us", body)
}

pub async fn contact(
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let site = &config.site;
    let mut body = format!(
        "<p>Call us at <a href=\"tel:{phone}\">{phone}</a>. Phones are answered \
         seven days a week, 7am to 7pm local time.</p>",
        phone = site.phone,
    );
    if !site.email.is_empty() {
        body.push_str(&format!(
            "<p>Prefer email? Write to <a href=\"mailto:{email}\">{email}</a> and \
             we respond within one business day.</p>",
            email = site.email,
        ));
    }
    static_page(&config, &app_state, "Contact Us", body)
}

pub async fn privacy(
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let site = &config.site;
    let body = format!(
        "<p>{brand} collects only the information you choose to share when you \
         call or email us: your name, contact details and service address.</p>\
         <p>We use that information to schedule and perform work. We do not sell \
         or share it with third parties for marketing.</p>\
         <p>This site sets no tracking cookies.</p>",
        brand = site.brand,
    );
    static_page(&config, &app_state, "Privacy Policy", body)
}

pub async fn terms(
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let site = &config.site;
    let body = format!(
        "<p>Estimates published on this site are informational. A written quote \
         from {brand} is required before any work begins.</p>\
         <p>Workmanship warranties are stated on the written quote and honored \
         for the full stated period.</p>",
        brand = site.brand,
    );
    static_page(&config, &app_state, "Terms of Service", body)
}

pub async fn not_found(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    serve_404(
        &app_state.error_renderer,
        Some(app_state.templates.as_ref()),
    )
}

pub async fn site_css() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .insert_header(("Cache-Control", "public, max-age=86400"))
        .body(include_str!("assets/site.css"))
}

fn static_page(
    config: &ValidatedConfig,
    app_state: &AppState,
    heading: &str,
    body_html: String,
) -> Result<HttpResponse> {
    let site = &config.site;
    let ctx = context! {
        site => site_context(site),
        page_title => format!("{} | {}", heading, site.brand),
        meta_description => Value::UNDEFINED,
        heading => heading,
        body_html => body_html,
    };
    render_page(app_state, "public/page.html", ctx)
}

fn render_page(app_state: &AppState, template: &str, ctx: Value) -> Result<HttpResponse> {
    match render_minijinja_template(app_state.templates.as_ref(), template, ctx) {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html)),
        Err(e) => {
            log::error!("Failed to render template '{}': {}", template, e);
            serve_500(
                &app_state.error_renderer,
                Some(app_state.templates.as_ref()),
            )
        }
    }
}

fn site_context(site: &ValidatedSiteConfig) -> Value {
    context! {
        brand => site.brand,
        phone => site.phone,
        email => site.email,
        domain => site.domain,
        service_label => service_label(site.profile),
        year => Utc::now().year(),
    }
}

fn service_label(profile: SiteProfile) -> &'static str {
    match profile {
        SiteProfile::Gutter => "Gutter Installation",
        SiteProfile::DryerVent => "Dryer Vent Cleaning",
    }
}

/// First sentence of the intro, clamped for the meta description tag.
fn meta_description(copy: &str) -> String {
    let plain = copy_plain(copy);
    match plain.char_indices().nth(160) {
        Some((index, _)) => format!("{}...", plain[..index].trim_end()),
        None => plain,
    }
}
