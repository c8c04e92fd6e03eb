// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Route normalization middleware.
//!
//! Runs before routing on every request and does two things:
//!
//! 1. Vanity-subdomain rewriting (when `site.subdomain_rewrites` is on):
//!    `or.example.com/some-city` routes as `/or/some-city`, and
//!    `estacada-or.example.com/services/cleaning` routes as
//!    `/or/estacada/cleaning`. Rewrites are internal; the client never sees
//!    a redirect and the host is untouched.
//! 2. Lowercase canonicalization: any remaining path with uppercase letters
//!    gets a 301 to its lowercased form so crawlers consolidate signals on
//!    one canonical URL. Rewritten paths are built from lowercased parts and
//!    are never re-redirected.

use actix_web::Error;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header;
use actix_web::http::uri::{PathAndQuery, Uri};
use actix_web::web::Data;
use actix_web::HttpResponse;

use std::future::{Ready, ready};
use std::pin::Pin;
use std::rc::Rc;

use crate::config::ValidatedConfig;

/// Paths that are never rewritten or case-redirected. Anything with a dot is
/// a file request (favicon.ico, sitemap.xml, ...) and is left alone too.
const EXEMPT_PREFIXES: &[&str] = &["/api", "/static"];

/// Top-level pages that always resolve at the root regardless of which
/// subdomain served the request. Exempt from subdomain rewriting only; case
/// normalization still applies.
const GLOBAL_PAGES: &[&str] = &["about", "contact", "privacy", "terms", "sitemap", "robots"];

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum RouteDecision {
    Pass,
    Redirect(String),
    Rewrite(String),
}

pub struct RouteNormalizeMiddlewareFactory;

impl<S, B> Transform<S, ServiceRequest> for RouteNormalizeMiddlewareFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RouteNormalizeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteNormalizeMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RouteNormalizeMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RouteNormalizeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        let decision = {
            let config = req.app_data::<Data<ValidatedConfig>>();
            let host = req.connection_info().host().to_string();
            decide_route(
                config.map(|config| config.get_ref()),
                &host,
                req.path(),
                req.query_string(),
            )
        };

        match decision {
            RouteDecision::Pass => Box::pin(async move {
                service
                    .call(req)
                    .await
                    .map(ServiceResponse::map_into_left_body)
            }),
            RouteDecision::Redirect(location) => Box::pin(async move {
                log::debug!("Canonicalizing {} -> {}", req.path(), location);
                let response = HttpResponse::MovedPermanently()
                    .insert_header((header::LOCATION, location))
                    .finish()
                    .map_into_right_body();
                Ok(req.into_response(response))
            }),
            RouteDecision::Rewrite(target) => {
                log::debug!("Subdomain rewrite {} -> {}", req.path(), target);
                apply_rewrite(&mut req, &target);
                Box::pin(async move {
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                })
            }
        }
    }
}

/// Swaps the request's path-and-query so the router resolves the rewritten
/// path. Same mechanism as actix's own NormalizePath middleware. A target
/// that fails URI assembly (cannot happen for paths we build, which are
/// lowercased copies of an already-valid path) leaves the request as-is.
fn apply_rewrite(req: &mut ServiceRequest, target: &str) {
    let mut parts = req.head().uri.clone().into_parts();
    let path_and_query = match PathAndQuery::try_from(target) {
        Ok(value) => value,
        Err(_) => return,
    };
    parts.path_and_query = Some(path_and_query);
    let uri = match Uri::from_parts(parts) {
        Ok(uri) => uri,
        Err(_) => return,
    };
    req.match_info_mut().get_mut().update(&uri);
    req.head_mut().uri = uri;
}

pub(crate) fn decide_route(
    config: Option<&ValidatedConfig>,
    host: &str,
    path: &str,
    query: &str,
) -> RouteDecision {
    if is_exempt_path(path) {
        return RouteDecision::Pass;
    }

    if let Some(config) = config
        && config.site.subdomain_rewrites
        && !is_global_page(path)
        && let Some(label) = subdomain_label(host, &config.site.domain)
        && let Some(rewritten) = rewrite_for_subdomain(&label, path)
    {
        return RouteDecision::Rewrite(with_query(rewritten, query));
    }

    if path.bytes().any(|b| b.is_ascii_uppercase()) {
        return RouteDecision::Redirect(with_query(path.to_ascii_lowercase(), query));
    }

    RouteDecision::Pass
}

fn is_exempt_path(path: &str) -> bool {
    if path.contains('.') {
        return true;
    }
    EXEMPT_PREFIXES.iter().any(|prefix| {
        path.eq_ignore_ascii_case(prefix)
            || path.len() > prefix.len()
                && path[..prefix.len()].eq_ignore_ascii_case(prefix)
                && path.as_bytes()[prefix.len()] == b'/'
    })
}

fn is_global_page(path: &str) -> bool {
    let first_segment = path
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    GLOBAL_PAGES.contains(&first_segment.as_str())
}

/// Extracts the vanity label when `host` is `<label>.<domain>` for the
/// configured apex domain. Apex requests, foreign hosts, and nested labels
/// all return None. Comparison ignores the port and case.
fn subdomain_label(host: &str, domain: &str) -> Option<String> {
    let host = host.split(':').next().unwrap_or("").to_ascii_lowercase();
    let label = host.strip_suffix(domain)?.strip_suffix('.')?;
    if label.is_empty() || label.contains('.') {
        return None;
    }
    Some(label.to_string())
}

/// Maps a recognized vanity label to the internally routed path. Two shapes:
/// a bare two-letter state code, and `{city-slug}-{two-letter-code}`.
/// Anything else (www, digits, extra dots) is not rewritten.
fn rewrite_for_subdomain(label: &str, path: &str) -> Option<String> {
    let path = path.to_ascii_lowercase();

    if label.len() == 2 && label.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Some(format!("/{}{}", label, path));
    }

    if let Some((slug, code)) = label.rsplit_once('-')
        && !slug.is_empty()
        && code.len() == 2
        && code.bytes().all(|b| b.is_ascii_alphabetic())
        && slug.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    {
        // The dryer-vent site's old URL scheme nested city pages under
        // /services; strip that prefix so both schemes land on /{st}/{city}.
        let remainder = match path.strip_prefix("/services") {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path.as_str(),
        };
        return Some(format!("/{}/{}{}", code, slug, remainder));
    }

    None
}

fn with_query(path: String, query: &str) -> String {
    if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_config::TestConfigBuilder;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpRequest, HttpResponse, web};

    fn dryer_config() -> ValidatedConfig {
        TestConfigBuilder::new()
            .with_domain("example.com")
            .with_subdomain_rewrites(true)
            .build()
    }

    fn decide(host: &str, path: &str) -> RouteDecision {
        let config = dryer_config();
        decide_route(Some(&config), host, path, "")
    }

    #[test]
    fn state_code_subdomain_prefixes_the_path() {
        assert_eq!(
            decide("or.example.com", "/some-city"),
            RouteDecision::Rewrite("/or/some-city".to_string())
        );
    }

    #[test]
    fn city_state_subdomain_strips_services_prefix() {
        assert_eq!(
            decide("estacada-or.example.com", "/services/cleaning"),
            RouteDecision::Rewrite("/or/estacada/cleaning".to_string())
        );
    }

    #[test]
    fn city_state_subdomain_with_root_path() {
        assert_eq!(
            decide("estacada-or.example.com", "/"),
            RouteDecision::Rewrite("/or/estacada/".to_string())
        );
    }

    #[test]
    fn multi_word_city_slug_keeps_inner_hyphens() {
        assert_eq!(
            decide("west-linn-or.example.com", "/"),
            RouteDecision::Rewrite("/or/west-linn/".to_string())
        );
    }

    #[test]
    fn www_is_not_a_vanity_subdomain_but_case_still_redirects() {
        assert_eq!(
            decide("www.example.com", "/About"),
            RouteDecision::Redirect("/about".to_string())
        );
        assert_eq!(decide("www.example.com", "/about"), RouteDecision::Pass);
    }

    #[test]
    fn global_pages_skip_subdomain_rewriting_but_not_case() {
        // /About is in the global skip list, so the estacada-or subdomain does
        // not claim it; the lowercase redirect still applies.
        assert_eq!(
            decide("estacada-or.example.com", "/About"),
            RouteDecision::Redirect("/about".to_string())
        );
        assert_eq!(
            decide("estacada-or.example.com", "/contact"),
            RouteDecision::Pass
        );
    }

    #[test]
    fn dotted_paths_are_untouched_on_any_host() {
        assert_eq!(
            decide("estacada-or.example.com", "/favicon.ico"),
            RouteDecision::Pass
        );
        assert_eq!(decide("www.example.com", "/Logo.PNG"), RouteDecision::Pass);
    }

    #[test]
    fn internal_prefixes_are_untouched() {
        assert_eq!(decide("or.example.com", "/api/leads"), RouteDecision::Pass);
        assert_eq!(
            decide("or.example.com", "/static/Theme/css"),
            RouteDecision::Pass
        );
    }

    #[test]
    fn apex_and_foreign_hosts_are_not_rewritten() {
        assert_eq!(decide("example.com", "/some-city"), RouteDecision::Pass);
        assert_eq!(decide("or.other.com", "/some-city"), RouteDecision::Pass);
        // a port does not defeat subdomain matching
        assert_eq!(
            decide("or.example.com:8080", "/some-city"),
            RouteDecision::Rewrite("/or/some-city".to_string())
        );
    }

    #[test]
    fn nested_labels_are_ignored() {
        assert_eq!(decide("a.b.example.com", "/x"), RouteDecision::Pass);
    }

    #[test]
    fn rewritten_paths_are_never_case_redirected() {
        // Uppercase in the incoming path is lowered during rewrite, not via a
        // second redirect round-trip.
        assert_eq!(
            decide("or.example.com", "/Some-City"),
            RouteDecision::Rewrite("/or/some-city".to_string())
        );
    }

    #[test]
    fn query_strings_survive_both_actions() {
        let config = dryer_config();
        assert_eq!(
            decide_route(Some(&config), "or.example.com", "/some-city", "utm=x"),
            RouteDecision::Rewrite("/or/some-city?utm=x".to_string())
        );
        assert_eq!(
            decide_route(Some(&config), "www.example.com", "/About", "a=1"),
            RouteDecision::Redirect("/about?a=1".to_string())
        );
    }

    #[test]
    fn rewriting_disabled_still_canonicalizes_case() {
        let config = TestConfigBuilder::new()
            .with_domain("example.com")
            .with_subdomain_rewrites(false)
            .build();
        assert_eq!(
            decide_route(Some(&config), "or.example.com", "/Some-City", ""),
            RouteDecision::Redirect("/some-city".to_string())
        );
        assert_eq!(
            decide_route(Some(&config), "or.example.com", "/some-city", ""),
            RouteDecision::Pass
        );
    }

    #[test]
    fn missing_config_only_canonicalizes() {
        assert_eq!(
            decide_route(None, "or.example.com", "/Some-City", ""),
            RouteDecision::Redirect("/some-city".to_string())
        );
    }

    async fn echo_path(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().body(req.path().to_string())
    }

    #[actix_web::test]
    async fn middleware_rewrites_subdomain_requests() {
        let app = actix_web::test::init_service(
            App::new()
                .app_data(web::Data::new(dryer_config()))
                .wrap(RouteNormalizeMiddlewareFactory)
                .default_service(web::to(echo_path)),
        )
        .await;

        let req = actix_web::test::TestRequest::get()
            .uri("/services/cleaning")
            .insert_header((header::HOST, "estacada-or.example.com"))
            .to_request();
        let body = actix_web::test::call_and_read_body(&app, req).await;
        assert_eq!(body, "/or/estacada/cleaning".as_bytes());
    }

    #[actix_web::test]
    async fn middleware_redirects_uppercase_paths() {
        let app = actix_web::test::init_service(
            App::new()
                .app_data(web::Data::new(dryer_config()))
                .wrap(RouteNormalizeMiddlewareFactory)
                .default_service(web::to(echo_path)),
        )
        .await;

        let req = actix_web::test::TestRequest::get()
            .uri("/About")
            .insert_header((header::HOST, "www.example.com"))
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            resp.headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/about")
        );
    }

    #[actix_web::test]
    async fn middleware_passes_plain_requests_through() {
        let app = actix_web::test::init_service(
            App::new()
                .app_data(web::Data::new(dryer_config()))
                .wrap(RouteNormalizeMiddlewareFactory)
                .default_service(web::to(echo_path)),
        )
        .await;

        let req = actix_web::test::TestRequest::get()
            .uri("/or/estacada")
            .insert_header((header::HOST, "www.example.com"))
            .to_request();
        let body = actix_web::test::call_and_read_body(&app, req).await;
        assert_eq!(body, "/or/estacada".as_bytes());
    }
}
