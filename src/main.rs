// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{App, HttpServer, web};
use log::{LevelFilter, info, warn};
use std::io::Write;
use std::sync::Arc;

mod app_state;
mod bootstrap;
mod config;
mod content;
mod locations;
mod public;
mod templates;
mod util;

use app_state::AppState;
use config::SiteProfile;
use locations::LocationStore;
use util::RouteNormalizeMiddlewareFactory;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    if matches!(parsed_args.mode, RunMode::Help) {
        print!("{}", help_text());
        return 0;
    }

    let bootstrap = match bootstrap::bootstrap_runtime(&parsed_args.runtime_root) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("❌ Bootstrap error: {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    match System::new().block_on(run_server(bootstrap)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

async fn run_server(bootstrap: bootstrap::BootstrapResult) -> std::io::Result<()> {
    let validated_config = Arc::new(bootstrap.validated_config);

    // Parse log level from config
    let log_level = match validated_config.logging.level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    // Configure logging with a stable format
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|error| {
            eprintln!("❌ Failed to initialize logger: {}", error);
            std::io::Error::other(error.to_string())
        })?;

    log_startup_info(&validated_config, &bootstrap.root);

    let locations_path = bootstrap.root.join(&validated_config.data.locations_file);
    let locations = LocationStore::load(&locations_path).map_err(|error| {
        eprintln!("❌ Failed to load location data: {}", error);
        std::io::Error::other(error.to_string())
    })?;
    info!("✅ Location store loaded with {} cities", locations.len());
    if locations.is_empty() {
        warn!(
            "Location data at {} contains no cities; only static pages will resolve",
            locations_path.display()
        );
    }

    let app_state = Arc::new(AppState::new(&validated_config.site.brand, locations));
    info!(
        "✅ App state initialized for brand: {}",
        validated_config.site.brand
    );

    let workers = usize::from(validated_config.server.workers);
    let bind_address = (
        validated_config.server.host.clone(),
        validated_config.server.port,
    );

    let config_for_app = validated_config.clone();
    let app_state_for_app = app_state.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(config_for_app.clone()))
            .app_data(web::Data::from(app_state_for_app.clone()))
            .wrap(NormalizePath::trim())
            .wrap(RouteNormalizeMiddlewareFactory)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
            ))
            .configure(public::configure)
            .default_service(web::route().to(public::handlers::not_found))
    })
    .workers(workers)
    .bind(bind_address)?
    .run()
    .await
}

fn log_startup_info(config: &config::ValidatedConfig, root: &std::path::Path) {
    info!("Starting {} - {}", config.app.name, config.app.description);
    let profile = match config.site.profile {
        SiteProfile::Gutter => "gutter",
        SiteProfile::DryerVent => "dryer_vent",
    };
    info!(
        "Site profile: {} ({} at {})",
        profile, config.site.brand, config.site.domain
    );
    info!(
        "Subdomain rewrites: {}",
        if config.site.subdomain_rewrites {
            "enabled"
        } else {
            "disabled"
        }
    );
    info!("Workers: {}", config.server.workers);
    info!(
        "Listening on {}:{}",
        config.server.host, config.server.port
    );
    info!("Runtime root: {}", root.display());
}

#[derive(Debug)]
enum RunMode {
    Serve,
    Help,
}

#[derive(Debug)]
struct ParsedArgs {
    runtime_root: std::path::PathBuf,
    mode: RunMode,
}

fn parse_args() -> Result<ParsedArgs, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I>(args: I) -> Result<ParsedArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        return Ok(ParsedArgs {
            runtime_root: std::path::PathBuf::from("."),
            mode: RunMode::Help,
        });
    }

    let mut args = args.into_iter();
    let mut runtime_root = std::path::PathBuf::from(".");

    while let Some(arg) = args.next() {
        if arg == "-C" {
            let value = args
                .next()
                .ok_or_else(|| "Missing value for -C".to_string())?;
            runtime_root = std::path::PathBuf::from(value);
        } else {
            return Err(format!("Unknown argument: {}", arg));
        }
    }

    let runtime_root = make_runtime_root_absolute(runtime_root)?;

    Ok(ParsedArgs {
        runtime_root,
        mode: RunMode::Serve,
    })
}

fn make_runtime_root_absolute(
    runtime_root: std::path::PathBuf,
) -> Result<std::path::PathBuf, String> {
    if runtime_root.is_absolute() {
        return Ok(runtime_root);
    }

    let current_dir = std::env::current_dir()
        .map_err(|error| format!("Failed to resolve current directory: {}", error))?;
    Ok(current_dir.join(runtime_root))
}

fn help_text() -> &'static str {
    "geopress - programmatic local-SEO site server\n\
     \n\
     Usage: geopress [-C <root>]\n\
     \n\
     Options:\n\
       -C <root>    Runtime directory holding config.yaml and locations.yaml\n\
                    (created and seeded on first run; defaults to .)\n\
       -h, --help   Show this help\n"
}

#[cfg(test)]
mod tests {
    use super::{RunMode, parse_args_from};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_args_defaults_to_serving_from_cwd() {
        let parsed = parse_args_from(Vec::new()).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Serve));
        assert!(parsed.runtime_root.is_absolute());
    }

    #[test]
    fn parse_args_accepts_runtime_root() {
        let parsed = parse_args_from(args(&["-C", "runtime"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Serve));
        assert!(parsed.runtime_root.ends_with("runtime"));
    }

    #[test]
    fn parse_args_requires_value_for_runtime_root() {
        let error = parse_args_from(args(&["-C"])).expect_err("missing value");
        assert!(error.contains("-C"));
    }

    #[test]
    fn parse_args_rejects_unknown_flags() {
        let error = parse_args_from(args(&["--daemon"])).expect_err("unknown flag");
        assert!(error.contains("--daemon"));
    }

    #[test]
    fn parse_args_accepts_help_flag() {
        let parsed = parse_args_from(args(&["--help", "-C", "runtime"])).expect("parse args");
        assert!(matches!(parsed.mode, RunMode::Help));
    }
}
