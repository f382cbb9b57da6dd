//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos SSR app, its compiled `/pkg` assets and a health probe
//! under a single Axum router. The host has no content endpoints.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::HostError;

/// Leptos SSR frontend plus `/pkg` assets and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(with_host_routes(leptos_router, &site_root_path))
}

/// Wrap `frontend` with `/healthz`, the `/pkg` asset directory under
/// `site_root`, and the compression and trace layers.
fn with_host_routes(frontend: Router, site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .merge(frontend)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
