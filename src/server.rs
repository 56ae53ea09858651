//! Axum host for server-side rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos SSR routes, the compiled WASM/CSS bundle under `/pkg`,
//! and a health probe. Navigation decisions are not made here: the guard
//! needs browser storage and runs after hydration.

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};

/// Load Leptos options from `[package.metadata.leptos]` / `LEPTOS_*` env and
/// apply a `PORT` override to the bind address.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded or `PORT`
/// is not a valid port number.
pub fn load_config() -> Result<(LeptosOptions, SocketAddr), String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let options = conf.leptos_options;
    let addr = apply_port_override(options.site_addr, std::env::var("PORT").ok().as_deref())?;
    Ok((options, addr))
}

/// Replace the port of `addr` with `port`, if given.
///
/// # Errors
///
/// Returns an error if `port` does not parse as a `u16`.
pub fn apply_port_override(mut addr: SocketAddr, port: Option<&str>) -> Result<SocketAddr, String> {
    if let Some(raw) = port {
        let port: u16 = raw.trim().parse().map_err(|e| format!("invalid PORT {raw:?}: {e}"))?;
        addr.set_port(port);
    }
    Ok(addr)
}

/// Full HTTP router: health probe, Leptos SSR routes, static bundle.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(TraceLayer::new_for_http())
        .with_state(options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
