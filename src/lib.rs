//! # postdesk
//!
//! Leptos + WASM frontend for writing posts behind a sign-in.
//!
//! The core is a static route table and a navigation guard: `/` redirects to
//! `/login`, `/login` is for guests only, and `/crear-post` needs a session.
//! A session is the presence of the `"user"` key in browser `localStorage`,
//! injected into the guard through `state::auth::AuthContext`.
//!
//! Built with `hydrate` for the browser bundle and `ssr` for the Axum host.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod router;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;

/// WASM entry point: install browser logging and hydrate the server HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
