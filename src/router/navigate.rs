//! Path resolution through the route table and guard.
//!
//! `resolve` answers one hop: what the shell should do with a requested path
//! right now. `settle` keeps following redirects until a view renders, which
//! is what the visitor ends up seeing. `admit` turns a resolution into what
//! a mounted route view should do with it.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use std::collections::HashSet;

use crate::config::NavConfig;
use crate::error::NavError;

use super::guard::{self, Decision};
use super::table::{RouteName, RouteTable, RouteTarget, normalize_path};

/// Result of resolving one requested path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(RouteName),
    Redirect(String),
    NotFound,
}

/// Resolve `path` against `table` for a visitor with the given auth signal.
///
/// Redirect routes apply unconditionally; view routes pass through the guard.
pub fn resolve(table: &RouteTable, config: &NavConfig, path: &str, authenticated: bool) -> Resolution {
    let Some(route) = table.find(path) else {
        return Resolution::NotFound;
    };
    match &route.target {
        RouteTarget::Redirect(to) => Resolution::Redirect(to.clone()),
        RouteTarget::View(name) => match guard::check(route.meta, authenticated) {
            Decision::Proceed => Resolution::Render(*name),
            Decision::RedirectToLogin => Resolution::Redirect(config.login_path.clone()),
            Decision::RedirectToHome => Resolution::Redirect(config.home_path.clone()),
        },
    }
}

/// What the view mounted for `route` does with a resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    Render,
    Redirect(String),
    /// The path does not resolve to this view; show nothing.
    Blocked,
}

/// Decide whether the view mounted for `route` may render.
///
/// Only a `Render` of the same view lets it through.
pub fn admit(route: RouteName, resolution: Resolution) -> Admission {
    match resolution {
        Resolution::Render(name) if name == route => Admission::Render,
        Resolution::Redirect(to) => Admission::Redirect(to),
        Resolution::Render(_) | Resolution::NotFound => Admission::Blocked,
    }
}

/// Follow redirects from `path` until a view renders.
///
/// # Errors
///
/// Returns `NavError::NotFound` when a hop matches no route and
/// `NavError::RedirectLoop` when a path is visited twice.
pub fn settle(
    table: &RouteTable,
    config: &NavConfig,
    path: &str,
    authenticated: bool,
) -> Result<RouteName, NavError> {
    let mut seen = HashSet::new();
    let mut current = path.to_owned();
    loop {
        if !seen.insert(normalize_path(&current)) {
            return Err(NavError::RedirectLoop(current));
        }
        match resolve(table, config, &current, authenticated) {
            Resolution::Render(name) => return Ok(name),
            Resolution::Redirect(to) => {
                log::debug!("navigate: {current} -> {to}");
                current = to;
            }
            Resolution::NotFound => return Err(NavError::NotFound(current)),
        }
    }
}
