//! Static route table.
//!
//! DESIGN
//! ======
//! The table is built once at startup and never mutated. View paths come
//! from `RouteName::path`, which `app.rs` also uses for its `StaticSegment`s,
//! so the table and the Leptos route tree name the same paths. Lookups drop
//! the query and fragment and ignore one trailing slash; matching is
//! case-sensitive like the router's static segments. A miss is reported as
//! `None` and left to the host router's fallback.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::config::{CREATE_POST_PATH, LOGIN_PATH, NavConfig};
use crate::error::NavError;

/// Access flags attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_guest: bool,
}

impl RouteMeta {
    /// Only signed-in visitors may enter.
    pub const AUTH: Self = Self { requires_auth: true, requires_guest: false };
    /// Only signed-out visitors may enter.
    pub const GUEST: Self = Self { requires_auth: false, requires_guest: true };
}

/// Views reachable through the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Login,
    CreatePost,
}

impl RouteName {
    /// Route name as registered with the router.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::CreatePost => "CrearPost",
        }
    }

    /// Absolute path the view is mounted at.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::CreatePost => CREATE_POST_PATH,
        }
    }

    /// `path` without its leading slash, as a router segment.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }
}

/// What a matched route does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    /// Unconditional redirect, applied before any guard.
    Redirect(String),
    /// Render the named view, subject to the guard.
    View(RouteName),
}

/// One entry of the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: String,
    pub target: RouteTarget,
    pub meta: RouteMeta,
}

impl RouteDef {
    pub fn redirect(path: &str, to: &str) -> Self {
        Self {
            path: path.to_owned(),
            target: RouteTarget::Redirect(to.to_owned()),
            meta: RouteMeta::default(),
        }
    }

    pub fn view(path: &str, name: RouteName, meta: RouteMeta) -> Self {
        Self {
            path: path.to_owned(),
            target: RouteTarget::View(name),
            meta,
        }
    }
}

/// Ordered list of routes; the first match wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDef>) -> Self {
        Self { routes }
    }

    /// The application's three routes: root redirect, login, post creation.
    pub fn standard() -> Self {
        Self::new(vec![
            RouteDef::redirect("/", RouteName::Login.path()),
            RouteDef::view(RouteName::Login.path(), RouteName::Login, RouteMeta::GUEST),
            RouteDef::view(RouteName::CreatePost.path(), RouteName::CreatePost, RouteMeta::AUTH),
        ])
    }

    #[cfg(test)]
    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    /// Find the route matching `path`, if any.
    pub fn find(&self, path: &str) -> Option<&RouteDef> {
        let wanted = normalize_path(path);
        self.routes.iter().find(|r| normalize_path(&r.path) == wanted)
    }

    /// Access flags of the view registered as `name`.
    #[cfg(test)]
    pub fn meta_of(&self, name: RouteName) -> Option<RouteMeta> {
        self.routes
            .iter()
            .find(|r| r.target == RouteTarget::View(name))
            .map(|r| r.meta)
    }

    /// Check the table's invariants against the configured landing paths.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a view route without exactly one
    /// access flag, a redirect route carrying flags, a redirect or landing
    /// path missing from the table, or a landing path whose own flags would
    /// bounce the visitor again.
    pub fn validate(&self, config: &NavConfig) -> Result<(), NavError> {
        for route in &self.routes {
            match &route.target {
                RouteTarget::Redirect(to) => {
                    if route.meta != RouteMeta::default() {
                        return Err(NavError::InvalidRoute {
                            path: route.path.clone(),
                            reason: "redirect routes carry no access flags",
                        });
                    }
                    if self.find(to).is_none() {
                        return Err(NavError::UnknownTarget(to.clone()));
                    }
                }
                RouteTarget::View(_) => {
                    if route.meta.requires_auth == route.meta.requires_guest {
                        return Err(NavError::InvalidRoute {
                            path: route.path.clone(),
                            reason: "exactly one of requires_auth or requires_guest must be set",
                        });
                    }
                }
            }
        }

        let login = self
            .find(&config.login_path)
            .ok_or_else(|| NavError::UnknownTarget(config.login_path.clone()))?;
        if login.meta.requires_auth {
            return Err(NavError::LoopRisk {
                path: config.login_path.clone(),
                reason: "login route requires auth",
            });
        }

        let home = self
            .find(&config.home_path)
            .ok_or_else(|| NavError::UnknownTarget(config.home_path.clone()))?;
        if home.meta.requires_guest {
            return Err(NavError::LoopRisk {
                path: config.home_path.clone(),
                reason: "home route requires a guest",
            });
        }

        Ok(())
    }
}

/// Canonical form of a requested path used for matching.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let mut p = path[..end].to_owned();
    if !p.starts_with('/') {
        p.insert(0, '/');
    }
    if p.len() > 1 && p.ends_with('/') {
        p.pop();
    }
    p
}
