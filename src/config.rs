//! Navigation configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route table and the segments declared in `app.rs` both take their
//! paths from the constants below through `RouteName::path`. `NavConfig`
//! carries the guard's redirect targets as owned values for code that
//! receives configuration through context; `RouteTable::validate` checks
//! they exist in the table.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Landing path for unauthenticated visitors.
pub const LOGIN_PATH: &str = "/login";

/// Landing path for authenticated visitors.
pub const CREATE_POST_PATH: &str = "/crear-post";

/// `localStorage` key whose presence marks the visitor as signed in.
pub const SESSION_KEY: &str = "user";

/// Paths and storage key used by the navigation guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavConfig {
    /// Redirect target when a route requires auth and no session exists.
    pub login_path: String,
    /// Redirect target when a route requires a guest and a session exists.
    pub home_path: String,
    /// Storage key checked for presence.
    pub session_key: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            login_path: LOGIN_PATH.to_owned(),
            home_path: CREATE_POST_PATH.to_owned(),
            session_key: SESSION_KEY.to_owned(),
        }
    }
}
