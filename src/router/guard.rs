//! Navigation guard policy.
//!
//! Evaluated for every navigation before the target view commits. The rules
//! run in order and the first match wins:
//!
//! 1. route requires auth, visitor signed out: go to the login path
//! 2. route requires a guest, visitor signed in: go to the home path
//! 3. otherwise proceed
//!
//! The function keeps no state between calls.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::table::RouteMeta;

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    RedirectToLogin,
    RedirectToHome,
}

/// Decide whether a navigation to a route with `meta` may proceed.
pub fn check(meta: RouteMeta, authenticated: bool) -> Decision {
    let decision = if meta.requires_auth && !authenticated {
        Decision::RedirectToLogin
    } else if meta.requires_guest && authenticated {
        Decision::RedirectToHome
    } else {
        Decision::Proceed
    };
    log::debug!("guard: {meta:?} authenticated={authenticated} -> {decision:?}");
    decision
}
