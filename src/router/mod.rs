//! Route table and navigation guard.
//!
//! DESIGN
//! ======
//! Everything here is plain data and pure functions so it can be tested
//! without a browser. The Leptos side (`components::guarded`, `app`) feeds
//! in the auth signal and applies the outcome.

pub mod guard;
pub mod navigate;
pub mod table;
