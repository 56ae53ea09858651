//! Routed views.

pub mod create_post;
pub mod login;
