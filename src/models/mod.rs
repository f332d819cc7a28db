//! Server-side models: configuration and the session user.

pub mod auth;
pub mod config;
