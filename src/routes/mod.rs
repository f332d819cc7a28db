//! HTTP handlers and their registration.

use std::time::Duration;

use actix_web::web;

use crate::models::config::ServerConfig;

pub mod auth;
pub mod dashboard;
pub mod leads;

/// Registers every route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::login)
            .service(auth::logout)
            .service(auth::me),
    )
    .service(
        web::scope("/api")
            .service(leads::list_leads)
            .service(leads::show_lead)
            .service(leads::draft_lead_email)
            .service(dashboard::show_stats),
    );
}

/// Sleeps for the configured artificial latency, if any.
pub(crate) async fn simulate_latency(config: &ServerConfig) {
    if config.mock_latency_ms > 0 {
        actix_web::rt::time::sleep(Duration::from_millis(config.mock_latency_ms)).await;
    }
}
