#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_identity::IdentityMiddleware;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::drafts::GeminiDrafter;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{InMemoryRepository, LeadWriter};

pub mod domain;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod stats;

#[cfg(feature = "server")]
pub mod drafts;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod seed;
#[cfg(feature = "server")]
pub mod services;

/// Fills a fresh store from the configured CSV file or with generated leads.
#[cfg(feature = "server")]
pub fn seed_repository(server_config: &ServerConfig) -> std::io::Result<InMemoryRepository> {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let new_leads = match &server_config.leads_csv {
        Some(path) => seed::load_csv(std::path::Path::new(path)),
        None => {
            let mut rng = match server_config.seed_rng {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            seed::generate_leads(server_config.seed_leads, &mut rng, chrono::Utc::now())
        }
    }
    .map_err(|e| std::io::Error::other(format!("Failed to seed leads: {e}")))?;

    let repo = InMemoryRepository::new();
    let inserted = repo
        .create_leads(&new_leads)
        .map_err(|e| std::io::Error::other(format!("Failed to store leads: {e}")))?;
    log::info!("Lead store ready with {inserted} leads");

    Ok(repo)
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = seed_repository(&server_config)?;

    let drafter = GeminiDrafter::from_config(&server_config)
        .map_err(|e| std::io::Error::other(format!("Failed to build draft client: {e}")))?;
    if !drafter.is_configured() {
        log::warn!("No Gemini API key configured, email drafts use the fallback template");
    }

    // Keys and stores for identity and sessions.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(server_config.domain.as_ref().map(|d| format!(".{d}")))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(drafter.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
