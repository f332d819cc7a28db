use actix_web::{HttpResponse, get, web};

use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::simulate_latency;
use crate::services::dashboard as dashboard_service;
use crate::services::ServiceError;

#[get("/v1/stats")]
pub async fn show_stats(
    user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
    server_config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    simulate_latency(&server_config).await;

    let stats = dashboard_service::load_stats(repo.get_ref(), &user)?;
    Ok(HttpResponse::Ok().json(stats))
}
