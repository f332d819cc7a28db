use actix_web::{HttpResponse, get, post, web};

use crate::drafts::GeminiDrafter;
use crate::forms::leads::LeadListForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::simulate_latency;
use crate::services::drafts as drafts_service;
use crate::services::leads as leads_service;
use crate::services::ServiceError;

#[get("/v1/leads")]
pub async fn list_leads(
    params: web::Query<LeadListForm>,
    user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
    server_config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    simulate_latency(&server_config).await;

    let page = leads_service::list_leads(repo.get_ref(), &user, params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/v1/leads/{lead_id}")]
pub async fn show_lead(
    lead_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
    server_config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    simulate_latency(&server_config).await;

    let lead = leads_service::get_lead(repo.get_ref(), &user, &lead_id)?;
    Ok(HttpResponse::Ok().json(lead))
}

#[post("/v1/leads/{lead_id}/draft")]
pub async fn draft_lead_email(
    lead_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
    drafter: web::Data<GeminiDrafter>,
) -> Result<HttpResponse, ServiceError> {
    let draft =
        drafts_service::draft_email(repo.get_ref(), drafter.get_ref(), &user, &lead_id).await?;
    Ok(HttpResponse::Ok().json(draft))
}
