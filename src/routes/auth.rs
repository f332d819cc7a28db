use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, get, post, web};

use crate::forms::auth::LoginForm;
use crate::models::auth::AuthenticatedUser;
use crate::services::auth as auth_service;
use crate::services::ServiceError;

#[post("/login")]
pub async fn login(
    request: HttpRequest,
    web::Json(form): web::Json<LoginForm>,
) -> Result<HttpResponse, ServiceError> {
    let user = auth_service::login(form)?;

    let payload = serde_json::to_string(&user)
        .map_err(|err| ServiceError::Internal(format!("Failed to encode identity: {err}")))?;
    Identity::login(&request.extensions(), payload).map_err(|err| {
        log::error!("Failed to start session for {}: {err}", user.email);
        ServiceError::Internal(err.to_string())
    })?;

    log::info!("User {} signed in", user.email);
    Ok(HttpResponse::Ok().json(user))
}

#[post("/logout")]
pub async fn logout(identity: Identity) -> HttpResponse {
    identity.logout();
    HttpResponse::NoContent().finish()
}

#[get("/me")]
pub async fn me(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(user)
}
