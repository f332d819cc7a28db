//! Session-backed identity of the signed-in user.

use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::services::ServiceError;

/// User stored in the session after login.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub name: String,
}

fn user_from_request(req: &HttpRequest) -> Result<AuthenticatedUser, ServiceError> {
    let identity = req
        .get_identity()
        .map_err(|_| ServiceError::Unauthorized)?;
    let payload = identity.id().map_err(|_| ServiceError::Unauthorized)?;

    serde_json::from_str(&payload).map_err(|err| {
        log::warn!("Discarding malformed session identity: {err}");
        ServiceError::Unauthorized
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = ServiceError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(user_from_request(req))
    }
}
