//! Form definitions backing the CRM routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod auth;
pub mod leads;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("unknown sort field: {0}")]
    InvalidSortKey(String),

    #[error("invalid sort order: {0}")]
    InvalidSortOrder(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid source: {0}")]
    InvalidSource(String),

    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),
}
