use crate::domain::stats::DashboardStats;
use crate::models::auth::AuthenticatedUser;
use crate::repository::LeadReader;
use crate::services::ServiceResult;
use crate::stats::compute_stats;

/// Aggregates the whole store for the dashboard.
pub fn load_stats<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<DashboardStats>
where
    R: LeadReader + ?Sized,
{
    let leads = repo.list_leads().map_err(|err| {
        log::error!("Failed to load leads for {} dashboard: {err}", user.email);
        err
    })?;

    Ok(compute_stats(&leads))
}
