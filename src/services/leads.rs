use crate::domain::lead::Lead;
use crate::domain::query::LeadQuery;
use crate::domain::types::LeadId;
use crate::forms::leads::LeadListForm;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::ResultPage;
use crate::query::query_leads;
use crate::repository::LeadReader;
use crate::services::{ServiceError, ServiceResult};

/// Runs the lead listing described by `form` over the whole store.
pub fn list_leads<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: LeadListForm,
) -> ServiceResult<ResultPage<Lead>>
where
    R: LeadReader + ?Sized,
{
    let query = LeadQuery::try_from(form).map_err(|err| {
        log::error!("Rejected lead query from {}: {err}", user.email);
        ServiceError::from(err)
    })?;

    let leads = repo.list_leads().map_err(|err| {
        log::error!("Failed to list leads: {err}");
        err
    })?;

    Ok(query_leads(&leads, &query))
}

/// Fetches a single lead for the detail view.
pub fn get_lead<R>(repo: &R, user: &AuthenticatedUser, lead_id: &str) -> ServiceResult<Lead>
where
    R: LeadReader + ?Sized,
{
    let lead_id = LeadId::new(lead_id)?;

    match repo.get_lead_by_id(&lead_id) {
        Ok(Some(lead)) => Ok(lead),
        Ok(None) => {
            log::info!("Lead {lead_id} requested by {} not found", user.email);
            Err(ServiceError::NotFound)
        }
        Err(err) => {
            log::error!("Failed to get lead {lead_id}: {err}");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::lead::NewLead;
    use crate::domain::types::{LeadEmail, LeadName, LeadSource, LeadStatus, PhoneNumber};
    use crate::repository::errors::{RepositoryError, RepositoryResult};

    struct StubRepo {
        leads: Vec<Lead>,
        fail: bool,
    }

    impl LeadReader for StubRepo {
        fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
            if self.fail {
                return Err(RepositoryError::Unexpected("boom".into()));
            }
            Ok(self.leads.clone())
        }

        fn get_lead_by_id(&self, id: &LeadId) -> RepositoryResult<Option<Lead>> {
            Ok(self.leads.iter().find(|lead| &lead.id == id).cloned())
        }
    }

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            email: "admin@example.com".to_string(),
            name: "Admin User".to_string(),
        }
    }

    fn lead(id: &str, name: &str, status: LeadStatus) -> Lead {
        NewLead::new(
            LeadId::new(id).unwrap(),
            LeadName::new(name).unwrap(),
            LeadEmail::new(format!("{id}@example.com")).unwrap(),
            PhoneNumber::new("+1 (555) 200-3000").unwrap(),
            status,
            LeadSource::Ads,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        )
        .into()
    }

    fn repo() -> StubRepo {
        StubRepo {
            leads: vec![
                lead("lead_1", "Alice", LeadStatus::New),
                lead("lead_2", "Bob", LeadStatus::Converted),
                lead("lead_3", "Carl", LeadStatus::New),
            ],
            fail: false,
        }
    }

    #[test]
    fn list_applies_form_filters() {
        let form = LeadListForm {
            status: Some("New".into()),
            sort_by: Some("name".into()),
            sort_order: Some("asc".into()),
            ..LeadListForm::default()
        };

        let page = list_leads(&repo(), &user(), form).unwrap();

        let names: Vec<_> = page.data.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carl"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn list_rejects_bad_form() {
        let form = LeadListForm {
            sort_order: Some("sideways".into()),
            ..LeadListForm::default()
        };

        let result = list_leads(&repo(), &user(), form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn list_propagates_store_failure() {
        let repo = StubRepo {
            leads: vec![],
            fail: true,
        };

        let result = list_leads(&repo, &user(), LeadListForm::default());

        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }

    #[test]
    fn get_lead_reports_missing() {
        assert_eq!(
            get_lead(&repo(), &user(), "lead_2").unwrap().name.as_str(),
            "Bob"
        );
        assert!(matches!(
            get_lead(&repo(), &user(), "lead_9"),
            Err(ServiceError::NotFound)
        ));
    }
}
