use crate::dto::drafts::EmailDraft;
use crate::drafts::EmailDrafter;
use crate::models::auth::AuthenticatedUser;
use crate::repository::LeadReader;
use crate::services::ServiceResult;
use crate::services::leads::get_lead;

/// Generates an outreach email for the lead with `lead_id`.
pub async fn draft_email<R, D>(
    repo: &R,
    drafter: &D,
    user: &AuthenticatedUser,
    lead_id: &str,
) -> ServiceResult<EmailDraft>
where
    R: LeadReader + ?Sized,
    D: EmailDrafter,
{
    let lead = get_lead(repo, user, lead_id)?;
    let draft = drafter.draft(&lead).await;

    Ok(EmailDraft {
        lead_id: lead.id,
        draft,
    })
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use chrono::Utc;

    use super::*;
    use crate::domain::lead::{Lead, NewLead};
    use crate::domain::types::{
        LeadEmail, LeadId, LeadName, LeadSource, LeadStatus, PhoneNumber,
    };
    use crate::repository::InMemoryRepository;
    use crate::services::ServiceError;

    struct EchoDrafter;

    impl EmailDrafter for EchoDrafter {
        fn draft(&self, lead: &Lead) -> impl Future<Output = String> + Send {
            let text = format!("Hello {}", lead.first_name());
            async move { text }
        }
    }

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            email: "admin@example.com".to_string(),
            name: "Admin User".to_string(),
        }
    }

    fn repo() -> InMemoryRepository {
        let lead: Lead = NewLead::new(
            LeadId::new("lead_7").unwrap(),
            LeadName::new("Linda Garcia").unwrap(),
            LeadEmail::new("linda.garcia@networks.com").unwrap(),
            PhoneNumber::new("+1 (555) 404-5050").unwrap(),
            LeadStatus::New,
            LeadSource::Social,
            Utc::now(),
        )
        .into();
        InMemoryRepository::with_leads(vec![lead]).unwrap()
    }

    #[actix_web::test]
    async fn drafts_for_existing_lead() {
        let draft = draft_email(&repo(), &EchoDrafter, &user(), "lead_7")
            .await
            .unwrap();

        assert_eq!(draft.lead_id.as_str(), "lead_7");
        assert_eq!(draft.draft, "Hello Linda");
    }

    #[actix_web::test]
    async fn missing_lead_is_not_found() {
        let result = draft_email(&repo(), &EchoDrafter, &user(), "lead_8").await;

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
