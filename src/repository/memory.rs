use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::domain::lead::{Lead, NewLead};
use crate::domain::types::LeadId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{LeadReader, LeadWriter};

/// Process-local lead store shared between workers.
///
/// Single writer, many readers. Readers get an owned snapshot so no lock is
/// held while a query runs.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    leads: Arc<RwLock<Vec<Lead>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from leads that are already known to have unique ids.
    pub fn with_leads(leads: Vec<Lead>) -> RepositoryResult<Self> {
        let repo = Self::new();
        let new_leads: Vec<NewLead> = leads.into_iter().map(NewLead::from).collect();
        repo.create_leads(&new_leads)?;
        Ok(repo)
    }
}

impl From<Lead> for NewLead {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id,
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            company: lead.company,
            status: lead.status,
            source: lead.source,
            created_at: lead.created_at,
            notes: lead.notes,
            last_contacted: lead.last_contacted,
        }
    }
}

impl LeadReader for InMemoryRepository {
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        let leads = self.leads.read()?;
        Ok(leads.clone())
    }

    fn get_lead_by_id(&self, id: &LeadId) -> RepositoryResult<Option<Lead>> {
        let leads = self.leads.read()?;
        Ok(leads.iter().find(|lead| &lead.id == id).cloned())
    }
}

impl LeadWriter for InMemoryRepository {
    fn create_leads(&self, new_leads: &[NewLead]) -> RepositoryResult<usize> {
        let mut leads = self.leads.write()?;

        let mut seen: HashSet<&LeadId> = leads.iter().map(|lead| &lead.id).collect();
        for new_lead in new_leads {
            if !seen.insert(&new_lead.id) {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "Unique constraint violation: lead {} already exists",
                    new_lead.id
                )));
            }
        }

        leads.extend(new_leads.iter().cloned().map(Lead::from));
        Ok(new_leads.len())
    }
}
