//! Lead storage abstractions.
//!
//! Services depend on the [`LeadReader`] and [`LeadWriter`] traits only, so the
//! in-memory store can be swapped for a database-backed one without touching
//! the query engine.

use crate::domain::lead::{Lead, NewLead};
use crate::domain::types::LeadId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use memory::InMemoryRepository;

pub trait LeadReader {
    /// Returns every lead in insertion order.
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
    fn get_lead_by_id(&self, id: &LeadId) -> RepositoryResult<Option<Lead>>;
}

pub trait LeadWriter {
    /// Inserts the batch, returning the number of leads added.
    fn create_leads(&self, new_leads: &[NewLead]) -> RepositoryResult<usize>;
}
