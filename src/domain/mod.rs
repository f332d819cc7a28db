//! Domain aggregates exposed by the CRM service layer.

pub mod lead;
pub mod query;
pub mod stats;
pub mod types;
