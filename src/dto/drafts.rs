use serde::Serialize;

use crate::domain::types::LeadId;

/// Generated outreach email for one lead.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDraft {
    pub lead_id: LeadId,
    pub draft: String,
}
