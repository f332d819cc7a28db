use serde::Serialize;

use crate::domain::types::{LeadSource, LeadStatus};

/// Number of leads sharing one status, with the chart color for it.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct StatusSlice {
    pub name: LeadStatus,
    pub value: usize,
    pub color: &'static str,
}

/// Number of leads acquired through one source.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SourceSlice {
    pub name: LeadSource,
    pub value: usize,
}

/// Aggregates shown on the dashboard.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_leads: usize,
    pub converted_leads: usize,
    /// Percentage of converted leads, `0.0` for an empty store.
    pub conversion_rate: f64,
    pub leads_by_status: Vec<StatusSlice>,
    pub leads_by_source: Vec<SourceSlice>,
}

impl LeadStatus {
    /// Chart color associated with the status.
    pub const fn color(self) -> &'static str {
        match self {
            LeadStatus::New => "#3b82f6",
            LeadStatus::Contacted => "#eab308",
            LeadStatus::Converted => "#22c55e",
            LeadStatus::Lost => "#94a3b8",
        }
    }
}
