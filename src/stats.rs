//! Dashboard aggregation over the whole lead collection.

use crate::domain::lead::Lead;
use crate::domain::stats::{DashboardStats, SourceSlice, StatusSlice};
use crate::domain::types::LeadStatus;

/// Counts leads per status and per source.
///
/// Slices are listed in order of first appearance; values that never occur are
/// omitted.
pub fn compute_stats(leads: &[Lead]) -> DashboardStats {
    let total_leads = leads.len();
    let converted_leads = leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::Converted)
        .count();
    let conversion_rate = if total_leads > 0 {
        converted_leads as f64 / total_leads as f64 * 100.0
    } else {
        0.0
    };

    let mut leads_by_status: Vec<StatusSlice> = Vec::new();
    let mut leads_by_source: Vec<SourceSlice> = Vec::new();

    for lead in leads {
        match leads_by_status.iter_mut().find(|s| s.name == lead.status) {
            Some(slice) => slice.value += 1,
            None => leads_by_status.push(StatusSlice {
                name: lead.status,
                value: 1,
                color: lead.status.color(),
            }),
        }

        match leads_by_source.iter_mut().find(|s| s.name == lead.source) {
            Some(slice) => slice.value += 1,
            None => leads_by_source.push(SourceSlice {
                name: lead.source,
                value: 1,
            }),
        }
    }

    DashboardStats {
        total_leads,
        converted_leads,
        conversion_rate,
        leads_by_status,
        leads_by_source,
    }
}
