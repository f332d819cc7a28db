#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use nexus_crm::domain::lead::{Lead, NewLead};
use nexus_crm::domain::types::{
    LeadEmail, LeadId, LeadName, LeadSource, LeadStatus, PhoneNumber,
};

/// Midnight UTC of an ISO calendar date.
pub fn date(iso: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

pub fn new_lead(id: &str, name: &str, status: LeadStatus, source: LeadSource) -> NewLead {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    NewLead::new(
        LeadId::new(id).unwrap(),
        LeadName::new(name).unwrap(),
        LeadEmail::new(email).unwrap(),
        PhoneNumber::new("+1 (555) 123-4567").unwrap(),
        status,
        source,
        date("2024-01-01"),
    )
}

pub fn lead(id: &str, name: &str, status: LeadStatus, source: LeadSource) -> Lead {
    new_lead(id, name, status, source).into()
}

/// `count` leads named `Lead 1..=count`, cycling through statuses and sources.
pub fn numbered_leads(count: usize) -> Vec<Lead> {
    (1..=count)
        .map(|i| {
            let status = LeadStatus::ALL[i % LeadStatus::ALL.len()];
            let source = LeadSource::ALL[i % LeadSource::ALL.len()];
            lead(&format!("lead_{i}"), &format!("Lead {i}"), status, source)
        })
        .collect()
}
