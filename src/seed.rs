//! Demo data: random lead generation and CSV import.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::lead::NewLead;
use crate::domain::types::{
    CompanyName, LeadEmail, LeadId, LeadName, LeadNotes, LeadSource, LeadStatus, PhoneNumber,
    TypeConstraintError,
};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];
const COMPANIES: &[&str] = &[
    "TechCorp",
    "Innovate",
    "GlobalSol",
    "NetWorks",
    "AlphaStream",
    "BlueSky",
    "RapidScale",
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read leads file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid lead on line {line}: {reason}")]
    Row { line: u64, reason: String },

    #[error("invalid generated lead: {0}")]
    Invalid(#[from] TypeConstraintError),
}

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// Generates `count` leads with ids `lead_1..=lead_count`, created within the
/// year before `now`.
pub fn generate_leads<R: Rng>(
    count: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<Vec<NewLead>, SeedError> {
    let mut leads = Vec::with_capacity(count);

    for i in 1..=count {
        let first_name = pick(rng, FIRST_NAMES);
        let last_name = pick(rng, LAST_NAMES);
        let company = pick(rng, COMPANIES);
        let status = LeadStatus::ALL[rng.gen_range(0..LeadStatus::ALL.len())];
        let source = LeadSource::ALL[rng.gen_range(0..LeadSource::ALL.len())];
        let created_at = now - Duration::days(rng.gen_range(0..365));

        let email = format!(
            "{}.{}@{}.com",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            company.to_lowercase()
        );
        let phone = format!(
            "+1 (555) {}-{}",
            rng.gen_range(100..1000),
            rng.gen_range(1000..10000)
        );

        let lead = NewLead::new(
            LeadId::new(format!("lead_{i}"))?,
            LeadName::new(format!("{first_name} {last_name}"))?,
            LeadEmail::new(email)?,
            PhoneNumber::new(phone)?,
            status,
            source,
            created_at,
        )
        .company(CompanyName::new(company)?)
        .notes(LeadNotes::new(format!(
            "Generated dummy lead #{i} for testing purposes."
        ))?);

        leads.push(lead);
    }

    Ok(leads)
}

/// Raw CSV record, validated into a [`NewLead`] by [`parse_row`].
#[derive(Debug, Deserialize)]
struct CsvLead {
    id: String,
    name: String,
    email: String,
    phone: String,
    company: Option<String>,
    status: String,
    source: String,
    created_at: String,
    notes: Option<String>,
    last_contacted: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| format!("bad timestamp {raw:?}: {err}"))
}

fn parse_row(row: CsvLead) -> Result<NewLead, String> {
    let status: LeadStatus = row.status.parse().map_err(|e| format!("status: {e}"))?;
    let source: LeadSource = row.source.parse().map_err(|e| format!("source: {e}"))?;

    let mut lead = NewLead::new(
        LeadId::new(row.id).map_err(|e| format!("id: {e}"))?,
        LeadName::new(row.name).map_err(|e| format!("name: {e}"))?,
        LeadEmail::new(row.email).map_err(|e| format!("email: {e}"))?,
        PhoneNumber::new(row.phone).map_err(|e| format!("phone: {e}"))?,
        status,
        source,
        parse_timestamp(&row.created_at)?,
    );

    if let Some(company) = non_blank(row.company) {
        lead = lead.company(CompanyName::new(company).map_err(|e| format!("company: {e}"))?);
    }
    // Notes that sanitize down to nothing are dropped rather than rejected.
    if let Some(notes) = non_blank(row.notes).and_then(|n| LeadNotes::new(n).ok()) {
        lead = lead.notes(notes);
    }
    if let Some(raw) = non_blank(row.last_contacted) {
        lead = lead.last_contacted(parse_timestamp(&raw)?);
    }

    Ok(lead)
}

/// Reads leads from a CSV file with a header row.
pub fn load_csv(path: &Path) -> Result<Vec<NewLead>, SeedError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let mut leads = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());
        let row: CsvLead = record.deserialize(Some(&headers))?;
        let lead = parse_row(row).map_err(|reason| SeedError::Row { line, reason })?;
        leads.push(lead);
    }

    log::info!("Loaded {} leads from {}", leads.len(), path.display());
    Ok(leads)
}
