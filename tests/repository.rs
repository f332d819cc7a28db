use std::io::Write;

use nexus_crm::domain::types::{LeadId, LeadSource, LeadStatus};
use nexus_crm::repository::errors::RepositoryError;
use nexus_crm::repository::{InMemoryRepository, LeadReader, LeadWriter};
use nexus_crm::seed::{SeedError, load_csv};

mod common;

use common::new_lead;

#[test]
fn test_in_memory_repository_create_and_read() {
    let repo = InMemoryRepository::new();
    let alice = new_lead("lead_1", "Alice Smith", LeadStatus::New, LeadSource::Ads);
    let bob = new_lead("lead_2", "Bob Jones", LeadStatus::Lost, LeadSource::Social);

    assert_eq!(repo.create_leads(&[alice, bob]).unwrap(), 2);

    let all = repo.list_leads().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id.as_str(), "lead_1");
    assert_eq!(all[1].id.as_str(), "lead_2");

    let found = repo
        .get_lead_by_id(&LeadId::new("lead_2").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(found.name.as_str(), "Bob Jones");

    assert!(
        repo.get_lead_by_id(&LeadId::new("lead_3").unwrap())
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_duplicate_ids_are_rejected_atomically() {
    let repo = InMemoryRepository::new();
    repo.create_leads(&[new_lead("lead_1", "Alice", LeadStatus::New, LeadSource::Ads)])
        .unwrap();

    let result = repo.create_leads(&[
        new_lead("lead_2", "Bob", LeadStatus::New, LeadSource::Ads),
        new_lead("lead_1", "Alice Again", LeadStatus::New, LeadSource::Ads),
    ]);

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
    assert_eq!(repo.list_leads().unwrap().len(), 1);
}

#[test]
fn test_clones_share_the_same_store() {
    let repo = InMemoryRepository::new();
    let handle = repo.clone();

    handle
        .create_leads(&[new_lead("lead_1", "Alice", LeadStatus::New, LeadSource::Ads)])
        .unwrap();

    assert_eq!(repo.list_leads().unwrap().len(), 1);
}

#[test]
fn test_load_csv_parses_optional_columns() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "id,name,email,phone,company,status,source,created_at,notes,last_contacted"
    )
    .unwrap();
    writeln!(
        file,
        "lead_1,Mary Davis,Mary.Davis@BlueSky.com,+1 (555) 222-3333,BlueSky,Contacted,Referral,2024-02-03T10:00:00Z,Met at expo,2024-02-10T09:00:00Z"
    )
    .unwrap();
    writeln!(
        file,
        "lead_2,John Brown,john.brown@example.com,+1 (555) 444-5555,,New,Website,2023-11-20T08:30:00+02:00,,"
    )
    .unwrap();

    let leads = load_csv(file.path()).unwrap();

    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].email.as_str(), "mary.davis@bluesky.com");
    assert_eq!(leads[0].company.as_deref(), Some("BlueSky"));
    assert_eq!(leads[0].notes.as_deref(), Some("Met at expo"));
    assert!(leads[0].last_contacted.is_some());
    assert_eq!(leads[1].company, None);
    assert_eq!(leads[1].notes, None);
    assert_eq!(leads[1].last_contacted, None);
    assert_eq!(
        leads[1].created_at.to_rfc3339(),
        "2023-11-20T06:30:00+00:00"
    );
}

#[test]
fn test_load_csv_reports_bad_row() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "id,name,email,phone,company,status,source,created_at,notes,last_contacted"
    )
    .unwrap();
    writeln!(
        file,
        "lead_1,Mary Davis,mary@example.com,555,,Pending,Ads,2024-02-03T10:00:00Z,,"
    )
    .unwrap();

    let result = load_csv(file.path());

    match result {
        Err(SeedError::Row { line, reason }) => {
            assert_eq!(line, 2);
            assert!(reason.starts_with("status"));
        }
        other => panic!("expected row error, got {other:?}"),
    }
}
