//! Lead query engine: search, filter, sort and paginate a lead collection.
//!
//! The engine is a pure function of the leads it is handed and the query. It
//! never touches the store, so a caller may drop a superseded result without
//! any cleanup.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::domain::lead::Lead;
use crate::domain::query::{LeadQuery, SortKey, SortOrder};
use crate::pagination::ResultPage;

/// Comparable value of one lead attribute.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue<'a> {
    Text(&'a str),
    Time(DateTime<Utc>),
}

fn sort_value(lead: &Lead, key: SortKey) -> Option<SortValue<'_>> {
    match key {
        SortKey::Id => Some(SortValue::Text(lead.id.as_str())),
        SortKey::Name => Some(SortValue::Text(lead.name.as_str())),
        SortKey::Email => Some(SortValue::Text(lead.email.as_str())),
        SortKey::Phone => Some(SortValue::Text(lead.phone.as_str())),
        SortKey::Company => lead.company.as_deref().map(SortValue::Text),
        SortKey::Status => Some(SortValue::Text(lead.status.as_str())),
        SortKey::Source => Some(SortValue::Text(lead.source.as_str())),
        SortKey::CreatedAt => Some(SortValue::Time(lead.created_at)),
        SortKey::Notes => lead.notes.as_deref().map(SortValue::Text),
        SortKey::LastContacted => lead.last_contacted.map(SortValue::Time),
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

fn matches_search(lead: &Lead, needle: &str) -> bool {
    lead.name.to_lowercase().contains(needle) || lead.email.to_lowercase().contains(needle)
}

/// Stable-sorts `leads` by `key`.
///
/// Leads without a value for `key` stay where they are; the others are sorted
/// among the remaining positions.
fn sort_leads<'a>(leads: &mut [&'a Lead], key: SortKey, order: SortOrder) {
    let mut keyed: Vec<(usize, SortValue<'a>, &'a Lead)> = leads
        .iter()
        .enumerate()
        .filter_map(|(slot, &lead)| sort_value(lead, key).map(|value| (slot, value, lead)))
        .collect();

    let slots: Vec<usize> = keyed.iter().map(|(slot, _, _)| *slot).collect();
    keyed.sort_by(|a, b| directed(a.1.cmp(&b.1), order));

    for (slot, (_, _, lead)) in slots.into_iter().zip(keyed) {
        leads[slot] = lead;
    }
}

/// Returns the requested page of leads matching `query`.
///
/// Filters apply in order search, status, source; then the survivors are
/// sorted and sliced. A page past the end yields empty `data` with accurate
/// `total` and `total_pages`.
pub fn query_leads(leads: &[Lead], query: &LeadQuery) -> ResultPage<Lead> {
    let needle = query
        .search
        .as_deref()
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<&Lead> = leads
        .iter()
        .filter(|lead| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_search(lead, needle))
        })
        .filter(|lead| query.status.matches(&lead.status))
        .filter(|lead| query.source.matches(&lead.source))
        .collect();

    sort_leads(&mut matched, query.sort_key, query.sort_order);

    let total = matched.len();
    let start = (query.page() - 1).saturating_mul(query.page_size());
    let data = matched
        .into_iter()
        .skip(start)
        .take(query.page_size())
        .cloned()
        .collect();

    ResultPage::new(data, total, query.page(), query.page_size())
}
