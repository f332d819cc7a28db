//! Filter, sort and page parameters for one lead listing request.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{LeadSource, LeadStatus, TypeConstraintError};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Field of [`crate::domain::lead::Lead`] a listing can be ordered by.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[serde(rename = "_id", alias = "id")]
    Id,
    Name,
    Email,
    Phone,
    Company,
    Status,
    Source,
    #[default]
    CreatedAt,
    Notes,
    LastContacted,
}

impl SortKey {
    pub const ALL: &'static [SortKey] = &[
        SortKey::Id,
        SortKey::Name,
        SortKey::Email,
        SortKey::Phone,
        SortKey::Company,
        SortKey::Status,
        SortKey::Source,
        SortKey::CreatedAt,
        SortKey::Notes,
        SortKey::LastContacted,
    ];

    /// JSON field name of the lead attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Id => "_id",
            SortKey::Name => "name",
            SortKey::Email => "email",
            SortKey::Phone => "phone",
            SortKey::Company => "company",
            SortKey::Status => "status",
            SortKey::Source => "source",
            SortKey::CreatedAt => "createdAt",
            SortKey::Notes => "notes",
            SortKey::LastContacted => "lastContacted",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "id" {
            return Ok(SortKey::Id);
        }
        SortKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == trimmed)
            .ok_or_else(|| TypeConstraintError::InvalidValue(trimmed.to_string()))
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Either every value passes, or only the given one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldFilter<T> {
    All,
    Only(T),
}

impl<T> Default for FieldFilter<T> {
    fn default() -> Self {
        FieldFilter::All
    }
}

impl<T: PartialEq> FieldFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr<Err = TypeConstraintError>> FromStr for FieldFilter<T> {
    type Err = TypeConstraintError;

    /// `All` (any case) or an empty string means no filtering.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(FieldFilter::All)
        } else {
            trimmed.parse().map(FieldFilter::Only)
        }
    }
}

/// Query Specification for one listing request.
///
/// Page and page size are validated on construction, so every value of this
/// type describes a reachable slicing of the result set (even when the page
/// itself lies past the end).
#[derive(Clone, Debug, PartialEq)]
pub struct LeadQuery {
    page: usize,
    page_size: usize,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub search: Option<String>,
    pub status: FieldFilter<LeadStatus>,
    pub source: FieldFilter<LeadSource>,
}

impl Default for LeadQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            search: None,
            status: FieldFilter::All,
            source: FieldFilter::All,
        }
    }
}

impl LeadQuery {
    /// Creates a query for the given page with default sort and no filters.
    pub fn new(page: usize, page_size: usize) -> Result<Self, TypeConstraintError> {
        if page == 0 {
            return Err(TypeConstraintError::NonPositivePage);
        }
        if page_size == 0 {
            return Err(TypeConstraintError::NonPositivePageSize);
        }
        Ok(Self {
            page,
            page_size,
            ..Self::default()
        })
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sets the search term. An empty term clears the search.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.is_empty() { None } else { Some(term) };
        self
    }

    #[must_use]
    pub fn status(mut self, status: FieldFilter<LeadStatus>) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn source(mut self, source: FieldFilter<LeadSource>) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_key = key;
        self.sort_order = order;
        self
    }
}
