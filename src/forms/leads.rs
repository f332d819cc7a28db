use serde::Deserialize;
use validator::Validate;

use crate::domain::query::{DEFAULT_PAGE_SIZE, FieldFilter, LeadQuery, SortKey, SortOrder};
use crate::domain::types::{LeadSource, LeadStatus};
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Query string accepted by the lead listing endpoint.
pub struct LeadListForm {
    /// 1-based page number, defaults to 1.
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    /// Page size, defaults to 10.
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
    /// Lead field name such as `createdAt` or `name`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_order: Option<String>,
    pub search: Option<String>,
    /// A status name, or `All`.
    pub status: Option<String>,
    /// A source name, or `All`.
    pub source: Option<String>,
}

impl TryFrom<LeadListForm> for LeadQuery {
    type Error = FormError;

    fn try_from(form: LeadListForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let sort_key = match form.sort_by.as_deref() {
            Some(raw) => raw
                .parse::<SortKey>()
                .map_err(|_| FormError::InvalidSortKey(raw.to_string()))?,
            None => SortKey::default(),
        };
        let sort_order = match form.sort_order.as_deref() {
            Some(raw) => raw
                .parse::<SortOrder>()
                .map_err(|_| FormError::InvalidSortOrder(raw.to_string()))?,
            None => SortOrder::default(),
        };
        let status = match form.status.as_deref() {
            Some(raw) => raw
                .parse::<FieldFilter<LeadStatus>>()
                .map_err(|_| FormError::InvalidStatus(raw.to_string()))?,
            None => FieldFilter::All,
        };
        let source = match form.source.as_deref() {
            Some(raw) => raw
                .parse::<FieldFilter<LeadSource>>()
                .map_err(|_| FormError::InvalidSource(raw.to_string()))?,
            None => FieldFilter::All,
        };
        let search = form
            .search
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        let query = LeadQuery::new(
            form.page.unwrap_or(1),
            form.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        )?
        .sort(sort_key, sort_order)
        .status(status)
        .source(source)
        .search(search);

        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_yields_default_query() {
        let query = LeadQuery::try_from(LeadListForm::default()).unwrap();
        assert_eq!(query, LeadQuery::default());
    }

    #[test]
    fn parses_every_parameter() {
        let form = LeadListForm {
            page: Some(3),
            limit: Some(25),
            sort_by: Some("name".into()),
            sort_order: Some("asc".into()),
            search: Some("  smith ".into()),
            status: Some("Converted".into()),
            source: Some("All".into()),
        };

        let query = LeadQuery::try_from(form).unwrap();

        assert_eq!(query.page(), 3);
        assert_eq!(query.page_size(), 25);
        assert_eq!(query.sort_key, SortKey::Name);
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert_eq!(query.search.as_deref(), Some("smith"));
        assert_eq!(query.status, FieldFilter::Only(LeadStatus::Converted));
        assert_eq!(query.source, FieldFilter::<LeadSource>::All);
    }

    #[test]
    fn rejects_zero_page() {
        let form = LeadListForm {
            page: Some(0),
            ..LeadListForm::default()
        };
        assert!(matches!(
            LeadQuery::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn rejects_unknown_sort_key_and_status() {
        let form = LeadListForm {
            sort_by: Some("password".into()),
            ..LeadListForm::default()
        };
        assert!(matches!(
            LeadQuery::try_from(form),
            Err(FormError::InvalidSortKey(key)) if key == "password"
        ));

        let form = LeadListForm {
            status: Some("Pending".into()),
            ..LeadListForm::default()
        };
        assert!(matches!(
            LeadQuery::try_from(form),
            Err(FormError::InvalidStatus(_))
        ));
    }
}
