use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CompanyName, LeadEmail, LeadId, LeadName, LeadNotes, LeadSource, LeadStatus, PhoneNumber,
};

/// A sales prospect tracked by the CRM.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: LeadId,
    pub name: LeadName,
    pub email: LeadEmail,
    pub phone: PhoneNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyName>,
    pub status: LeadStatus,
    pub source: LeadSource,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<LeadNotes>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub last_contacted: Option<DateTime<Utc>>,
}

/// Timestamps on the wire always carry milliseconds and a `Z` suffix,
/// e.g. `2024-01-01T00:00:00.000Z`.
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    fn format(at: &DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(at))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }

    pub mod option {
        use super::{DateTime, Deserialize, Deserializer, Serializer, Utc, format};

        pub fn serialize<S: Serializer>(
            at: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match at {
                Some(at) => serializer.serialize_str(&format(at)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<DateTime<Utc>>::deserialize(deserializer)
        }
    }
}

/// Payload used to add a lead to the store.
#[derive(Clone, Debug, Deserialize)]
pub struct NewLead {
    pub id: LeadId,
    pub name: LeadName,
    pub email: LeadEmail,
    pub phone: PhoneNumber,
    pub company: Option<CompanyName>,
    pub status: LeadStatus,
    pub source: LeadSource,
    pub created_at: DateTime<Utc>,
    pub notes: Option<LeadNotes>,
    pub last_contacted: Option<DateTime<Utc>>,
}

impl NewLead {
    /// Creates a lead payload with the mandatory fields; optional ones start empty.
    #[must_use]
    pub fn new(
        id: LeadId,
        name: LeadName,
        email: LeadEmail,
        phone: PhoneNumber,
        status: LeadStatus,
        source: LeadSource,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            company: None,
            status,
            source,
            created_at,
            notes: None,
            last_contacted: None,
        }
    }

    #[must_use]
    pub fn company(mut self, company: CompanyName) -> Self {
        self.company = Some(company);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: LeadNotes) -> Self {
        self.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn last_contacted(mut self, at: DateTime<Utc>) -> Self {
        self.last_contacted = Some(at);
        self
    }
}

impl From<NewLead> for Lead {
    fn from(new: NewLead) -> Self {
        Self {
            id: new.id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            company: new.company,
            status: new.status,
            source: new.source,
            created_at: new.created_at,
            notes: new.notes,
            last_contacted: new.last_contacted,
        }
    }
}

impl Lead {
    /// First word of the lead's name, used to greet them.
    pub fn first_name(&self) -> &str {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or(self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample() -> NewLead {
        NewLead::new(
            LeadId::new("lead_1").unwrap(),
            LeadName::new("Patricia Davis").unwrap(),
            LeadEmail::new("patricia.davis@techcorp.com").unwrap(),
            PhoneNumber::new("+1 (555) 010-2030").unwrap(),
            LeadStatus::Contacted,
            LeadSource::Social,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn timestamps_serialize_with_milliseconds() {
        let lead: Lead = sample()
            .last_contacted(Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap())
            .into();

        let json = serde_json::to_value(&lead).unwrap();

        assert_eq!(json["_id"], "lead_1");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00.000Z");
        assert_eq!(json["lastContacted"], "2024-02-03T04:05:06.000Z");
        assert!(json.get("company").is_none());
    }

    #[test]
    fn lead_json_round_trips() {
        let lead: Lead = sample().into();
        let json = serde_json::to_string(&lead).unwrap();

        let back: Lead = serde_json::from_str(&json).unwrap();

        assert_eq!(back, lead);
        assert_eq!(back.last_contacted, None);
    }

    #[test]
    fn first_name_is_first_word() {
        let lead: Lead = sample().into();
        assert_eq!(lead.first_name(), "Patricia");
    }
}
