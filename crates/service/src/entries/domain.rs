use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and content are required";

/// One journal entry as persisted and returned over HTTP.
///
/// `id` and `date` are fixed at creation. `updatedAt` is absent until the
/// first update and is omitted from the JSON while absent. Timestamps are
/// kept at millisecond precision and written as `2024-06-10T06:13:20.000Z`.
/// Unknown fields make the entry, and so the whole document, unreadable.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(with = "rfc3339_millis")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "rfc3339_millis::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Current time truncated to the precision timestamps are stored at.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

mod rfc3339_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(ts: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => super::serialize(ts, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
            #[derive(Deserialize)]
            struct Wrapped(#[serde(with = "super")] DateTime<Utc>);
            Ok(Option::<Wrapped>::deserialize(d)?.map(|Wrapped(ts)| ts))
        }
    }
}

impl Entry {
    /// Build a fresh entry with a random id, stamped with the current time.
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            date: now_millis(),
            updated_at: None,
        }
    }

    /// Replace title and content and refresh `updated_at`; id and date stay.
    pub fn revise(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.updated_at = Some(now_millis());
    }
}

/// Create/update request body. Fields are optional so that a missing field
/// surfaces as a validation error rather than a body rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EntryInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl EntryInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: Some(title.into()), content: Some(content.into()) }
    }

    /// Both fields must be present and non-empty. Whitespace is kept as is.
    pub fn validate(self) -> Result<(String, String), ServiceError> {
        match (self.title, self.content) {
            (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
                Ok((title, content))
            }
            _ => Err(ServiceError::Validation(REQUIRED_FIELDS_MESSAGE.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_has_id_and_date_but_no_updated_at() {
        let before = Utc::now().trunc_subsecs(3);
        let e = Entry::new("Day One".into(), "Hello\nWorld".into());
        assert!(!e.id.is_empty());
        assert!(e.date >= before);
        assert!(e.updated_at.is_none());
        assert_ne!(e.id, Entry::new("a".into(), "b".into()).id);
    }

    #[test]
    fn revise_keeps_identity() {
        let mut e = Entry::new("t".into(), "c".into());
        let (id, date) = (e.id.clone(), e.date);
        e.revise("t2".into(), "c2".into());
        assert_eq!(e.id, id);
        assert_eq!(e.date, date);
        assert_eq!(e.title, "t2");
        assert_eq!(e.content, "c2");
        assert!(e.updated_at.unwrap() >= date);
    }

    #[test]
    fn json_shape_uses_camel_case_and_omits_missing_updated_at() {
        let mut e = Entry::new("t".into(), "c".into());
        let v = serde_json::to_value(&e).unwrap();
        assert!(v.get("updatedAt").is_none());
        assert!(v.get("date").unwrap().is_string());

        e.revise("t".into(), "c".into());
        let v = serde_json::to_value(&e).unwrap();
        assert!(v.get("updatedAt").unwrap().is_string());
        assert!(v.get("updated_at").is_none());
    }

    #[test]
    fn timestamps_are_written_with_millisecond_precision() {
        let mut e = Entry::new("t".into(), "c".into());
        e.revise("t".into(), "c".into());
        let v = serde_json::to_value(&e).unwrap();
        for field in ["date", "updatedAt"] {
            let ts = v[field].as_str().unwrap();
            assert_eq!(ts.len(), 24, "{field}: {ts}");
            assert_eq!(&ts[19..20], ".");
            assert!(ts.ends_with('Z'));
        }
        let back: Entry = serde_json::from_value(v).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn parses_documents_written_by_browsers() {
        let raw = r#"{
            "id": "1718000000000",
            "title": "Old",
            "content": "Body",
            "date": "2024-06-10T06:13:20.000Z",
            "updatedAt": "2024-06-11T08:00:00.000Z"
        }"#;
        let e: Entry = serde_json::from_str(raw).unwrap();
        assert_eq!(e.id, "1718000000000");
        assert!(e.updated_at.unwrap() > e.date);
    }

    #[test]
    fn rejects_non_conforming_entries() {
        assert!(serde_json::from_str::<Entry>(r#"{"id":"1","title":"t","content":"c"}"#).is_err());
        assert!(serde_json::from_str::<Entry>(r#"{"id":1,"title":"t","content":"c","date":"2024-06-10T06:13:20Z"}"#).is_err());
        assert!(serde_json::from_str::<Entry>(r#"{"id":"1","title":"t","content":"c","date":"yesterday"}"#).is_err());
        assert!(serde_json::from_str::<Entry>(
            r#"{"id":"1","title":"t","content":"c","date":"2024-06-10T06:13:20Z","mood":"happy"}"#
        )
        .is_err());
    }

    #[test]
    fn validation_requires_both_fields() {
        assert_eq!(EntryInput::new("t", "c").validate().unwrap(), ("t".into(), "c".into()));
        assert!(matches!(EntryInput::new("", "c").validate(), Err(ServiceError::Validation(_))));
        assert!(matches!(EntryInput::new("t", "").validate(), Err(ServiceError::Validation(_))));
        assert!(matches!(EntryInput::default().validate(), Err(ServiceError::Validation(_))));
        let only_title = EntryInput { title: Some("t".into()), content: None };
        assert!(matches!(only_title.validate(), Err(ServiceError::Validation(_))));
        // presence check only
        assert!(EntryInput::new(" ", " ").validate().is_ok());
    }
}
