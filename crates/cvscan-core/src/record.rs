use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One of the five fields of an [`ExtractionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Skills,
    WorkExperience,
}

impl Field {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Skills,
        Self::WorkExperience,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Skills => "skills",
            Self::WorkExperience => "work_experience",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Structured fields pulled out of one resume.
///
/// Every field is always present. A field with no confident match holds an
/// empty string or an empty list. Deserialization accepts records with
/// missing or `null` fields and fills the same defaults, so older stored
/// records load cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    /// Canonical skill names, sorted and deduplicated.
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    /// Up to five lines from the work history section, in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_experience: Vec<String>,
}

impl ExtractionResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.skills.is_empty()
            && self.work_experience.is_empty()
    }

    /// Number of fields holding a non-default value.
    pub fn populated_fields(&self) -> usize {
        [
            !self.name.is_empty(),
            !self.email.is_empty(),
            !self.phone.is_empty(),
            !self.skills.is_empty(),
            !self.work_experience.is_empty(),
        ]
        .into_iter()
        .filter(|populated| *populated)
        .count()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_serializes_every_key() {
        let json = serde_json::to_value(ExtractionResult::default()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "",
                "email": "",
                "phone": "",
                "skills": [],
                "work_experience": []
            })
        );
    }

    #[test]
    fn test_missing_and_null_fields_are_repaired() {
        let record: ExtractionResult =
            serde_json::from_str(r#"{"name": "Ada Lovelace", "phone": null, "skills": null}"#)
                .unwrap();

        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.phone, "");
        assert!(record.skills.is_empty());
        assert!(record.work_experience.is_empty());
    }

    #[test]
    fn test_populated_fields() {
        let mut record = ExtractionResult::new();
        assert!(record.is_empty());
        assert_eq!(record.populated_fields(), 0);

        record.email = "ada@example.com".into();
        record.skills = vec!["Python".into()];

        assert!(!record.is_empty());
        assert_eq!(record.populated_fields(), 2);
    }

    #[test]
    fn test_field_keys() {
        let keys: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            ["name", "email", "phone", "skills", "work_experience"]
        );
        assert_eq!(Field::WorkExperience.to_string(), "work_experience");
    }
}
