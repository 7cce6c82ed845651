//! Serde helper functions for request deserialization.
//!
//! Clients frequently send blank strings for optional free-text fields;
//! these are normalised to `None` so that, for example, a blank category
//! never produces a category view keyed by an empty label.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating blank strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        label: Option<String>,
    }

    #[test]
    fn test_blank_string_is_none() {
        let form: Form = serde_json::from_str(r#"{"label":"   "}"#).unwrap();
        assert!(form.label.is_none());
    }

    #[test]
    fn test_missing_field_is_none() {
        let form: Form = serde_json::from_str("{}").unwrap();
        assert!(form.label.is_none());
    }

    #[test]
    fn test_value_is_kept() {
        let form: Form = serde_json::from_str(r#"{"label":"travel"}"#).unwrap();
        assert_eq!(form.label.as_deref(), Some("travel"));
    }
}
