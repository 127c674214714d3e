use serde::{Deserialize, Serialize};
use shared_types::ContactField;

/// Bounds applied to captured candidates before they are accepted
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionLimits {
    /// Maximum name length, in characters
    pub max_name_len: usize,
    /// Maximum number of whitespace-separated words in a name
    pub max_name_tokens: usize,
    /// Maximum company length, in characters
    pub max_company_len: usize,
    /// Minimum number of digits a phone number must contain
    pub min_phone_digits: usize,
    /// Words that are never a company on their own (compared lowercase)
    pub company_stopwords: Vec<String>,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self {
            max_name_len: 50,
            max_name_tokens: 5,
            max_company_len: 100,
            min_phone_digits: 10,
            company_stopwords: ["the", "a", "an", "and", "or", "for", "with", "at"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// A user-supplied pattern, tried after the built-in ones for its field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomPatternConfig {
    pub name: String,
    pub field: ContactField,
    pub regex: String,
    #[serde(default = "default_group")]
    pub group: usize,
}

fn default_group() -> usize {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub limits: ExtractionLimits,
    pub custom_patterns: Vec<CustomPatternConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_limits_keep_defaults() {
        let config: ExtractorConfig =
            serde_json::from_str(r#"{ "limits": { "min_phone_digits": 7 } }"#).unwrap();

        assert_eq!(config.limits.min_phone_digits, 7);
        assert_eq!(config.limits.max_name_len, 50);
        assert_eq!(config.limits.company_stopwords.len(), 8);
        assert!(config.custom_patterns.is_empty());
    }

    #[test]
    fn test_custom_pattern_group_defaults_to_one() {
        let pattern: CustomPatternConfig = serde_json::from_str(
            r#"{ "name": "signed_off", "field": "name", "regex": "regards,\\s+(\\w+)" }"#,
        )
        .unwrap();

        assert_eq!(pattern.group, 1);
        assert_eq!(pattern.field, ContactField::Name);
    }
}
