use shared_types::{ContactField, ContactInfo, ExtractionError, ExtractionInput, Extractor};
use tracing::{debug, trace};

use super::guards;
use super::pattern_validator::validate_custom_pattern;
use super::{create_contact_patterns, ContactPattern, ExtractionLimits, ExtractorConfig};

/// Pulls a name, company, email and phone number out of free chat text.
///
/// Each field is handled independently: its patterns are tried in order and
/// the first candidate that passes the field's guard wins. If nothing passes,
/// the field is absent.
pub struct ContactInfoExtractor {
    patterns: Vec<ContactPattern>,
    limits: ExtractionLimits,
}

impl ContactInfoExtractor {
    pub fn new() -> Self {
        Self::with_limits(ExtractionLimits::default())
    }

    pub fn with_limits(limits: ExtractionLimits) -> Self {
        Self {
            patterns: create_contact_patterns(),
            limits,
        }
    }

    pub fn from_config(config: ExtractorConfig) -> Result<Self, ExtractionError> {
        let mut patterns = create_contact_patterns();

        for custom in config.custom_patterns {
            if patterns.iter().any(|p| p.name == custom.name) {
                return Err(ExtractionError::ConfigError(format!(
                    "duplicate pattern name '{}'",
                    custom.name
                )));
            }

            let regex = validate_custom_pattern(&custom)?;
            debug!(pattern = %custom.name, field = %custom.field, "Loaded custom contact pattern");

            patterns.push(ContactPattern {
                name: custom.name,
                regex,
                field: custom.field,
                group: custom.group,
            });
        }

        Ok(Self {
            patterns,
            limits: config.limits,
        })
    }

    pub fn limits(&self) -> &ExtractionLimits {
        &self.limits
    }

    /// Patterns consulted for `field`, in the order they are tried.
    pub fn patterns_for(&self, field: ContactField) -> impl Iterator<Item = &ContactPattern> {
        self.patterns.iter().filter(move |p| p.field == field)
    }

    pub fn extract_field(&self, field: ContactField, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        for pattern in self.patterns_for(field) {
            let Some(candidate) = pattern.capture(text) else {
                continue;
            };

            match guards::accept(field, candidate, &self.limits) {
                Some(value) => {
                    debug!(%field, pattern = %pattern.name, "Matched contact field");
                    return Some(value);
                }
                None => {
                    trace!(%field, pattern = %pattern.name, candidate, "Candidate rejected by guard");
                }
            }
        }

        None
    }

    pub fn name(&self, text: &str) -> Option<String> {
        self.extract_field(ContactField::Name, text)
    }

    pub fn company(&self, text: &str) -> Option<String> {
        self.extract_field(ContactField::Company, text)
    }

    pub fn email(&self, text: &str) -> Option<String> {
        self.extract_field(ContactField::Email, text)
    }

    pub fn phone(&self, text: &str) -> Option<String> {
        self.extract_field(ContactField::Phone, text)
    }

    pub fn extract_text(&self, text: &str) -> ContactInfo {
        ContactInfo {
            name: self.name(text),
            company: self.company(text),
            email: self.email(text),
            phone: self.phone(text),
        }
    }
}

impl Default for ContactInfoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for ContactInfoExtractor {
    fn extract(&self, input: &ExtractionInput) -> ContactInfo {
        match input.usable_text() {
            Some(text) => self.extract_text(text),
            None => ContactInfo::default(),
        }
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact_info::CustomPatternConfig;
    use serde_json::json;

    fn custom(name: &str, field: ContactField, regex: &str) -> CustomPatternConfig {
        CustomPatternConfig {
            name: name.to_string(),
            field,
            regex: regex.to_string(),
            group: 1,
        }
    }

    #[test]
    fn test_extract_via_trait() {
        let extractor = ContactInfoExtractor::new();

        let info = extractor.extract(&ExtractionInput::from(
            "Hi! This is Tom Baker, email tom@baker.dev",
        ));
        assert_eq!(info.name.as_deref(), Some("Tom Baker"));
        assert_eq!(info.email.as_deref(), Some("tom@baker.dev"));
        assert_eq!(info.phone, None);
    }

    #[test]
    fn test_non_string_input_yields_empty_result() {
        let extractor = ContactInfoExtractor::new();

        for value in [json!(null), json!(12345678901u64), json!({"text": "Jane"}), json!(true)] {
            let info = extractor.extract(&ExtractionInput::from_value(&value));
            assert!(info.is_empty(), "expected nothing for {}", value);
        }
    }

    #[test]
    fn test_first_validated_pattern_wins() {
        let extractor = ContactInfoExtractor::new();

        // "the" is rejected as a stopword, the "at" pattern then supplies the
        // company.
        assert_eq!(
            extractor.company("I work for the, uh, people at Hooli"),
            Some("Hooli".to_string())
        );
    }

    #[test]
    fn test_limits_are_configurable() {
        let extractor = ContactInfoExtractor::with_limits(ExtractionLimits {
            max_name_len: 4,
            min_phone_digits: 7,
            ..ExtractionLimits::default()
        });

        assert_eq!(extractor.name("My name is Jonathan"), None);
        assert_eq!(extractor.name("My name is Jon"), Some("Jon".to_string()));
        assert_eq!(extractor.phone("555-1234"), Some("5551234".to_string()));
    }

    #[test]
    fn test_custom_patterns_tried_after_builtins() {
        let config = ExtractorConfig {
            custom_patterns: vec![custom(
                "signed_off",
                ContactField::Name,
                r"(?i)regards,\s+([A-Z][a-z]+)",
            )],
            ..ExtractorConfig::default()
        };
        let extractor = ContactInfoExtractor::from_config(config).unwrap();

        assert_eq!(
            extractor.name("thanks for the help. Kind regards, Priya"),
            Some("Priya".to_string())
        );
        // A built-in phrase still takes precedence
        assert_eq!(
            extractor.name("I am Omar. Kind regards, Priya"),
            Some("Omar".to_string())
        );

        let names: Vec<&str> = extractor
            .patterns_for(ContactField::Name)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names.last(), Some(&"signed_off"));
    }

    #[test]
    fn test_custom_company_pattern_uses_guard() {
        let config = ExtractorConfig {
            custom_patterns: vec![custom(
                "employer_label",
                ContactField::Company,
                r"(?i)employer:\s*(\w+)",
            )],
            ..ExtractorConfig::default()
        };
        let extractor = ContactInfoExtractor::from_config(config).unwrap();

        assert_eq!(
            extractor.company("employer: Umbrella"),
            Some("Umbrella".to_string())
        );
        assert_eq!(extractor.company("employer: the"), None);
    }

    #[test]
    fn test_invalid_custom_pattern_rejected() {
        let config = ExtractorConfig {
            custom_patterns: vec![custom("broken", ContactField::Email, r"([a-z")],
            ..ExtractorConfig::default()
        };

        assert!(matches!(
            ContactInfoExtractor::from_config(config),
            Err(ExtractionError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_duplicate_pattern_name_rejected() {
        let config = ExtractorConfig {
            custom_patterns: vec![custom("my_name_is", ContactField::Name, r"(\w+)")],
            ..ExtractorConfig::default()
        };

        assert!(matches!(
            ContactInfoExtractor::from_config(config),
            Err(ExtractionError::ConfigError(_))
        ));
    }
}
