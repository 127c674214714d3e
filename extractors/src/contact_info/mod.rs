mod config;
mod extractor;
mod guards;
mod pattern_validator;

pub use config::{CustomPatternConfig, ExtractionLimits, ExtractorConfig};
pub use extractor::ContactInfoExtractor;
pub use pattern_validator::validate_custom_pattern;

use once_cell::sync::Lazy;
use regex::Regex;
use shared_types::{ContactField, ContactInfo};

/// One ordered extraction rule: a regex plus the capture group holding the
/// candidate value for `field`.
#[derive(Debug, Clone)]
pub struct ContactPattern {
    pub name: String,
    pub regex: Regex,
    pub field: ContactField,
    pub group: usize,
}

impl ContactPattern {
    /// Candidate from the first match of this pattern, if any.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        let captures = self.regex.captures(text)?;
        captures.get(self.group).map(|m| m.as_str())
    }
}

// One word or two capitalized words, e.g. "Jane" or "Jane Doe"
const NAME_CAPTURE: &str = r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)";

// A capitalized token followed by letters, digits, spaces or '&'
const COMPANY_CAPTURE: &str = r"([A-Z][A-Za-z0-9\s&]*)";

fn builtin(name: &str, field: ContactField, pattern: &str) -> ContactPattern {
    ContactPattern {
        name: name.to_string(),
        regex: Regex::new(pattern).expect("built-in contact pattern must compile"),
        field,
        group: 1,
    }
}

/// Built-in patterns, in the order they are tried for each field.
pub fn create_contact_patterns() -> Vec<ContactPattern> {
    let name_phrases = [
        ("my_name_is", r"my name is"),
        ("i_am_contracted", r"i['’]m"),
        ("i_am", r"i am"),
        ("call_me", r"call me"),
        ("this_is", r"this is"),
        ("name_is", r"name is"),
    ];

    let mut patterns: Vec<ContactPattern> = name_phrases
        .iter()
        .map(|(name, phrase)| {
            builtin(
                name,
                ContactField::Name,
                &format!(r"(?i)\b{}\s+{}", phrase, NAME_CAPTURE),
            )
        })
        .collect();

    patterns.extend([
        // The whole message is just a name, e.g. a reply to "what's your name?"
        builtin(
            "bare_name",
            ContactField::Name,
            &format!(r"^{}$", NAME_CAPTURE),
        ),
        // Company patterns
        builtin(
            "company_keyword",
            ContactField::Company,
            &format!(
                r"(?i)\b(?:company|firm|organi[sz]ation|i work for|i work at|from)\s+{}",
                COMPANY_CAPTURE
            ),
        ),
        builtin(
            "at_or_with",
            ContactField::Company,
            &format!(r"(?i)\b(?:at|with)\s+{}", COMPANY_CAPTURE),
        ),
        // Email and phone. Word characters are ASCII only.
        ContactPattern {
            name: "email_address".to_string(),
            regex: Regex::new(r"(?-u:[\w.-]+@[\w.-]+\.\w+)")
                .expect("built-in email pattern must compile"),
            field: ContactField::Email,
            group: 0,
        },
        ContactPattern {
            name: "phone_number".to_string(),
            regex: Regex::new(
                r"(?:\+?[0-9]{1,4}[\s-]?)?\(?[0-9]{1,4}\)?[\s-]?[0-9]{1,4}[\s-]?[0-9]{1,9}",
            )
            .expect("built-in phone pattern must compile"),
            field: ContactField::Phone,
            group: 0,
        },
    ]);

    patterns
}

static DEFAULT_EXTRACTOR: Lazy<ContactInfoExtractor> = Lazy::new(ContactInfoExtractor::new);

pub fn extract_name<'a>(text: impl Into<Option<&'a str>>) -> Option<String> {
    DEFAULT_EXTRACTOR.name(text.into()?)
}

pub fn extract_company<'a>(text: impl Into<Option<&'a str>>) -> Option<String> {
    DEFAULT_EXTRACTOR.company(text.into()?)
}

pub fn extract_email<'a>(text: impl Into<Option<&'a str>>) -> Option<String> {
    DEFAULT_EXTRACTOR.email(text.into()?)
}

pub fn extract_phone<'a>(text: impl Into<Option<&'a str>>) -> Option<String> {
    DEFAULT_EXTRACTOR.phone(text.into()?)
}

/// Run all four extractions with the built-in patterns and default limits.
pub fn extract_contact_info<'a>(text: impl Into<Option<&'a str>>) -> ContactInfo {
    match text.into() {
        Some(text) => DEFAULT_EXTRACTOR.extract_text(text),
        None => ContactInfo::default(),
    }
}
