use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{ContactField, ContactInfo};

/// Core trait that all contact extractors must implement
pub trait Extractor {
    /// Extract contact details from input. Never fails: anything that does
    /// not match simply comes back as an absent field.
    fn extract(&self, input: &ExtractionInput) -> ContactInfo;

    /// Which fields does this extractor fill in?
    fn fields(&self) -> &[ContactField] {
        &ContactField::ALL
    }

    /// Get extractor version for tracking
    fn version(&self) -> String {
        "1.0.0".to_string()
    }
}

/// Extraction error types
///
/// Raised only while building an extractor (bad configuration, bad custom
/// pattern) or by callers validating their own input. Extraction itself
/// does not fail.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Invalid pattern '{name}': {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Input provided to extractors: one chat message, possibly missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtractionInput {
    pub text: Option<String>,
}

impl ExtractionInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Build an input from an arbitrary JSON value. Only strings carry text;
    /// numbers, objects, nulls and the rest become an absent input.
    pub fn from_value(value: &serde_json::Value) -> Self {
        Self {
            text: value.as_str().map(str::to_string),
        }
    }

    /// The text to extract from, or `None` when there is nothing usable.
    pub fn usable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}

impl From<&str> for ExtractionInput {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ExtractionInput {
    fn from(text: String) -> Self {
        Self { text: Some(text) }
    }
}

impl From<Option<&str>> for ExtractionInput {
    fn from(text: Option<&str>) -> Self {
        Self {
            text: text.map(str::to_string),
        }
    }
}
