//! Extractors Crate
//!
//! This crate provides pattern-based extraction of contact details (name,
//! company, email, phone) from free chat text.
//!
//! # Architecture
//!
//! - **Types**: `ContactInfo`, `ExtractionInput` and the `Extractor` trait live in the
//!   `shared-types` crate
//! - **Implementations**: the ordered pattern table, validation guards and the
//!   `ContactInfoExtractor` live in this crate
//!
//! # Example
//!
//! ```rust
//! use extractors::{extract_email, extract_name, ContactInfoExtractor};
//!
//! assert_eq!(extract_name("My name is John Smith"), Some("John Smith".to_string()));
//! assert_eq!(extract_email("mail a.b@example.co.uk"), Some("a.b@example.co.uk".to_string()));
//!
//! let extractor = ContactInfoExtractor::new();
//! let info = extractor.extract_text("I work for Acme & Co");
//! assert_eq!(info.company.as_deref(), Some("Acme & Co"));
//! ```

pub mod contact_info;

// Re-export commonly used types
pub use contact_info::{
    create_contact_patterns, extract_company, extract_contact_info, extract_email, extract_name,
    extract_phone, ContactInfoExtractor, ContactPattern, CustomPatternConfig, ExtractionLimits,
    ExtractorConfig,
};

// Re-export the Extractor trait from shared-types for convenience
pub use shared_types::Extractor;
