pub mod contact;
pub mod extraction;

pub use contact::{ContactField, ContactInfo};

// Re-export extraction types
pub use extraction::*;
