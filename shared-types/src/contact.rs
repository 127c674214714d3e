use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::ExtractionError;

/// Contact details pulled out of a single chat message.
///
/// Every field is independent: a message may yield an email without a name,
/// a company without a phone, and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub phone: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.company.is_none() && self.email.is_none() && self.phone.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Company => self.company.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Phone => self.phone.as_deref(),
        }
    }

    pub fn set(&mut self, field: ContactField, value: Option<String>) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Company => self.company = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
        }
    }
}

/// The fields a contact extractor can fill in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, rename_all = "kebab-case")]
pub enum ContactField {
    Name,
    Company,
    Email,
    Phone,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Company,
        ContactField::Email,
        ContactField::Phone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Company => "company",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(ContactField::Name),
            "company" | "organization" | "organisation" => Ok(ContactField::Company),
            "email" => Ok(ContactField::Email),
            "phone" => Ok(ContactField::Phone),
            other => Err(ExtractionError::InvalidInput(format!(
                "unknown contact field '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_contact_info_serializes_to_empty_object() {
        let info = ContactInfo::default();
        assert!(info.is_empty());
        assert_eq!(serde_json::to_string(&info).unwrap(), "{}");
    }

    #[test]
    fn test_get_and_set_fields() {
        let mut info = ContactInfo::default();
        info.set(ContactField::Email, Some("jane@example.com".to_string()));
        info.set(ContactField::Company, Some("Acme".to_string()));

        assert!(!info.is_empty());
        assert_eq!(info.get(ContactField::Email), Some("jane@example.com"));
        assert_eq!(info.get(ContactField::Company), Some("Acme"));
        assert_eq!(info.get(ContactField::Name), None);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "company": "Acme", "email": "jane@example.com" })
        );
    }

    #[test]
    fn test_parse_contact_field() {
        assert_eq!("Name".parse::<ContactField>().unwrap(), ContactField::Name);
        assert_eq!(
            "organisation".parse::<ContactField>().unwrap(),
            ContactField::Company
        );
        assert_eq!(" phone ".parse::<ContactField>().unwrap(), ContactField::Phone);
        assert!("fax".parse::<ContactField>().is_err());
    }

    #[test]
    fn test_typescript_shape_matches_json() {
        let info = ContactInfo::decl();
        assert!(info.contains("name?: string"), "{}", info);
        assert!(info.contains("phone?: string"), "{}", info);

        let field = ContactField::decl();
        assert!(field.contains("\"company\""), "{}", field);
        assert!(!field.contains("\"Company\""), "{}", field);
    }

    #[test]
    fn test_contact_field_wire_format() {
        assert_eq!(
            serde_json::to_string(&ContactField::Company).unwrap(),
            "\"company\""
        );
        let field: ContactField = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(field, ContactField::Email);
    }
}
