use shared_types::ContactField;

use super::ExtractionLimits;

/// Run the validation guard for `field` over a captured candidate.
/// Returns the value to report, or `None` if the candidate is rejected.
pub fn accept(field: ContactField, candidate: &str, limits: &ExtractionLimits) -> Option<String> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    match field {
        ContactField::Name => accept_name(candidate, limits),
        ContactField::Company => accept_company(candidate, limits),
        ContactField::Email => Some(candidate.to_string()),
        ContactField::Phone => accept_phone(candidate, limits),
    }
}

fn accept_name(candidate: &str, limits: &ExtractionLimits) -> Option<String> {
    if candidate.chars().count() > limits.max_name_len {
        return None;
    }
    if candidate.split_whitespace().count() > limits.max_name_tokens {
        return None;
    }
    Some(candidate.to_string())
}

fn accept_company(candidate: &str, limits: &ExtractionLimits) -> Option<String> {
    if candidate.chars().count() > limits.max_company_len {
        return None;
    }

    let lower = candidate.to_lowercase();
    if limits
        .company_stopwords
        .iter()
        .any(|word| word.to_lowercase() == lower)
    {
        return None;
    }

    Some(candidate.to_string())
}

fn accept_phone(candidate: &str, limits: &ExtractionLimits) -> Option<String> {
    let normalized = normalize_phone(candidate);
    let digits = normalized.chars().filter(|c| c.is_ascii_digit()).count();

    if digits >= limits.min_phone_digits {
        Some(normalized)
    } else {
        None
    }
}

/// Drop whitespace, hyphens and parentheses; a leading '+' survives.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}
