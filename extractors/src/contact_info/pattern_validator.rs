use regex::Regex;
use shared_types::ExtractionError;
use std::time::{Duration, Instant};

use super::CustomPatternConfig;

/// Check a user-supplied pattern and compile it.
pub fn validate_custom_pattern(pattern: &CustomPatternConfig) -> Result<Regex, ExtractionError> {
    validate_pattern_name(&pattern.name)?;

    let regex = Regex::new(&pattern.regex)
        .map_err(|e| invalid(&pattern.name, format!("regex does not compile: {}", e)))?;

    validate_capture_group(&pattern.name, &regex, pattern.group)?;
    validate_regex_performance(&pattern.name, &regex)?;

    Ok(regex)
}

fn invalid(name: &str, reason: impl Into<String>) -> ExtractionError {
    ExtractionError::InvalidPattern {
        name: name.to_string(),
        reason: reason.into(),
    }
}

fn validate_pattern_name(name: &str) -> Result<(), ExtractionError> {
    if name.is_empty() || name.len() > 100 {
        return Err(invalid(name, "pattern name must be 1-100 characters"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(invalid(
            name,
            "pattern name must contain only lowercase letters, numbers, and underscores",
        ));
    }
    Ok(())
}

fn validate_capture_group(name: &str, regex: &Regex, group: usize) -> Result<(), ExtractionError> {
    let group_count = regex.captures_len();

    if group >= group_count {
        return Err(invalid(
            name,
            format!(
                "capture group {} does not exist (regex has {} groups)",
                group, group_count
            ),
        ));
    }

    Ok(())
}

fn validate_regex_performance(name: &str, regex: &Regex) -> Result<(), ExtractionError> {
    let probe = "a".repeat(1000);

    let start = Instant::now();
    let _ = regex.is_match(&probe);

    if start.elapsed() > Duration::from_millis(100) {
        return Err(invalid(name, "regex is too slow on a 1000 character probe"));
    }

    Ok(())
}
