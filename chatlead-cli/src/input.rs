use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Text for `extract`: the argument if given, else the file, else stdin.
pub fn read_text(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    read_source(file)
}

pub fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {:?}", path)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Split batch input into messages.
///
/// A whole-input JSON array is taken element by element, so non-string
/// elements stay non-strings. Anything else is one message per line: a line
/// holding a JSON string literal is unquoted, every other line is kept as
/// plain text. Blank lines are skipped.
pub fn parse_batch(content: &str) -> Vec<Value> {
    let trimmed = content.trim_start();

    if trimmed.starts_with('[') {
        match serde_json::from_str::<Vec<Value>>(trimmed) {
            Ok(messages) => return messages,
            Err(e) => tracing::debug!("Batch input is not a JSON array ({}), reading lines", e),
        }
    }

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match serde_json::from_str::<Value>(line) {
            Ok(Value::String(text)) => Value::String(text),
            _ => Value::String(line.to_string()),
        })
        .collect()
}
