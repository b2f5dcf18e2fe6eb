//! JSON and JSONL emitters

use anyhow::{Context, Result};
use serde::Serialize;

use super::OutputFormat;

/// Print a single value as JSON or JSONL.
///
/// Text output is the caller's job; this is a no-op for [`OutputFormat::Text`].
pub fn print_item<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    if let Some(line) = encode_item(value, format)? {
        println!("{line}");
    }
    Ok(())
}

/// Print a list as a JSON array, or one JSONL line per item.
pub fn print_list<T: Serialize>(items: &[T], format: OutputFormat) -> Result<()> {
    for line in encode_list(items, format)? {
        println!("{line}");
    }
    Ok(())
}

fn encode_item<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<Option<String>> {
    let encoded = match format {
        OutputFormat::Text => return Ok(None),
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")?
        },
        OutputFormat::Jsonl => {
            serde_json::to_string(value).context("Failed to serialize output to JSONL")?
        },
    };
    Ok(Some(encoded))
}

fn encode_list<T: Serialize>(items: &[T], format: OutputFormat) -> Result<Vec<String>> {
    match format {
        OutputFormat::Jsonl => items
            .iter()
            .map(|item| serde_json::to_string(item).context("Failed to serialize output to JSONL"))
            .collect(),
        OutputFormat::Json | OutputFormat::Text => {
            Ok(encode_item(items, format)?.into_iter().collect())
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_jsonl_emits_one_line_per_item() {
        let items = [json!({"id": 0}), json!({"id": 1})];
        let lines = encode_list(&items, OutputFormat::Jsonl).unwrap();
        assert_eq!(lines, vec![r#"{"id":0}"#, r#"{"id":1}"#]);
    }

    #[test]
    fn test_json_emits_single_array() {
        let lines = encode_list(&[1, 2, 3], OutputFormat::Json).unwrap();
        assert_eq!(lines.len(), 1);
        let parsed: Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed, json!([1, 2, 3]));
    }

    #[test]
    fn test_text_emits_nothing() {
        assert!(encode_list(&[1], OutputFormat::Text).unwrap().is_empty());
        assert!(encode_item("x", OutputFormat::Text).unwrap().is_none());
    }
}
