use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use serde_json::Value;

pub mod ai;
pub mod analytics;
pub mod integrations;
pub mod kb;
pub mod routes;
pub mod rules;
pub mod simulation;
pub mod system;
pub mod tickets;
pub mod users;

/// Reads a JSON document from `file`, or from stdin when no file is given.
pub fn read_body(file: &Option<String>) -> Result<Value> {
    let content = match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    parse_body(&content)
}

fn parse_body(content: &str) -> Result<Value> {
    serde_json::from_str(content).context("Invalid JSON")
}

/// Like [`read_body`], but the document must be an array.
pub fn read_array(file: &Option<String>) -> Result<Vec<Value>> {
    into_array(read_body(file)?)
}

fn into_array(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => anyhow::bail!("Expected a JSON array, got {}", kind(&other)),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_body_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rule.json");
        fs::write(&path, r#"{"name": "Escalate VIPs"}"#).unwrap();
        let body = read_body(&Some(path.display().to_string())).unwrap();
        assert_eq!(body, json!({"name": "Escalate VIPs"}));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = read_body(&Some("/nonexistent/rule.json".into())).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(parse_body("{not json").is_err());
    }

    #[test]
    fn test_array_required() {
        assert_eq!(into_array(json!([1, 2])).unwrap().len(), 2);
        let err = into_array(json!({"id": 1})).unwrap_err();
        assert_eq!(err.to_string(), "Expected a JSON array, got an object");
    }
}
