use anyhow::Result;
use colored::Colorize;
use helpdesk_api::{Ticket, TicketMessage};
use serde::Serialize;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::OutputFormat;

const MAX_CELL: usize = 60;

pub fn print_value(value: &Value, format: OutputFormat) -> Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

pub fn print_serialized<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    print_value(&serde_json::to_value(value)?, format)
}

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

pub fn print_tickets(tickets: &[Ticket], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", render_tickets(tickets));
            Ok(())
        }
        _ => print_serialized(&tickets, format),
    }
}

pub fn print_messages(messages: &[TicketMessage], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", render_messages(messages));
            Ok(())
        }
        _ => print_serialized(&messages, format),
    }
}

pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => to_yaml(value),
        OutputFormat::Table => render_table(value),
    })
}

fn render_tickets(tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return "No tickets found.".to_string();
    }
    let mut builder = Builder::default();
    builder.push_record(["ID", "Subject", "Status", "Priority", "Category", "Customer", "Updated"]);
    for t in tickets {
        builder.push_record([
            t.id.to_string(),
            truncate(&t.subject),
            t.status.to_string(),
            t.priority.to_string(),
            t.category.map(|c| c.to_string()).unwrap_or_else(|| "-".into()),
            t.user.name.clone(),
            t.updated_at.clone().unwrap_or_else(|| "-".into()),
        ]);
    }
    let table = builder.build().with(Style::rounded()).to_string();
    format!("{table}\nTotal: {}", tickets.len())
}

fn render_messages(messages: &[TicketMessage]) -> String {
    if messages.is_empty() {
        return "No messages.".to_string();
    }
    let mut builder = Builder::default();
    builder.push_record(["ID", "From", "Name", "Sent", "Message"]);
    for m in messages {
        builder.push_record([
            m.id.to_string(),
            m.sender_type.to_string(),
            m.sender_name.clone().unwrap_or_else(|| "-".into()),
            m.created_at.clone().unwrap_or_else(|| "-".into()),
            truncate(&m.message),
        ]);
    }
    builder.build().with(Style::rounded()).to_string()
}

/// Arrays of objects become one row per element, with the first element's
/// keys as columns. Objects become a field/value listing.
fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) if items.is_empty() => "No results.".to_string(),
        Value::Array(items) => {
            let mut builder = Builder::default();
            match items[0].as_object() {
                Some(first) => {
                    let columns: Vec<&String> = first.keys().collect();
                    builder.push_record(columns.iter().map(|c| c.as_str()));
                    for item in items {
                        builder.push_record(
                            columns
                                .iter()
                                .map(|c| item.get(c.as_str()).map(cell).unwrap_or_default()),
                        );
                    }
                }
                None => {
                    builder.push_record(["Value"]);
                    for item in items {
                        builder.push_record([cell(item)]);
                    }
                }
            }
            let table = builder.build().with(Style::rounded()).to_string();
            format!("{table}\nTotal: {}", items.len())
        }
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (k, v) in map {
                builder.push_record([k.clone(), cell(v)]);
            }
            builder.build().with(Style::rounded()).to_string()
        }
        scalar => cell(scalar),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => truncate(s),
        Value::Array(a) => format!("[{} items]", a.len()),
        Value::Object(_) => "{...}".to_string(),
        other => other.to_string(),
    }
}

fn truncate(s: &str) -> String {
    let s = s.replace('\n', " ");
    if s.chars().count() <= MAX_CELL {
        return s;
    }
    let cut: String = s.chars().take(MAX_CELL - 3).collect();
    format!("{cut}...")
}

// Block-style YAML without pulling in a YAML crate. Strings that could be
// misread are emitted as JSON strings, which YAML accepts verbatim.
fn to_yaml(value: &Value) -> String {
    let mut out = String::new();
    write_yaml(value, 0, &mut out);
    out.trim_end().to_string()
}

fn write_yaml(value: &Value, indent: usize, out: &mut String) {
    let pad = " ".repeat(indent);
    match value {
        Value::Array(items) if !items.is_empty() => {
            for item in items {
                out.push_str(&pad);
                out.push('-');
                write_nested(item, indent + 2, out);
            }
        }
        Value::Object(map) if !map.is_empty() => {
            for (k, v) in map {
                out.push_str(&pad);
                out.push_str(&yaml_scalar(&Value::String(k.clone())));
                out.push(':');
                write_nested(v, indent + 2, out);
            }
        }
        scalar => {
            out.push_str(&pad);
            out.push_str(&yaml_scalar(scalar));
            out.push('\n');
        }
    }
}

fn write_nested(value: &Value, indent: usize, out: &mut String) {
    let is_block = match value {
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        _ => false,
    };
    if is_block {
        out.push('\n');
        write_yaml(value, indent, out);
    } else {
        out.push(' ');
        out.push_str(&yaml_scalar(value));
        out.push('\n');
    }
}

fn yaml_scalar(value: &Value) -> String {
    match value {
        Value::String(s) if is_plain(s) => s.clone(),
        Value::Array(_) => "[]".to_string(),
        Value::Object(_) => "{}".to_string(),
        // JSON strings, numbers, booleans and null are valid YAML.
        other => other.to_string(),
    }
}

fn is_plain(s: &str) -> bool {
    const RESERVED: &[&str] = &["true", "false", "null", "yes", "no", "on", "off", "~"];
    !s.is_empty()
        && s.trim() == s
        && !s.starts_with(['-', '@', '`', '!', '&', '*'])
        && s.parse::<f64>().is_err()
        && !RESERVED.iter().any(|r| r.eq_ignore_ascii_case(s))
        && s
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.' | '/' | '@' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_nested() {
        let value = json!({
            "count": 3,
            "labels": ["a b", "true", ""],
            "meta": {"empty": {}, "note": "x: y"},
            "status": "UP"
        });
        let yaml = to_yaml(&value);
        assert_eq!(
            yaml,
            "count: 3\nlabels:\n  - a b\n  - \"true\"\n  - \"\"\nmeta:\n  empty: {}\n  note: \"x: y\"\nstatus: UP"
        );
    }

    #[test]
    fn test_yaml_quotes_leading_indicators() {
        assert_eq!(to_yaml(&json!({"handle": "@dana"})), "handle: \"@dana\"");
        assert_eq!(
            to_yaml(&json!(["&anchor", "*alias", "!tag"])),
            "- \"&anchor\"\n- \"*alias\"\n- \"!tag\""
        );
        assert_eq!(to_yaml(&json!("/tickets")), "/tickets");
        assert_eq!(to_yaml(&json!("dana@example.com")), "dana@example.com");
    }

    #[test]
    fn test_yaml_scalar_root() {
        assert_eq!(to_yaml(&json!(null)), "null");
        assert_eq!(to_yaml(&json!([])), "[]");
        assert_eq!(to_yaml(&json!("2024-03-02")), "2024-03-02");
    }

    #[test]
    fn test_table_for_rows() {
        let value = json!([
            {"location": "Lisbon", "count": 12},
            {"location": "Oslo", "count": 3}
        ]);
        let table = render(&value, OutputFormat::Table).unwrap();
        assert!(table.contains("location"));
        assert!(table.contains("Lisbon"));
        assert!(table.ends_with("Total: 2"));
        assert_eq!(render(&json!([]), OutputFormat::Table).unwrap(), "No results.");
    }

    #[test]
    fn test_table_for_object() {
        let table = render(&json!({"averageHours": 4.5, "tags": [1, 2]}), OutputFormat::Table).unwrap();
        assert!(table.contains("averageHours"));
        assert!(table.contains("4.5"));
        assert!(table.contains("[2 items]"));
    }

    #[test]
    fn test_truncate_long_cells() {
        let long = "x".repeat(100);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_CELL);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate("line one\nline two"), "line one line two");
    }

    #[test]
    fn test_ticket_table() {
        let ticket: Ticket = serde_json::from_value(json!({
            "id": 42,
            "subject": "Deposit not credited",
            "status": "OPEN",
            "priority": "HIGH",
            "user": {
                "uid": "u-1",
                "name": "Dana Reyes",
                "email": "dana@example.com",
                "location": "Lisbon",
                "device": "iOS"
            }
        }))
        .unwrap();
        let table = render_tickets(&[ticket]);
        assert!(table.contains("Deposit not credited"));
        assert!(table.contains("Dana Reyes"));
        assert!(table.contains("OPEN"));
        assert!(table.ends_with("Total: 1"));
        assert_eq!(render_tickets(&[]), "No tickets found.");
    }
}
