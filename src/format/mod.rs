//! Output formatters
//!
//! Render an upstream document for the terminal.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format an upstream document
    fn format(&self, doc: &RawValue) -> Result<String>;
}

/// Pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }

    fn format(&self, doc: &RawValue) -> Result<String> {
        Ok(reindent(doc.get()))
    }
}

/// Re-indent already-validated JSON text with two-space indentation.
///
/// Works on the text itself, so member order and number literals are kept
/// exactly as the upstream wrote them.
fn reindent(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '{' | '[' => {
                out.push(c);
                while chars.peek().is_some_and(|c| c.is_ascii_whitespace()) {
                    chars.next();
                }
                match chars.peek().copied() {
                    Some(close @ ('}' | ']')) => {
                        out.push(close);
                        chars.next();
                    }
                    _ => {
                        depth += 1;
                        newline(&mut out, depth);
                    }
                }
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                newline(&mut out, depth);
                out.push(c);
            }
            ',' => {
                out.push(c);
                newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            c if c.is_ascii_whitespace() => {}
            c => out.push(c),
        }
    }

    out
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Upstream body, byte-for-byte
pub struct RawFormatter;

impl OutputFormatter for RawFormatter {
    fn name(&self) -> &str {
        "raw"
    }

    fn description(&self) -> &str {
        "Upstream response exactly as received"
    }

    fn format(&self, doc: &RawValue) -> Result<String> {
        Ok(doc.get().to_string())
    }
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(JsonFormatter)),
        "raw" => Some(Box::new(RawFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    let formatters: [&dyn OutputFormatter; 2] = [&JsonFormatter, &RawFormatter];
    formatters
        .iter()
        .map(|f| FormatInfo {
            name: f.name().to_string(),
            description: f.description().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(s: &str) -> Box<RawValue> {
        RawValue::from_string(s.to_string()).unwrap()
    }

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("RAW").is_some());
        assert!(get_formatter("gpx").is_none());
    }

    #[test]
    fn test_raw_is_verbatim() {
        let body = r#"[{"mag":4.5,"place":"x"}]"#;
        assert_eq!(RawFormatter.format(&doc(body)).unwrap(), body);
    }

    #[test]
    fn test_json_is_pretty() {
        let output = JsonFormatter.format(&doc(r#"{"count":1}"#)).unwrap();
        assert_eq!(output, "{\n  \"count\": 1\n}");
    }

    #[test]
    fn test_json_matches_serde_layout() {
        let body = r#"{"a":[1,2],"b":{},"c":[]}"#;
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        let expected = serde_json::to_string_pretty(&value).unwrap();

        assert_eq!(JsonFormatter.format(&doc(body)).unwrap(), expected);
    }

    #[test]
    fn test_json_keeps_member_order_and_numbers() {
        let body = r#"[{"time":1,"mag":4.50,"id":123456789012345678901234}]"#;
        let output = JsonFormatter.format(&doc(body)).unwrap();

        assert_eq!(
            output,
            "[\n  {\n    \"time\": 1,\n    \"mag\": 4.50,\n    \"id\": 123456789012345678901234\n  }\n]"
        );
    }

    #[test]
    fn test_json_leaves_string_contents_alone() {
        let body = r#"{"place":"a, b: {c} [d] \"e\"","empty":" "}"#;
        let output = JsonFormatter.format(&doc(body)).unwrap();

        assert_eq!(
            output,
            "{\n  \"place\": \"a, b: {c} [d] \\\"e\\\"\",\n  \"empty\": \" \"\n}"
        );
    }

    #[test]
    fn test_available_formats() {
        let names: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["json", "raw"]);
    }
}
