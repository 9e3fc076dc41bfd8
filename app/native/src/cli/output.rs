//! CLI output formatting.
//!
//! Reports, settings and eligibility verdicts are printed as pretty JSON with
//! colored scalars, and booleans in tables as check marks.

use colored::Colorize;
use serde_json::Value;

/// Indentation of one nesting level, matching `serde_json::to_string_pretty`.
const INDENT: &str = "  ";

/// Prints `value` as pretty JSON with colored keys and scalars.
///
/// Keys are cyan, strings green, numbers yellow, booleans and null magenta.
pub fn print_json(value: &Value) {
    println!("{}", render_json(value, 0));
}

/// Renders `value` at the given nesting depth.
fn render_json(value: &Value, depth: usize) -> String {
    match value {
        Value::Null | Value::Bool(_) => value.to_string().magenta().to_string(),
        Value::Number(_) => value.to_string().yellow().to_string(),
        Value::String(_) => value.to_string().green().to_string(),
        Value::Array(items) => {
            let items = items.iter().map(|item| render_json(item, depth + 1));
            render_block(items, ('[', ']'), depth)
        }
        Value::Object(fields) => {
            let fields = fields.iter().map(|(key, field)| {
                let key = Value::String(key.clone()).to_string();
                format!("{}: {}", key.cyan(), render_json(field, depth + 1))
            });
            render_block(fields, ('{', '}'), depth)
        }
    }
}

/// Lays out rendered entries one per line between `brackets`.
fn render_block(
    entries: impl Iterator<Item = String>,
    (open, close): (char, char),
    depth: usize,
) -> String {
    let inner = INDENT.repeat(depth + 1);
    let entries: Vec<String> = entries.map(|entry| format!("{inner}{entry}")).collect();

    if entries.is_empty() {
        format!("{open}{close}")
    } else {
        format!("{open}\n{}\n{}{close}", entries.join(",\n"), INDENT.repeat(depth))
    }
}

/// Formats a boolean as a colored string.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_format_bool_true() {
        let result = format_bool(true);
        assert!(result.contains('✓'));
    }

    #[test]
    fn test_format_bool_false() {
        let result = format_bool(false);
        assert!(result.contains('✗'));
    }

    #[test]
    fn test_render_json_layout_matches_pretty_printer() {
        colored::control::set_override(false);

        let value = json!({
            "duration": 160,
            "opacity": 0.0,
            "easing": "ease-out",
            "blacklist": ["ksmserver ksmserver", "say \"hi\""],
            "transform": { "kind": "recede", "distance": 100.0 },
            "empty": [],
            "nothing": {},
            "claimed": null,
            "eligible": true
        });

        assert_eq!(render_json(&value, 0), serde_json::to_string_pretty(&value).unwrap());
    }

    #[test]
    fn test_render_json_scalars() {
        colored::control::set_override(false);

        assert_eq!(render_json(&json!(null), 0), "null");
        assert_eq!(render_json(&json!(false), 0), "false");
        assert_eq!(render_json(&json!(0.5), 0), "0.5");
        assert_eq!(render_json(&json!("kate kate"), 0), "\"kate kate\"");
    }
}
