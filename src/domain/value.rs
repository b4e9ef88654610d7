//! Loose-value semantics for webhook JSON.
//!
//! The webhook payload is loosely typed: flags arrive as strings, prices as
//! numbers or strings, opcodes as strings, zero or null. These helpers give
//! every field one consistent reading instead of a strict schema.

use crate::utils::error::{FormatterError, Result};
use serde_json::{Map, Value};

/// Falsy values are `null`, `false`, zero, and empty strings, arrays or
/// objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Text shown for a field rendered "verbatim".
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Display form of `key`, or `default` when the key is absent. A present
/// `null` still renders as `None`.
pub fn field_display(fields: &Map<String, Value>, key: &str, default: &str) -> String {
    fields
        .get(key)
        .map(display)
        .unwrap_or_else(|| default.to_string())
}

/// Free text for `key`, trimmed. Falsy values read as the empty string; any
/// other non-string value is a schema failure.
pub fn text_field(fields: &Map<String, Value>, key: &str) -> Result<String> {
    match fields.get(key) {
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(value) if is_truthy(value) => Err(FormatterError::schema(format!(
            "`{}` must be a string, got {}",
            key, value
        ))),
        _ => Ok(String::new()),
    }
}

/// Integer coercion rendered as decimal text. Whole numbers pass through,
/// floats truncate toward zero, booleans count as 1 or 0. Strings are trimmed
/// and may carry a sign and `_` separators between digits; their length is
/// unbounded.
pub fn integer_display(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                let truncated = n.as_f64().filter(|f| f.is_finite())?.trunc();
                if truncated == 0.0 {
                    Some("0".to_string())
                } else {
                    Some(format!("{:.0}", truncated))
                }
            }
        }
        Value::String(s) => parse_integer_text(s.trim()),
        Value::Bool(b) => Some(i64::from(*b).to_string()),
        _ => None,
    }
}

fn parse_integer_text(text: &str) -> Option<String> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let mut digits = String::with_capacity(unsigned.len());
    for group in unsigned.split('_') {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        Some("0".to_string())
    } else if negative {
        Some(format!("-{}", significant))
    } else {
        Some(significant.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(7), json!("0"), json!(" "), json!([0]), json!({"a": 1})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(display(&json!("OIL01")), "OIL01");
        assert_eq!(display(&json!(49.95)), "49.95");
        assert_eq!(display(&json!(30)), "30");
        assert_eq!(display(&json!(null)), "None");
        assert_eq!(display(&json!(true)), "True");
        assert_eq!(display(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn test_field_display_defaults_only_when_absent() {
        let fields = json!({"opcode": null, "shop": "Main"});
        let fields = fields.as_object().unwrap();
        assert_eq!(field_display(fields, "shop", ""), "Main");
        assert_eq!(field_display(fields, "opcode", ""), "None");
        assert_eq!(field_display(fields, "starting_price", "0.00"), "0.00");
    }

    #[test]
    fn test_text_field() {
        let fields = json!({"notes": "  keep me \n", "empty": "", "zero": 0, "missing_null": null});
        let fields = fields.as_object().unwrap();
        assert_eq!(text_field(fields, "notes").unwrap(), "keep me");
        assert_eq!(text_field(fields, "empty").unwrap(), "");
        assert_eq!(text_field(fields, "zero").unwrap(), "");
        assert_eq!(text_field(fields, "missing_null").unwrap(), "");
        assert_eq!(text_field(fields, "absent").unwrap(), "");
    }

    #[test]
    fn test_text_field_rejects_truthy_non_strings() {
        let fields = json!({"number": 5, "flag": true, "list": ["a"]});
        let fields = fields.as_object().unwrap();
        for key in ["number", "flag", "list"] {
            let err = text_field(fields, key).unwrap_err();
            assert!(err.is_schema_failure(), "{key} should be rejected");
        }
    }

    #[test]
    fn test_integer_display() {
        let read = |value: Value| integer_display(&value);
        assert_eq!(read(json!(45)).as_deref(), Some("45"));
        assert_eq!(read(json!(12.9)).as_deref(), Some("12"));
        assert_eq!(read(json!(-2.5)).as_deref(), Some("-2"));
        assert_eq!(read(json!(-0.5)).as_deref(), Some("0"));
        assert_eq!(read(json!(" 30 ")).as_deref(), Some("30"));
        assert_eq!(read(json!("+15")).as_deref(), Some("15"));
        assert_eq!(read(json!("007")).as_deref(), Some("7"));
        assert_eq!(read(json!("1_000")).as_deref(), Some("1000"));
        assert_eq!(read(json!("-0")).as_deref(), Some("0"));
        assert_eq!(read(json!(true)).as_deref(), Some("1"));
        assert_eq!(read(json!("abc")), None);
        assert_eq!(read(json!("15.0")), None);
        assert_eq!(read(json!("1__0")), None);
        assert_eq!(read(json!("_1")), None);
        assert_eq!(read(json!("-")), None);
        assert_eq!(read(json!("")), None);
        assert_eq!(read(json!(null)), None);
        assert_eq!(read(json!([1])), None);
    }

    #[test]
    fn test_integer_display_has_no_width_limit() {
        assert_eq!(
            integer_display(&json!("99999999999999999999")).as_deref(),
            Some("99999999999999999999")
        );
        assert_eq!(
            integer_display(&json!(18446744073709551615u64)).as_deref(),
            Some("18446744073709551615")
        );
    }
}
