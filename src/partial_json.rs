//! Best-effort field extraction from partially-streamed tool arguments.

use regex::Regex;
use serde_json::Value;

/// Extracts the string value of `key` from a possibly-incomplete JSON
/// argument payload.
///
/// A payload that parses as complete JSON is read outright. Anything else
/// falls back to a quoted-pattern scan; an unterminated trailing value that
/// has not yet produced its closing quote stays absent rather than yielding
/// a truncated guess. Absence is a first-class outcome, not an error.
#[must_use]
pub fn extract_string_field(partial_json: &str, key: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<Value>(partial_json) {
        return parsed.get(key).and_then(Value::as_str).map(str::to_owned);
    }

    scan_quoted_value(partial_json, key)
}

fn scan_quoted_value(partial_json: &str, key: &str) -> Option<String> {
    let pattern = format!(r#""{}"\s*:\s*"([^"]+)""#, regex::escape(key));
    let matcher = Regex::new(&pattern).ok()?;

    matcher
        .captures(partial_json)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().to_owned())
}

#[cfg(test)]
mod tests {
    use super::extract_string_field;

    #[test]
    fn complete_payloads_are_read_outright() {
        assert_eq!(
            extract_string_field(r#"{"field":"revenue"}"#, "field"),
            Some("revenue".to_string())
        );
        assert_eq!(
            extract_string_field(r#"{"other":"x","field":"employee_count"}"#, "field"),
            Some("employee_count".to_string())
        );
    }

    #[test]
    fn missing_or_non_string_values_are_absent() {
        assert_eq!(extract_string_field(r#"{"other":"revenue"}"#, "field"), None);
        assert_eq!(extract_string_field(r#"{"field":7}"#, "field"), None);
        assert_eq!(extract_string_field(r#"{"field":null}"#, "field"), None);
    }

    #[test]
    fn truncated_payload_with_terminated_value_is_scanned() {
        assert_eq!(
            extract_string_field(r#"{"field":"revenue","limit":"#, "field"),
            Some("revenue".to_string())
        );
        assert_eq!(
            extract_string_field(r#"{"field" : "revenue""#, "field"),
            Some("revenue".to_string())
        );
    }

    #[test]
    fn unterminated_trailing_value_is_absent_not_guessed() {
        assert_eq!(extract_string_field(r#"{"field":"rev"#, "field"), None);
        assert_eq!(extract_string_field(r#"{"field":""#, "field"), None);
    }

    #[test]
    fn garbage_and_empty_payloads_are_absent() {
        assert_eq!(extract_string_field("garbage", "field"), None);
        assert_eq!(extract_string_field("", "field"), None);
        assert_eq!(extract_string_field(r#"{"fiel"#, "field"), None);
    }

    #[test]
    fn keys_with_pattern_metacharacters_are_matched_literally() {
        assert_eq!(
            extract_string_field(r#"{"a.b":"match", "#, "a.b"),
            Some("match".to_string())
        );
        assert_eq!(extract_string_field(r#"{"axb":"match", "#, "a.b"), None);
    }
}
