//! Tolerant JSON extraction from generative-model output
//!
//! Models under a JSON-only contract still wrap their output in prose or
//! leave trailing commas. Extraction is staged: direct parse, then the
//! first `[...]` span, then the first `{...}` span, then a trailing-comma
//! repair pass. Array spans are preferred because the contract expects a
//! top-level array.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref ARRAY_SPAN_RE: Regex = Regex::new(r"(?s)\[.*\]").expect("array span pattern");
    static ref OBJECT_SPAN_RE: Regex = Regex::new(r"(?s)\{.*\}").expect("object span pattern");
    static ref TRAILING_COMMA_RE: Regex = Regex::new(r",\s*([\]}])").expect("comma repair pattern");
}

/// Extract the first parseable JSON value from arbitrary model output.
/// Returns `None` when nothing usable can be recovered.
pub fn extract_json(text: &str) -> Option<Value> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Some(value);
    }

    let candidate = ARRAY_SPAN_RE
        .find(text)
        .or_else(|| OBJECT_SPAN_RE.find(text))?
        .as_str();

    if let Ok(value) = serde_json::from_str::<Value>(candidate) {
        return Some(value);
    }

    let repaired = TRAILING_COMMA_RE.replace_all(candidate, "$1");
    serde_json::from_str::<Value>(&repaired).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_direct_parse() {
        let value = extract_json(r#"[{"issue": "X"}]"#).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_recovers_array_with_leading_prose_and_trailing_comma() {
        // Prose prefix plus a trailing comma inside the array
        let raw = "Here are the findings: [{\"issue\":\"X\",\"severity\":\"Low\",\
                   \"suggestion\":\"Y\",\"citation\":\"\"},]";
        let value = extract_json(raw).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["issue"], "X");
        assert_eq!(arr[0]["severity"], "Low");
        assert_eq!(arr[0]["suggestion"], "Y");
        assert_eq!(arr[0]["citation"], "");
    }

    #[test]
    fn test_array_preferred_over_object() {
        let raw = "{\"note\": \"ignored\"} then [1, 2]";
        // The array span wins even though an object appears first
        let value = extract_json(raw).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_falls_back_to_object_span() {
        let raw = "Result: {\"issue\": \"X\", \"severity\": \"High\"} -- end";
        let value = extract_json(raw).unwrap();
        assert_eq!(value["issue"], "X");
    }

    #[test]
    fn test_object_trailing_comma_repaired() {
        let raw = "{\"issue\": \"X\",}";
        let value = extract_json(raw).unwrap();
        assert_eq!(value["issue"], "X");
    }

    #[test]
    fn test_spans_cross_newlines() {
        let raw = "findings:\n[\n  {\"issue\": \"X\"},\n  {\"issue\": \"Y\"}\n]\ndone";
        let value = extract_json(raw).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_unusable_input_returns_none() {
        assert!(extract_json("").is_none());
        assert!(extract_json("   ").is_none());
        assert!(extract_json("no structured data here").is_none());
        assert!(extract_json("[not json at all").is_none());
    }
}
