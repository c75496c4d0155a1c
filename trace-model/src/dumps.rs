use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::TraceParseError;
use crate::span::Span;

/// Trace tree value as stored by the host: the span tree and optional model
/// description are kept as JSON strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../trace-panel/bindings/trace_tree.ts")]
pub struct TraceTree {
    pub root_span_dumps: String,
    #[serde(default)]
    pub model_dict_dumps: Option<String>,
    #[serde(default)]
    pub model_hash: Option<String>,
}

/// Decoded trace ready for layout
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTrace {
    pub root: Span,
    pub model: Option<serde_json::Value>,
    pub model_hash: Option<String>,
}

impl TraceTree {
    pub fn new(root_span_dumps: impl Into<String>) -> Self {
        Self {
            root_span_dumps: root_span_dumps.into(),
            ..Self::default()
        }
    }

    /// Decode the span tree. A broken model dict is logged and dropped so it
    /// never hides the spans.
    pub fn parse(&self) -> Result<ParsedTrace, TraceParseError> {
        let root = parse_root_span(&self.root_span_dumps)?;
        let model = match self.model_dict_dumps.as_deref() {
            Some(raw) if !raw.trim().is_empty() => match parse_model_dict(raw) {
                Ok(model) => Some(model),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable model dict: {}", e);
                    None
                }
            },
            _ => None,
        };
        Ok(ParsedTrace {
            root,
            model,
            model_hash: self.model_hash.clone(),
        })
    }
}

/// Parse JSON text, unwrapping one level of string encoding if the payload
/// was serialised twice.
fn decode_object(dumps: &str) -> Result<serde_json::Value, TraceParseError> {
    let trimmed = dumps.trim();
    if trimmed.is_empty() {
        return Err(TraceParseError::Empty);
    }

    let value = match serde_json::from_str::<serde_json::Value>(trimmed)? {
        serde_json::Value::String(inner) => serde_json::from_str(&inner)?,
        other => other,
    };

    match value {
        serde_json::Value::Object(_) => Ok(value),
        other => Err(TraceParseError::NotAnObject(json_type_name(&other))),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

pub fn parse_root_span(dumps: &str) -> Result<Span, TraceParseError> {
    let value = decode_object(dumps)?;
    Ok(serde_json::from_value(value)?)
}

pub fn parse_model_dict(dumps: &str) -> Result<serde_json::Value, TraceParseError> {
    decode_object(dumps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::SpanKind;

    const ROOT: &str = r#"{
        "name": "chain",
        "span_kind": "CHAIN",
        "start_time_ms": 0,
        "end_time_ms": 10,
        "child_spans": [{"name": "llm", "span_kind": "LLM", "start_time_ms": 2, "end_time_ms": 4}]
    }"#;

    #[test]
    fn parses_root_span() {
        let root = parse_root_span(ROOT).unwrap();
        assert_eq!(root.display_name(), "chain");
        assert_eq!(root.child_spans[0].span_kind, SpanKind::Llm);
    }

    #[test]
    fn malformed_json_is_an_error_not_a_panic() {
        let err = parse_root_span("{\"name\": ").unwrap_err();
        assert!(matches!(err, TraceParseError::Json { line: 1, .. }));
        assert!(err.to_string().contains("Invalid trace JSON"));
    }

    #[test]
    fn empty_and_non_object_dumps_are_rejected() {
        assert_eq!(parse_root_span("  \n").unwrap_err(), TraceParseError::Empty);
        assert_eq!(
            parse_root_span("[1, 2]").unwrap_err(),
            TraceParseError::NotAnObject("an array")
        );
        assert_eq!(
            parse_root_span("null").unwrap_err(),
            TraceParseError::NotAnObject("null")
        );
    }

    #[test]
    fn wrong_field_types_are_errors() {
        let err = parse_root_span(r#"{"start_time_ms": "yesterday"}"#).unwrap_err();
        assert!(matches!(err, TraceParseError::Json { .. }));
    }

    #[test]
    fn double_encoded_dump_is_unwrapped() {
        let encoded = serde_json::to_string(ROOT).unwrap();
        let root = parse_root_span(&encoded).unwrap();
        assert_eq!(root.child_spans.len(), 1);
    }

    #[test]
    fn broken_model_dict_does_not_hide_spans() {
        let tree = TraceTree {
            root_span_dumps: ROOT.to_string(),
            model_dict_dumps: Some("{not json".to_string()),
            model_hash: Some("abc123".to_string()),
        };
        let parsed = tree.parse().unwrap();
        assert!(parsed.model.is_none());
        assert_eq!(parsed.model_hash.as_deref(), Some("abc123"));
        assert_eq!(parsed.root.span_count(), 2);
    }

    #[test]
    fn model_dict_is_decoded_when_present() {
        let tree = TraceTree {
            root_span_dumps: ROOT.to_string(),
            model_dict_dumps: Some(r#"{"agent": {"llm": "gpt-4"}}"#.to_string()),
            model_hash: None,
        };
        let parsed = tree.parse().unwrap();
        assert_eq!(parsed.model.unwrap()["agent"]["llm"], "gpt-4");
    }
}
