//! Span tree types
//!
//! A trace is a tree of spans rooted at one top-level span. Each span owns
//! its children. The wire shape is the JSON the host stores in
//! `root_span_dumps`; every field is optional there, so deserialisation is
//! lenient: unknown kinds and status codes fall back to their default
//! variants and `null` collections become empty.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::select::SpanPath;

pub type AttributeMap = serde_json::Map<String, serde_json::Value>;

// ============================================================================
// Enums
// ============================================================================

/// What kind of execution unit a span represents
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "../../trace-panel/bindings/trace_tree.ts")]
pub enum SpanKind {
    Chain,
    Agent,
    Tool,
    Llm,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl SpanKind {
    pub fn label(&self) -> &'static str {
        match self {
            SpanKind::Chain => "CHAIN",
            SpanKind::Agent => "AGENT",
            SpanKind::Tool => "TOOL",
            SpanKind::Llm => "LLM",
            SpanKind::Unspecified => "SPAN",
        }
    }

    /// Suffix for `trace-span--{kind}` style classes
    pub fn css_suffix(&self) -> &'static str {
        match self {
            SpanKind::Chain => "chain",
            SpanKind::Agent => "agent",
            SpanKind::Tool => "tool",
            SpanKind::Llm => "llm",
            SpanKind::Unspecified => "unspecified",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "../../trace-panel/bindings/trace_tree.ts")]
pub enum StatusCode {
    Success,
    Error,
    #[default]
    #[serde(other)]
    Unset,
}

impl StatusCode {
    pub fn label(&self) -> &'static str {
        match self {
            StatusCode::Success => "SUCCESS",
            StatusCode::Error => "ERROR",
            StatusCode::Unset => "UNSET",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusCode::Error)
    }
}

/// Borrowed view over a span's status fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanStatus<'a> {
    pub code: StatusCode,
    pub message: Option<&'a str>,
}

// ============================================================================
// Span
// ============================================================================

/// One input/output pair recorded by a span
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../trace-panel/bindings/trace_tree.ts")]
pub struct SpanResult {
    #[serde(default)]
    #[ts(type = "Record<string, unknown> | null")]
    pub inputs: Option<AttributeMap>,
    #[serde(default)]
    #[ts(type = "Record<string, unknown> | null")]
    pub outputs: Option<AttributeMap>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../trace-panel/bindings/trace_tree.ts")]
pub struct Span {
    #[serde(default)]
    pub span_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub span_kind: SpanKind,

    /// Epoch milliseconds
    #[serde(default)]
    pub start_time_ms: Option<f64>,

    /// Epoch milliseconds
    #[serde(default)]
    pub end_time_ms: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status_code: StatusCode,

    #[serde(default)]
    pub status_message: Option<String>,

    #[serde(default)]
    #[ts(type = "Record<string, unknown> | null")]
    pub attributes: Option<AttributeMap>,

    #[serde(default)]
    pub results: Option<Vec<SpanResult>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub child_spans: Vec<Span>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Span {
    /// `end - start` when both ends are known and ordered
    pub fn duration_ms(&self) -> Option<f64> {
        let start = self.start_time_ms?;
        let end = self.end_time_ms?;
        let duration = end - start;
        (duration.is_finite() && duration >= 0.0).then_some(duration)
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.span_id.as_deref().filter(|id| !id.trim().is_empty()))
            .unwrap_or_else(|| self.span_kind.label())
    }

    pub fn status(&self) -> SpanStatus<'_> {
        SpanStatus {
            code: self.status_code,
            message: self.status_message.as_deref(),
        }
    }

    pub fn child(&self, index: usize) -> Option<&Span> {
        self.child_spans.get(index)
    }

    pub fn descendant(&self, path: &SpanPath) -> Option<&Span> {
        path.indices()
            .iter()
            .try_fold(self, |span, index| span.child(*index))
    }

    /// Number of spans in this subtree, including `self`
    pub fn span_count(&self) -> usize {
        1 + self
            .child_spans
            .iter()
            .map(Span::span_count)
            .sum::<usize>()
    }

    /// Levels in this subtree; a leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .child_spans
            .iter()
            .map(Span::depth)
            .max()
            .unwrap_or(0)
    }

    pub fn has_error(&self) -> bool {
        self.status_code.is_error() || self.child_spans.iter().any(Span::has_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(name: &str, start: f64, end: f64) -> Span {
        Span {
            name: Some(name.to_string()),
            start_time_ms: Some(start),
            end_time_ms: Some(end),
            ..Span::default()
        }
    }

    #[test]
    fn deserializes_full_span() {
        let span: Span = serde_json::from_value(json!({
            "span_id": "abc",
            "name": "agent",
            "span_kind": "AGENT",
            "start_time_ms": 100,
            "end_time_ms": 350,
            "status_code": "SUCCESS",
            "status_message": null,
            "attributes": {"model": "gpt"},
            "results": [{"inputs": {"q": "hi"}, "outputs": {"a": "yo"}}],
            "child_spans": [{"name": "tool", "span_kind": "TOOL"}]
        }))
        .unwrap();

        assert_eq!(span.span_kind, SpanKind::Agent);
        assert_eq!(span.status_code, StatusCode::Success);
        assert_eq!(span.duration_ms(), Some(250.0));
        assert_eq!(span.child_spans.len(), 1);
        assert_eq!(span.child_spans[0].span_kind, SpanKind::Tool);
        let results = span.results.as_ref().unwrap();
        assert_eq!(results[0].inputs.as_ref().unwrap()["q"], json!("hi"));
    }

    #[test]
    fn unknown_and_null_enums_fall_back() {
        let span: Span = serde_json::from_value(json!({
            "span_kind": "RETRIEVER",
            "status_code": null,
            "child_spans": null
        }))
        .unwrap();
        assert_eq!(span.span_kind, SpanKind::Unspecified);
        assert_eq!(span.status_code, StatusCode::Unset);
        assert!(span.child_spans.is_empty());
    }

    #[test]
    fn duration_is_none_when_unmeasurable() {
        let mut span = leaf("a", 10.0, 5.0);
        assert_eq!(span.duration_ms(), None);
        span.end_time_ms = None;
        assert_eq!(span.duration_ms(), None);
    }

    #[test]
    fn display_name_falls_back_to_id_then_kind() {
        let mut span = Span {
            span_kind: SpanKind::Llm,
            ..Span::default()
        };
        assert_eq!(span.display_name(), "LLM");
        span.span_id = Some("span-7".to_string());
        assert_eq!(span.display_name(), "span-7");
        span.name = Some("  ".to_string());
        assert_eq!(span.display_name(), "span-7");
        span.name = Some("chat".to_string());
        assert_eq!(span.display_name(), "chat");
    }

    #[test]
    fn tree_statistics_and_paths() {
        let mut root = leaf("root", 0.0, 10.0);
        let mut mid = leaf("mid", 1.0, 5.0);
        mid.child_spans.push(leaf("deep", 2.0, 3.0));
        root.child_spans.push(mid);
        root.child_spans.push(leaf("sibling", 6.0, 9.0));

        assert_eq!(root.span_count(), 4);
        assert_eq!(root.depth(), 3);
        let deep = root.descendant(&SpanPath::new(vec![0, 0])).unwrap();
        assert_eq!(deep.display_name(), "deep");
        assert!(root.descendant(&SpanPath::new(vec![3])).is_none());
        assert_eq!(root.descendant(&SpanPath::root()).unwrap().display_name(), "root");
    }

    #[test]
    fn error_bubbles_up_through_has_error() {
        let mut root = leaf("root", 0.0, 10.0);
        let mut child = leaf("child", 1.0, 2.0);
        child.status_code = StatusCode::Error;
        child.status_message = Some("boom".to_string());
        root.child_spans.push(child);

        assert!(root.has_error());
        assert!(!root.status_code.is_error());
        let status = root.child_spans[0].status();
        assert_eq!(status.message, Some("boom"));
    }
}
