use crate::format::{
    format_optional_duration, format_optional_timestamp, format_timestamp, is_multiline_value,
    pretty_value,
};
use crate::span::{AttributeMap, Span};

// ── Detail table ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub key: String,
    pub value: String,
    pub multiline: bool,
}

impl DetailRow {
    fn text(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
            multiline: false,
        }
    }

    fn json(key: &str, value: &serde_json::Value) -> Self {
        Self {
            key: key.to_string(),
            value: pretty_value(value),
            multiline: is_multiline_value(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDetail {
    /// 1-based, as shown in the section title
    pub number: usize,
    pub inputs: Vec<DetailRow>,
    pub outputs: Vec<DetailRow>,
}

/// Everything the detail pane shows for the selected span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanDetail {
    pub title: String,
    pub kind_class: &'static str,
    pub is_error: bool,
    pub general: Vec<DetailRow>,
    pub attributes: Vec<DetailRow>,
    pub results: Vec<ResultDetail>,
}

fn map_rows(map: Option<&AttributeMap>) -> Vec<DetailRow> {
    map.map(|map| {
        map.iter()
            .map(|(key, value)| DetailRow::json(key, value))
            .collect()
    })
    .unwrap_or_default()
}

impl SpanDetail {
    pub fn from_span(span: &Span) -> Self {
        let mut general = vec![
            DetailRow::text("Name", span.name.as_deref().unwrap_or("-")),
            DetailRow::text("Kind", span.span_kind.label()),
            DetailRow::text("Status", span.status_code.label()),
        ];
        if let Some(message) = span.status_message.as_deref().filter(|m| !m.is_empty()) {
            general.push(DetailRow::text("Status message", message));
        }
        if let Some(span_id) = span.span_id.as_deref() {
            general.push(DetailRow::text("Span ID", span_id));
        }
        general.push(DetailRow::text(
            "Start",
            format_optional_timestamp(span.start_time_ms),
        ));
        general.push(DetailRow::text("End", format_optional_timestamp(span.end_time_ms)));
        general.push(DetailRow::text(
            "Duration",
            format_optional_duration(span.duration_ms()),
        ));
        general.push(DetailRow::text(
            "Children",
            span.child_spans.len().to_string(),
        ));

        let results = span
            .results
            .as_deref()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(idx, result)| ResultDetail {
                number: idx + 1,
                inputs: map_rows(result.inputs.as_ref()),
                outputs: map_rows(result.outputs.as_ref()),
            })
            .collect();

        Self {
            title: span.display_name().to_string(),
            kind_class: span.span_kind.css_suffix(),
            is_error: span.status_code.is_error(),
            general,
            attributes: map_rows(span.attributes.as_ref()),
            results,
        }
    }

    pub fn general_value(&self, key: &str) -> Option<&str> {
        self.general
            .iter()
            .find(|row| row.key == key)
            .map(|row| row.value.as_str())
    }
}

// ── Tooltip ──────────────────────────────────────────────────────────────────

/// Hover card contents for one span box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipModel {
    pub title: String,
    pub kind: &'static str,
    pub status: &'static str,
    pub is_error: bool,
    pub duration: String,
    pub start: Option<String>,
    pub message: Option<String>,
    pub child_count: usize,
}

impl TooltipModel {
    pub fn from_span(span: &Span) -> Self {
        Self {
            title: span.display_name().to_string(),
            kind: span.span_kind.label(),
            status: span.status_code.label(),
            is_error: span.status_code.is_error(),
            duration: format_optional_duration(span.duration_ms()),
            start: span.start_time_ms.and_then(format_timestamp),
            message: span.status_message.clone().filter(|m| !m.is_empty()),
            child_count: span.child_spans.len(),
        }
    }
}
