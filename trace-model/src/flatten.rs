use crate::select::SpanPath;
use crate::span::{Span, SpanKind, StatusCode};

/// One span of the tree as a row of the outline list
#[derive(Debug, Clone, PartialEq)]
pub struct FlatSpan {
    pub path: SpanPath,
    pub parent: Option<SpanPath>,
    pub depth: usize,
    pub name: String,
    pub kind: SpanKind,
    pub status: StatusCode,
    pub start_time_ms: Option<f64>,
    pub end_time_ms: Option<f64>,
    pub duration_ms: Option<f64>,
    pub child_count: usize,
}

/// Pre-order rows for the whole tree, root first
pub fn flatten(root: &Span) -> Vec<FlatSpan> {
    let mut rows = Vec::with_capacity(root.span_count());
    push_rows(root, SpanPath::root(), &mut rows);
    rows
}

fn push_rows(span: &Span, path: SpanPath, rows: &mut Vec<FlatSpan>) {
    rows.push(FlatSpan {
        parent: path.parent(),
        depth: path.depth(),
        name: span.display_name().to_string(),
        kind: span.span_kind,
        status: span.status_code,
        start_time_ms: span.start_time_ms,
        end_time_ms: span.end_time_ms,
        duration_ms: span.duration_ms(),
        child_count: span.child_spans.len(),
        path: path.clone(),
    });
    for (index, child) in span.child_spans.iter().enumerate() {
        push_rows(child, path.child(index), rows);
    }
}
