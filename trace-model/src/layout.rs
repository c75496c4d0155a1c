//! Timeline layout
//!
//! Every span box is positioned relative to its parent. For a parent with
//! total duration `D = max(duration, child count, 1)` a child sits at
//! `(clamped start - parent start) / D` and spans `max(duration, 1) / D`.
//! A parent with no end time takes its duration from its children.
//! Both fractions are rendered as CSS percentages, so nesting the boxes
//! reproduces the whole tree without any absolute coordinates.

use crate::select::SpanPath;
use crate::span::Span;

/// Position of one child inside its parent, as fractions of the parent width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildBox {
    pub index: usize,
    pub offset: f64,
    pub width: f64,
}

impl ChildBox {
    pub fn left_pct(&self) -> String {
        format!("{:.4}%", self.offset * 100.0)
    }

    pub fn width_pct(&self) -> String {
        format!("{:.4}%", self.width * 100.0)
    }
}

/// Recursive layout of a span subtree
#[derive(Debug, Clone, PartialEq)]
pub struct SpanLayout {
    pub path: SpanPath,
    pub offset: f64,
    pub width: f64,
    pub children: Vec<SpanLayout>,
}

impl SpanLayout {
    /// `(path, start, end)` of every box as fractions of the root width
    pub fn absolute_extents(&self) -> Vec<(SpanPath, f64, f64)> {
        let mut out = Vec::new();
        self.collect_extents(0.0, 1.0, &mut out);
        out
    }

    fn collect_extents(&self, parent_left: f64, parent_width: f64, out: &mut Vec<(SpanPath, f64, f64)>) {
        let left = parent_left + self.offset * parent_width;
        let width = self.width * parent_width;
        out.push((self.path.clone(), left, left + width));
        for child in &self.children {
            child.collect_extents(left, width, out);
        }
    }
}

/// Total duration used to scale a span's children; never below one unit
pub fn effective_duration(span: &Span) -> f64 {
    span.duration_ms()
        .or_else(|| inferred_duration(span))
        .unwrap_or(0.0)
        .max(span.child_spans.len() as f64)
        .max(1.0)
}

/// Extent of the children's boxes when the span itself has no usable end
/// time. Each box is at least one unit wide, so the latest child stays visible.
fn inferred_duration(span: &Span) -> Option<f64> {
    let origin = layout_origin(span);
    span.child_spans
        .iter()
        .filter_map(|child| {
            let start = child
                .start_time_ms
                .filter(|start| start.is_finite())?
                .max(origin);
            Some(start + child.duration_ms().unwrap_or(0.0).max(1.0) - origin)
        })
        .reduce(f64::max)
}

/// Time the parent's children are measured from
fn layout_origin(span: &Span) -> f64 {
    span.start_time_ms
        .filter(|start| start.is_finite())
        .or_else(|| {
            span.child_spans
                .iter()
                .filter_map(|child| child.start_time_ms)
                .filter(|start| start.is_finite())
                .reduce(f64::min)
        })
        .unwrap_or(0.0)
}

pub fn layout_children(span: &Span) -> Vec<ChildBox> {
    let origin = layout_origin(span);
    let total = effective_duration(span);

    span.child_spans
        .iter()
        .enumerate()
        .map(|(index, child)| {
            let start = match child.start_time_ms.filter(|start| start.is_finite()) {
                Some(start) if start < origin => {
                    tracing::debug!(
                        "Span {} starts {}ms before its parent; clamping",
                        child.display_name(),
                        origin - start
                    );
                    origin
                }
                Some(start) => start,
                // Unmeasured children take consecutive unit slots.
                None => origin + index as f64,
            };
            let duration = child.duration_ms().unwrap_or(0.0).max(1.0);

            let offset = ((start - origin) / total).clamp(0.0, 1.0);
            let width = (duration / total).clamp(0.0, 1.0 - offset);
            ChildBox {
                index,
                offset,
                width,
            }
        })
        .collect()
}

pub fn layout_tree(root: &Span) -> SpanLayout {
    layout_subtree(root, SpanPath::root(), 0.0, 1.0)
}

fn layout_subtree(span: &Span, path: SpanPath, offset: f64, width: f64) -> SpanLayout {
    let children = layout_children(span)
        .into_iter()
        .zip(&span.child_spans)
        .map(|(placed, child)| {
            layout_subtree(child, path.child(placed.index), placed.offset, placed.width)
        })
        .collect();
    SpanLayout {
        path,
        offset,
        width,
        children,
    }
}
