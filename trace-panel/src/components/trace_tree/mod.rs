pub mod detail;
pub mod model;
pub mod outline;
pub mod styles;
pub mod timeline;
pub mod tooltip;
pub mod view;

pub use view::PanelTraceTree;

use dioxus::prelude::*;
use trace_model::{ParsedTrace, Selection, SpanPath};

// ── Shared panel state ───────────────────────────────────────────────────────

/// Pointer position for the hover card, in client coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipAnchor {
    pub path: SpanPath,
    pub x: f64,
    pub y: f64,
}

/// Provided by `PanelTraceTree` to every span node, the outline, the detail
/// pane and the tooltip.
#[derive(Clone, Copy)]
pub struct TraceTreeState {
    pub trace: Memo<Option<ParsedTrace>>,
    pub selection: Signal<Selection>,
    pub tooltip: Signal<Option<TooltipAnchor>>,
}

impl TraceTreeState {
    pub fn select(&mut self, path: SpanPath) {
        self.selection.with_mut(|selection| selection.select(path));
    }

    pub fn select_next(&mut self) {
        if let Some(parsed) = self.trace.read().as_ref() {
            self.selection
                .with_mut(|selection| selection.select_next(&parsed.root));
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(parsed) = self.trace.read().as_ref() {
            self.selection
                .with_mut(|selection| selection.select_prev(&parsed.root));
        }
    }

    pub fn end_hover(&mut self) {
        self.selection.with_mut(|selection| selection.clear_hover());
        self.tooltip.set(None);
    }
}
