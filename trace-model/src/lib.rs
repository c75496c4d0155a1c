//! Trace tree model
//!
//! Everything the trace tree panel knows about spans without touching the
//! DOM:
//! - Span types decoded from the host's `root_span_dumps` JSON
//! - Proportional timeline layout of nested spans
//! - Selection, detail table and tooltip view-models
//! - Zoom state and panel configuration
//!
//! Compiles for both native (tests) and WASM (the Dioxus panel).

pub mod config;
pub mod detail;
pub mod dumps;
pub mod error;
pub mod flatten;
pub mod format;
pub mod layout;
pub mod select;
pub mod span;
pub mod zoom;

pub use config::PanelConfig;
pub use detail::{DetailRow, ResultDetail, SpanDetail, TooltipModel};
pub use dumps::{parse_model_dict, parse_root_span, ParsedTrace, TraceTree};
pub use error::TraceParseError;
pub use flatten::{flatten, FlatSpan};
pub use layout::{effective_duration, layout_children, layout_tree, ChildBox, SpanLayout};
pub use select::{Selection, SpanPath};
pub use span::{AttributeMap, Span, SpanKind, SpanResult, SpanStatus, StatusCode};
pub use zoom::ZoomState;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::{Config, TS};

    #[test]
    fn export_types() {
        // Bindings for the host web application; the target file is set by
        // each type's #[ts(export_to)] attribute
        let config = Config::default();
        SpanKind::export(&config).unwrap();
        StatusCode::export(&config).unwrap();
        SpanResult::export(&config).unwrap();
        Span::export(&config).unwrap();
        TraceTree::export(&config).unwrap();
    }
}
