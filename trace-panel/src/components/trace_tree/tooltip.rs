use dioxus::prelude::*;
use trace_model::TooltipModel;

use super::TraceTreeState;

const TOOLTIP_OFFSET_PX: f64 = 12.0;

#[component]
pub fn SpanTooltip() -> Element {
    let state = use_context::<TraceTreeState>();

    let Some(anchor) = state.tooltip.read().clone() else {
        return rsx! {};
    };
    let tooltip = {
        let trace = state.trace.read();
        let Some(span) = trace
            .as_ref()
            .and_then(|parsed| parsed.root.descendant(&anchor.path))
        else {
            return rsx! {};
        };
        TooltipModel::from_span(span)
    };

    let left = anchor.x + TOOLTIP_OFFSET_PX;
    let top = anchor.y + TOOLTIP_OFFSET_PX;
    let status_class = if tooltip.is_error {
        "trace-tooltip-row trace-tooltip-error"
    } else {
        "trace-tooltip-row"
    };

    rsx! {
        div {
            class: "trace-tooltip",
            style: "left: {left}px; top: {top}px;",
            div { class: "trace-tooltip-title", "{tooltip.title}" }
            div { class: "trace-tooltip-row", "{tooltip.kind} · {tooltip.duration}" }
            div { class: "{status_class}", "{tooltip.status}" }
            if let Some(message) = tooltip.message.as_ref() {
                div { class: "trace-tooltip-row trace-tooltip-error", "{message}" }
            }
            if let Some(start) = tooltip.start.as_ref() {
                div { class: "trace-tooltip-row", "Started {start}" }
            }
            if tooltip.child_count > 0 {
                div { class: "trace-tooltip-row", "{tooltip.child_count} child spans" }
            }
        }
    }
}
