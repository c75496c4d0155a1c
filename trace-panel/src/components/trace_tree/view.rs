use dioxus::prelude::*;
use trace_model::format::format_optional_duration;
use trace_model::{PanelConfig, Selection, Span, SpanPath, TraceTree, ZoomState};

use crate::node_value::{use_parsed_trace, NodeValue};

use super::detail::SpanDetailPane;
use super::model::ModelPane;
use super::outline::TraceOutline;
use super::styles::TRACE_TREE_STYLES;
use super::timeline::SpanTreeNode;
use super::tooltip::SpanTooltip;
use super::{TooltipAnchor, TraceTreeState};

// ── Header helpers ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderSummary {
    pub title: String,
    pub span_count_label: String,
    pub duration_label: String,
    pub has_error: bool,
}

pub fn header_summary(root: &Span) -> HeaderSummary {
    let span_count = root.span_count();
    let span_count_label = if span_count == 1 {
        "1 span".to_string()
    } else {
        format!("{span_count} spans")
    };
    HeaderSummary {
        title: root.display_name().to_string(),
        span_count_label,
        duration_label: format_optional_duration(root.duration_ms()),
        has_error: root.has_error(),
    }
}

// ── PanelTraceTree component ─────────────────────────────────────────────────

/// Trace tree panel: zoomable span timeline, span outline and a detail table
/// for the selected span. Renders nothing while the value is loading or when
/// the dump cannot be parsed.
#[component]
pub fn PanelTraceTree(
    value: ReadSignal<NodeValue<TraceTree>>,
    #[props(default)] config: PanelConfig,
) -> Element {
    let trace = use_parsed_trace(value);
    let mut selection = use_signal(Selection::default);
    let tooltip = use_signal(|| None::<TooltipAnchor>);
    let mut zoom = use_signal(|| ZoomState::new(&config));
    let mut state = use_context_provider(|| TraceTreeState {
        trace,
        selection,
        tooltip,
    });

    let initial_depth = config.initial_selection_depth;
    use_effect(move || {
        if let Some(parsed) = trace.read().as_ref() {
            selection.set(Selection::initial(&parsed.root, initial_depth));
        }
    });

    let (summary, model, model_hash) = {
        let guard = trace.read();
        let Some(parsed) = guard.as_ref() else {
            return rsx! {};
        };
        let model = parsed.model.clone().filter(|_| config.show_model);
        (header_summary(&parsed.root), model, parsed.model_hash.clone())
    };

    let zoom_state = zoom();
    let zoom_label = zoom_state.label();
    let canvas_width = zoom_state.timeline_width_pct();

    let on_keydown = move |e: KeyboardEvent| match e.key() {
        Key::ArrowDown => {
            e.prevent_default();
            state.select_next();
        }
        Key::ArrowUp => {
            e.prevent_default();
            state.select_prev();
        }
        Key::Escape => state.end_hover(),
        Key::Character(c) if c == "+" || c == "=" => zoom.with_mut(|z| z.zoom_in()),
        Key::Character(c) if c == "-" => zoom.with_mut(|z| z.zoom_out()),
        Key::Character(c) if c == "0" => zoom.with_mut(|z| z.reset()),
        _ => {}
    };

    rsx! {
        style { {TRACE_TREE_STYLES} }
        div {
            class: "trace-tree-panel",
            tabindex: "0",
            onkeydown: on_keydown,
            div {
                class: "trace-tree-header",
                div {
                    class: "trace-tree-title",
                    title: "{summary.title}",
                    "{summary.title}"
                }
                div {
                    class: "trace-tree-metrics",
                    span { class: "trace-pill", "{summary.span_count_label}" }
                    span { class: "trace-pill", "{summary.duration_label}" }
                    if summary.has_error {
                        span { class: "trace-pill trace-pill--error", "errors" }
                    }
                    div {
                        class: "trace-zoom-controls",
                        button {
                            class: "trace-zoom-btn",
                            disabled: !zoom_state.can_zoom_out(),
                            onclick: move |_| zoom.with_mut(|z| z.zoom_out()),
                            "−"
                        }
                        span { class: "trace-zoom-label", "{zoom_label}" }
                        button {
                            class: "trace-zoom-btn",
                            disabled: !zoom_state.can_zoom_in(),
                            onclick: move |_| zoom.with_mut(|z| z.zoom_in()),
                            "+"
                        }
                        button {
                            class: "trace-zoom-btn",
                            onclick: move |_| zoom.with_mut(|z| z.reset()),
                            "Reset"
                        }
                    }
                }
            }
            div {
                class: "trace-tree-body",
                div {
                    class: "trace-tree-left",
                    div {
                        class: "trace-timeline-scroll",
                        onwheel: move |e: WheelEvent| {
                            let modifiers = e.modifiers();
                            if modifiers.ctrl() || modifiers.meta() {
                                e.prevent_default();
                                let delta_y = e.delta().strip_units().y;
                                zoom.with_mut(|z| z.apply_wheel(delta_y));
                            }
                        },
                        div {
                            class: "trace-timeline-canvas",
                            style: "width: {canvas_width};",
                            SpanTreeNode {
                                path: SpanPath::root(),
                                left: "0%".to_string(),
                                width: "100%".to_string(),
                            }
                        }
                    }
                    TraceOutline {}
                }
                div {
                    class: "trace-tree-right",
                    SpanDetailPane {}
                    if let Some(model) = model {
                        ModelPane { model: model.clone(), model_hash: model_hash.clone() }
                    }
                }
            }
            SpanTooltip {}
        }
    }
}
