use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use trace_model::format::format_optional_duration;
use trace_model::{layout_children, Span, SpanPath};

use super::{TooltipAnchor, TraceTreeState};

/// Hover intent delay before the tooltip appears
const TOOLTIP_DELAY_MS: u32 = 150;

pub fn span_bar_class(span: &Span, selected: bool) -> String {
    let mut class = format!("trace-span-bar trace-span--{}", span.span_kind.css_suffix());
    if selected {
        class.push_str(" trace-span-bar--selected");
    }
    if span.status_code.is_error() {
        class.push_str(" trace-span-bar--error");
    }
    class
}

/// One span box plus its children, positioned inside the parent's box by
/// CSS percentages.
#[component]
pub fn SpanTreeNode(path: SpanPath, left: String, width: String) -> Element {
    let mut state = use_context::<TraceTreeState>();

    let (bar_class, label, duration, children) = {
        let trace = state.trace.read();
        let Some(span) = trace.as_ref().and_then(|parsed| parsed.root.descendant(&path)) else {
            return rsx! {};
        };
        let selected = state.selection.read().is_selected(&path);
        let children: Vec<(SpanPath, String, String)> = layout_children(span)
            .into_iter()
            .map(|placed| (path.child(placed.index), placed.left_pct(), placed.width_pct()))
            .collect();
        (
            span_bar_class(span, selected),
            span.display_name().to_string(),
            format_optional_duration(span.duration_ms()),
            children,
        )
    };

    let path_click = path.clone();
    let path_enter = path.clone();
    let path_move = path.clone();

    rsx! {
        div {
            class: "trace-span-node",
            style: "margin-left: {left}; width: {width};",
            div {
                class: "{bar_class}",
                onclick: move |e| {
                    e.stop_propagation();
                    state.select(path_click.clone());
                },
                onmouseenter: move |e| {
                    let point = e.client_coordinates();
                    let path = path_enter.clone();
                    state.selection.with_mut(|selection| selection.hover(path.clone()));
                    spawn(async move {
                        TimeoutFuture::new(TOOLTIP_DELAY_MS).await;
                        let still_hovered = state.selection.peek().hovered() == Some(&path);
                        if still_hovered {
                            state.tooltip.set(Some(TooltipAnchor {
                                path,
                                x: point.x,
                                y: point.y,
                            }));
                        }
                    });
                },
                onmousemove: move |e| {
                    let showing = state
                        .tooltip
                        .peek()
                        .as_ref()
                        .is_some_and(|anchor| anchor.path == path_move);
                    if showing {
                        let point = e.client_coordinates();
                        state.tooltip.set(Some(TooltipAnchor {
                            path: path_move.clone(),
                            x: point.x,
                            y: point.y,
                        }));
                    }
                },
                onmouseleave: move |_| state.end_hover(),
                span { class: "trace-span-name", "{label}" }
                span { class: "trace-span-duration", "{duration}" }
            }
            for (child_path, child_left, child_width) in children {
                SpanTreeNode {
                    key: "{child_path}",
                    path: child_path.clone(),
                    left: child_left,
                    width: child_width,
                }
            }
        }
    }
}
