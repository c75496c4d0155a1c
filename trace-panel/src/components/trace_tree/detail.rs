use dioxus::prelude::*;
use trace_model::{DetailRow, SpanDetail};

use super::TraceTreeState;

#[component]
fn DetailTable(rows: Vec<DetailRow>) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "trace-detail-empty", "None" }
        };
    }
    rsx! {
        table {
            class: "trace-detail-table",
            tbody {
                for row in rows {
                    tr {
                        key: "{row.key}",
                        td { class: "trace-detail-key", "{row.key}" }
                        td {
                            if row.multiline {
                                pre { class: "trace-detail-pre", "{row.value}" }
                            } else {
                                "{row.value}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Metadata of the selected span
#[component]
pub fn SpanDetailPane() -> Element {
    let state = use_context::<TraceTreeState>();

    let detail = {
        let trace = state.trace.read();
        let Some(parsed) = trace.as_ref() else {
            return rsx! {};
        };
        let (_, span) = state.selection.read().resolve(&parsed.root);
        SpanDetail::from_span(span)
    };
    let dot_class = format!("trace-kind-dot trace-span--{}", detail.kind_class);
    let status_pill = if detail.is_error {
        "trace-pill trace-pill--error"
    } else {
        "trace-pill"
    };
    let status_label = detail.general_value("Status").unwrap_or_default().to_string();

    rsx! {
        div {
            class: "trace-detail",
            h3 {
                class: "trace-detail-title",
                span { class: "{dot_class}" }
                "{detail.title}"
                span { class: "{status_pill}", "{status_label}" }
            }
            DetailTable { rows: detail.general.clone() }
            h4 { class: "trace-detail-section", "Attributes" }
            DetailTable { rows: detail.attributes.clone() }
            for result in detail.results.iter() {
                div {
                    key: "{result.number}",
                    h4 { class: "trace-detail-section", "Result {result.number} · Inputs" }
                    DetailTable { rows: result.inputs.clone() }
                    h4 { class: "trace-detail-section", "Result {result.number} · Outputs" }
                    DetailTable { rows: result.outputs.clone() }
                }
            }
        }
    }
}
