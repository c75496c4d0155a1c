use dioxus::prelude::*;
use trace_model::format::format_optional_duration;
use trace_model::{flatten, FlatSpan};

use super::TraceTreeState;

const OUTLINE_INDENT_REM: f64 = 0.9;

pub fn outline_row_class(row: &FlatSpan, selected: bool) -> &'static str {
    match (selected, row.status.is_error()) {
        (true, _) => "trace-outline-row trace-outline-row--selected",
        (false, true) => "trace-outline-row trace-outline-row--error",
        (false, false) => "trace-outline-row",
    }
}

pub fn outline_indent(depth: usize) -> String {
    format!("{:.2}rem", 0.6 + depth as f64 * OUTLINE_INDENT_REM)
}

/// Indented list of every span in pre-order
#[component]
pub fn TraceOutline() -> Element {
    let mut state = use_context::<TraceTreeState>();

    let rows = match state.trace.read().as_ref() {
        Some(parsed) => flatten(&parsed.root),
        None => return rsx! {},
    };
    let selection = state.selection.read().clone();

    rsx! {
        div {
            class: "trace-outline",
            for row in rows {
                {
                    let row_class = outline_row_class(&row, selection.is_selected(&row.path));
                    let indent = outline_indent(row.depth);
                    let dot_class = format!("trace-kind-dot trace-span--{}", row.kind.css_suffix());
                    let duration = format_optional_duration(row.duration_ms);
                    let path = row.path.clone();
                    rsx! {
                        div {
                            key: "{row.path}",
                            class: "{row_class}",
                            style: "padding-left: {indent};",
                            title: "{row.kind.label()} · {row.status.label()}",
                            onclick: move |_| state.select(path.clone()),
                            span { class: "{dot_class}" }
                            span { class: "trace-outline-name", "{row.name}" }
                            span { class: "trace-outline-duration", "{duration}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trace_model::{Span, SpanPath, StatusCode};

    #[test]
    fn indent_grows_with_depth() {
        assert_eq!(outline_indent(0), "0.60rem");
        assert_eq!(outline_indent(2), "2.40rem");
    }

    #[test]
    fn selected_rows_win_over_error_styling() {
        let root = Span {
            status_code: StatusCode::Error,
            ..Span::default()
        };
        let row = flatten(&root).remove(0);
        assert_eq!(row.path, SpanPath::root());
        assert_eq!(
            outline_row_class(&row, true),
            "trace-outline-row trace-outline-row--selected"
        );
        assert_eq!(
            outline_row_class(&row, false),
            "trace-outline-row trace-outline-row--error"
        );
    }
}
