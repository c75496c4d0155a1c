use dioxus::prelude::*;
use serde_json::Value;

/// Levels of the model dict expanded on first render
const MODEL_EXPANDED_DEPTH: usize = 1;

/// Child entries of an object or array, labelled by key or index
pub fn model_entries(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, child)| (key.clone(), child.clone()))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, child)| (idx.to_string(), child.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

/// One-line rendering of a leaf, or a size hint for containers
pub fn model_summary(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("{{{} keys}}", map.len()),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::String(text) => format!("\"{text}\""),
        other => other.to_string(),
    }
}

#[component]
fn ModelNode(label: String, value: Value, depth: usize) -> Element {
    let mut expanded = use_signal(|| depth < MODEL_EXPANDED_DEPTH);
    let entries = model_entries(&value);
    let summary = model_summary(&value);
    let indent = format!("{:.1}rem", depth as f64 * 0.8);

    if entries.is_empty() {
        return rsx! {
            div {
                class: "trace-model-node",
                style: "padding-left: {indent};",
                span { class: "trace-model-key", "{label}: " }
                span { class: "trace-model-value", "{summary}" }
            }
        };
    }

    let marker = if expanded() { "▾" } else { "▸" };
    rsx! {
        div {
            class: "trace-model-node",
            div {
                class: "trace-model-toggle",
                style: "padding-left: {indent};",
                onclick: move |_| expanded.set(!expanded()),
                "{marker} "
                span { class: "trace-model-key", "{label}" }
                span { class: "trace-model-value", " {summary}" }
            }
            if expanded() {
                for (child_label, child_value) in entries {
                    ModelNode {
                        key: "{child_label}",
                        label: child_label.clone(),
                        value: child_value,
                        depth: depth + 1,
                    }
                }
            }
        }
    }
}

/// Collapsible view of the model architecture that produced the trace
#[component]
pub fn ModelPane(model: Value, model_hash: Option<String>) -> Element {
    rsx! {
        div {
            class: "trace-model",
            h4 { class: "trace-detail-section", "Model" }
            if let Some(hash) = model_hash.as_ref() {
                div { class: "trace-pill", "hash {hash}" }
            }
            ModelNode { label: "model".to_string(), value: model.clone(), depth: 0 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entries_cover_objects_and_arrays() {
        let model = json!({"agent": {"tools": ["search", "calc"]}, "name": "demo"});
        let entries = model_entries(&model);
        let labels: Vec<&str> = entries.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, ["agent", "name"]);

        let tools = model_entries(&model["agent"]["tools"]);
        assert_eq!(tools[1], ("1".to_string(), json!("calc")));
        assert!(model_entries(&json!(3)).is_empty());
    }

    #[test]
    fn entries_keep_recorded_key_order() {
        let model: Value =
            serde_json::from_str(r#"{"tools": [], "llm": "gpt-4", "agent": {}}"#).unwrap();
        let labels: Vec<String> = model_entries(&model)
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, ["tools", "llm", "agent"]);
    }

    #[test]
    fn summaries() {
        assert_eq!(model_summary(&json!({"a": 1, "b": 2})), "{2 keys}");
        assert_eq!(model_summary(&json!([1])), "[1 items]");
        assert_eq!(model_summary(&json!("gpt-4")), "\"gpt-4\"");
        assert_eq!(model_summary(&json!(null)), "null");
    }
}
