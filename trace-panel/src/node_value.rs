use dioxus::prelude::*;
use trace_model::{ParsedTrace, TraceTree};

/// Loading state handed over by the host's data hook. The panel never
/// fetches anything itself.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue<T> {
    Loading,
    Ready(T),
}

impl<T> NodeValue<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, NodeValue::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            NodeValue::Loading => None,
            NodeValue::Ready(value) => Some(value),
        }
    }
}

impl<T> Default for NodeValue<T> {
    fn default() -> Self {
        NodeValue::Loading
    }
}

impl<T> From<Option<T>> for NodeValue<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(NodeValue::Loading, NodeValue::Ready)
    }
}

/// Decode a node value, logging and swallowing parse failures. `None` while
/// loading or when the dump is unreadable.
pub fn parse_node_value(value: &NodeValue<TraceTree>) -> Option<ParsedTrace> {
    let tree = value.ready()?;
    match tree.parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            dioxus_logger::tracing::warn!("Failed to parse trace tree: {}", e);
            None
        }
    }
}

/// Memoised parse of the host value; re-runs only when the value changes
pub fn use_parsed_trace(value: ReadSignal<NodeValue<TraceTree>>) -> Memo<Option<ParsedTrace>> {
    use_memo(move || parse_node_value(&value.read()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_parses_to_nothing() {
        assert!(parse_node_value(&NodeValue::Loading).is_none());
        assert!(NodeValue::<TraceTree>::default().is_loading());
    }

    #[test]
    fn malformed_dump_parses_to_nothing() {
        let value = NodeValue::Ready(TraceTree::new("{\"name\": \"unterminated"));
        assert!(parse_node_value(&value).is_none());
    }

    #[test]
    fn ready_dump_parses() {
        let value = NodeValue::Ready(TraceTree::new(r#"{"name": "root", "span_kind": "CHAIN"}"#));
        let parsed = parse_node_value(&value).unwrap();
        assert_eq!(parsed.root.display_name(), "root");
    }

    #[test]
    fn option_converts_to_node_value() {
        assert_eq!(NodeValue::from(Some(3)), NodeValue::Ready(3));
        assert_eq!(NodeValue::<i32>::from(None), NodeValue::Loading);
    }
}
