use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use gloo_timers::future::TimeoutFuture;

use trace_model::TraceTree;
use trace_panel::{config_from_location, NodeValue, PanelTraceTree};

const SAMPLE_TRACE: &str = include_str!("../demos/sample_trace.json");
const SAMPLE_MODEL: &str = include_str!("../demos/sample_model.json");

/// Simulated fetch latency so the loading state is visible
const DEMO_LOAD_DELAY_MS: u32 = 300;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config_from_location);
    let mut value = use_signal(|| NodeValue::<TraceTree>::Loading);

    use_effect(move || {
        spawn(async move {
            TimeoutFuture::new(DEMO_LOAD_DELAY_MS).await;
            value.set(NodeValue::Ready(TraceTree {
                root_span_dumps: SAMPLE_TRACE.to_string(),
                model_dict_dumps: Some(SAMPLE_MODEL.to_string()),
                model_hash: Some("5f1c0a9e".to_string()),
            }));
        });
    });

    rsx! {
        div {
            style: "height: 100vh;",
            PanelTraceTree { value: value(), config: config.clone() }
        }
    }
}
