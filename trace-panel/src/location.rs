use trace_model::PanelConfig;

/// Panel options from the page query string, e.g.
/// `?max_zoom=20&show_model=false`. Defaults outside a browser.
pub fn config_from_location() -> PanelConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    PanelConfig::from_query(&search)
}
