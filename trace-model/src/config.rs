use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ZOOM: f64 = 50.0;
pub const DEFAULT_ZOOM_STEP: f64 = 1.25;
pub const DEFAULT_WHEEL_SENSITIVITY: f64 = 0.002;

/// Panel tuning knobs. Every field has a default so hosts can pass a
/// partial object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplier applied by the zoom buttons
    pub zoom_step: f64,
    /// Scale change per wheel delta unit (ctrl/meta + wheel)
    pub wheel_sensitivity: f64,
    pub show_model: bool,
    /// How many first-child levels below the root start selected
    pub initial_selection_depth: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            show_model: true,
            initial_selection_depth: 0,
        }
    }
}

fn positive(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

impl PanelConfig {
    /// Overlay `key=value` pairs from a URL query string (leading `?`
    /// optional, percent and `+` encoding decoded). Unknown keys are
    /// skipped, bad values keep the default.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let pairs = url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes());
        for (key, value) in pairs {
            let value = value.trim();
            let applied = match key.as_ref() {
                "min_zoom" => positive(value).map(|v| config.min_zoom = v),
                "max_zoom" => positive(value).map(|v| config.max_zoom = v),
                "zoom_step" => positive(value)
                    .filter(|v| *v > 1.0)
                    .map(|v| config.zoom_step = v),
                "wheel_sensitivity" => positive(value).map(|v| config.wheel_sensitivity = v),
                "show_model" => value.parse::<bool>().ok().map(|v| config.show_model = v),
                "initial_selection_depth" => value
                    .parse::<usize>()
                    .ok()
                    .map(|v| config.initial_selection_depth = v),
                _ => continue,
            };
            if applied.is_none() {
                tracing::warn!("Ignoring invalid panel option {}={}", key, value);
            }
        }
        config.validated()
    }

    /// Repair inconsistent values instead of failing
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            self.min_zoom = defaults.min_zoom;
        }
        if !(self.max_zoom.is_finite() && self.max_zoom > 0.0) {
            self.max_zoom = defaults.max_zoom;
        }
        if self.min_zoom > self.max_zoom {
            tracing::warn!(
                "min_zoom {} exceeds max_zoom {}; swapping",
                self.min_zoom,
                self.max_zoom
            );
            std::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            self.zoom_step = defaults.zoom_step;
        }
        if !(self.wheel_sensitivity.is_finite() && self.wheel_sensitivity > 0.0) {
            self.wheel_sensitivity = defaults.wheel_sensitivity;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config: PanelConfig = serde_json::from_str(r#"{"max_zoom": 10}"#).unwrap();
        assert_eq!(config.max_zoom, 10.0);
        assert_eq!(config.min_zoom, DEFAULT_MIN_ZOOM);
        assert!(config.show_model);
    }

    #[test]
    fn query_overrides_known_keys() {
        let config =
            PanelConfig::from_query("?max_zoom=20&show_model=false&initial_selection_depth=2&x=1");
        assert_eq!(config.max_zoom, 20.0);
        assert!(!config.show_model);
        assert_eq!(config.initial_selection_depth, 2);
        assert_eq!(config.zoom_step, DEFAULT_ZOOM_STEP);
    }

    #[test]
    fn invalid_query_values_keep_defaults() {
        let config = PanelConfig::from_query("min_zoom=-3&zoom_step=0.5&show_model=maybe&max_zoom");
        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    fn query_values_are_url_decoded() {
        let config = PanelConfig::from_query("?show_model=%66alse&max_zoom=2%35&min_zoom=+2");
        assert!(!config.show_model);
        assert_eq!(config.max_zoom, 25.0);
        assert_eq!(config.min_zoom, 2.0);
    }

    #[test]
    fn inverted_zoom_bounds_are_swapped() {
        let config = PanelConfig {
            min_zoom: 8.0,
            max_zoom: 2.0,
            ..PanelConfig::default()
        }
        .validated();
        assert_eq!((config.min_zoom, config.max_zoom), (2.0, 8.0));
    }
}
