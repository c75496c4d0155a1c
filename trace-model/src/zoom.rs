use crate::config::PanelConfig;

/// Horizontal zoom of the timeline. `scale == 1.0` fits the root span to the
/// panel width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    scale: f64,
    min: f64,
    max: f64,
    step: f64,
    wheel_sensitivity: f64,
}

impl ZoomState {
    pub fn new(config: &PanelConfig) -> Self {
        let config = config.clone().validated();
        let mut zoom = Self {
            scale: 1.0,
            min: config.min_zoom,
            max: config.max_zoom,
            step: config.zoom_step,
            wheel_sensitivity: config.wheel_sensitivity,
        };
        zoom.set_scale(1.0);
        zoom
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = scale.clamp(self.min, self.max);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale * self.step);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale / self.step);
    }

    pub fn reset(&mut self) {
        self.set_scale(1.0);
    }

    /// Wheel up (negative delta) zooms in
    pub fn apply_wheel(&mut self, delta_y: f64) {
        self.set_scale(self.scale * (-delta_y * self.wheel_sensitivity).exp());
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale < self.max
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale > self.min
    }

    /// CSS width of the timeline canvas
    pub fn timeline_width_pct(&self) -> String {
        format!("{:.2}%", self.scale * 100.0)
    }

    pub fn label(&self) -> String {
        format!("{:.0}%", self.scale * 100.0)
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(&PanelConfig::default())
    }
}
