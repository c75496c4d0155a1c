use chrono::DateTime;

pub fn format_duration_short(ms: f64) -> String {
    if !ms.is_finite() || ms < 0.0 {
        return "-".to_string();
    }
    if ms > 0.0 && ms < 1.0 {
        return "<1ms".to_string();
    }
    // Round before picking the unit so 999.6ms reads 1.0s, not 1000ms.
    let whole_ms = ms.round();
    if whole_ms < 1_000.0 {
        return format!("{whole_ms:.0}ms");
    }
    let tenths = (ms / 100.0).round();
    if tenths < 600.0 {
        return format!("{:.1}s", tenths / 10.0);
    }
    let total_secs = (ms / 1_000.0).round() as i64;
    format!("{}m {:02}s", total_secs / 60, total_secs % 60)
}

pub fn format_optional_duration(ms: Option<f64>) -> String {
    ms.map(format_duration_short)
        .unwrap_or_else(|| "-".to_string())
}

/// Epoch milliseconds as a UTC timestamp with millisecond precision
pub fn format_timestamp(ms: f64) -> Option<String> {
    if !ms.is_finite() {
        return None;
    }
    let dt = DateTime::from_timestamp_millis(ms.round() as i64)?;
    Some(dt.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string())
}

pub fn format_optional_timestamp(ms: Option<f64>) -> String {
    ms.and_then(format_timestamp)
        .unwrap_or_else(|| "-".to_string())
}

/// Strings render raw, everything else as pretty JSON
pub fn pretty_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Null => "null".to_string(),
        _ => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
    }
}

pub fn is_multiline_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Array(items) => !items.is_empty(),
        serde_json::Value::Object(map) => !map.is_empty(),
        serde_json::Value::String(text) => text.contains('\n'),
        _ => false,
    }
}
