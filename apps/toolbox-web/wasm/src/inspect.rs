//! Stateless bindings for the inspector pages

use inspect_core::{
    convert_timestamp, decode_jwt, describe_cron, estimate_password, next_occurrences,
    parse_color, relative_from, CronSchedule,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// All three renderings of a parsed color, for the converter page
#[derive(Serialize)]
struct ColorFormats {
    hex: String,
    rgb: String,
    hsl: String,
}

#[wasm_bindgen(js_name = convertColor)]
pub fn convert_color(input: &str) -> Result<JsValue, JsValue> {
    let color = parse_color(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let formats = ColorFormats {
        hex: color.hex(),
        rgb: color.rgb_string(),
        hsl: color.hsl_string(),
    };
    serde_wasm_bindgen::to_value(&formats)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen(js_name = describeCron)]
pub fn describe_cron_js(expression: &str) -> Result<String, JsValue> {
    describe_cron(expression).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Next `count` fire times after `from_unix_seconds`, as RFC 3339 strings
#[wasm_bindgen(js_name = cronNextRuns)]
pub fn cron_next_runs(
    expression: &str,
    from_unix_seconds: f64,
    count: usize,
) -> Result<Vec<String>, JsValue> {
    let schedule =
        CronSchedule::parse(expression).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let from = chrono::DateTime::from_timestamp(from_unix_seconds as i64, 0)
        .ok_or_else(|| JsValue::from_str("Start time out of range"))?;
    Ok(next_occurrences(&schedule, from, count)
        .into_iter()
        .map(|t| t.to_rfc3339())
        .collect())
}

#[wasm_bindgen(js_name = convertTimestamp)]
pub fn convert_timestamp_js(input: &str) -> Result<JsValue, JsValue> {
    let info = convert_timestamp(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&info)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen(js_name = relativeTime)]
pub fn relative_time(timestamp: f64, now: f64) -> String {
    relative_from(timestamp as i64, now as i64)
}

#[wasm_bindgen(js_name = passwordStrength)]
pub fn password_strength(password: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&estimate_password(password))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen(js_name = decodeJwt)]
pub fn decode_jwt_js(token: &str) -> Result<JsValue, JsValue> {
    let decoded = decode_jwt(token).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&decoded)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cron_next_runs_formats_rfc3339() {
        // 2026-01-01T00:00:00Z
        let runs = cron_next_runs("0 12 * * *", 1_767_225_600.0, 2).unwrap();
        assert_eq!(runs[0], "2026-01-01T12:00:00+00:00");
        assert_eq!(runs.len(), 2);
    }

    #[test]
    fn test_relative_time_wrapper() {
        assert_eq!(relative_time(0.0, 7200.0), "2 hours ago");
    }
}
