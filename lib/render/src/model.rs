//! Input records extracted from upstream JSON.
//!
//! Upstream payloads are loosely typed: fields drift between naming
//! conventions, numbers arrive as strings, and flags as numbers.
//! Extraction here is total apart from the one shape check (the device
//! endpoint must return an array); missing or unusable fields fall back
//! to placeholders instead of failing the render.

use serde_json::Value;
use thiserror::Error;

/// Summary text placeholder when no aliased field carries content.
pub const FALLBACK_SUMMARY: &str = "暂无总结";

/// Device label placeholder for an unidentified device.
pub const FALLBACK_DEVICE: &str = "未知设备";

/// One device row in the list document.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceStatus {
    /// Display name; empty when the payload has none.
    pub name: String,
    /// Foreground app, `None` when absent or empty.
    pub current_app: Option<String>,
    /// Running flag by loose truthiness (bool, or non-zero number).
    pub running: bool,
    /// Battery percentage from a number or numeric string.
    pub battery_level: Option<i64>,
}

/// One AI usage summary.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageSummary {
    /// Device label shown in the info card.
    pub device_label: String,
    /// Free text to be wrapped by the flow engine.
    pub text: String,
    /// RFC 3339 generation time; now() when the payload has none.
    pub timestamp: String,
}

/// Shape failures in upstream payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The device endpoint returned something other than an array.
    #[error("API返回的数据格式不正确，期望数组格式")]
    NotAnArray,
}

/// Extract the device list from a parsed payload.
///
/// The only hard requirement is the array shape; each element is then
/// extracted leniently via [`DeviceStatus::from_json`].
pub fn parse_device_list(value: &Value) -> Result<Vec<DeviceStatus>, ModelError> {
    let items = value.as_array().ok_or(ModelError::NotAnArray)?;
    Ok(items.iter().map(DeviceStatus::from_json).collect())
}

impl DeviceStatus {
    /// Extract one record from a loosely typed object.
    ///
    /// Non-object values produce an all-default record rather than an
    /// error; the row still renders with placeholders.
    pub fn from_json(v: &Value) -> Self {
        Self {
            name: v["device"].as_str().unwrap_or("").to_string(),
            current_app: non_empty(&v["currentApp"]).map(str::to_string),
            running: truthy(&v["running"]),
            battery_level: battery_of(&v["batteryLevel"]),
        }
    }
}

impl UsageSummary {
    /// Extract a summary from a loosely typed object.
    ///
    /// Aliased fields are tried in order and the first non-empty string
    /// wins: `summary` / `message` / `text` for the body and
    /// `deviceName` / `device` / `name` for the label. An empty string
    /// in a preferred field falls through to the next alias.
    pub fn from_json(v: &Value) -> Self {
        let text = non_empty(&v["summary"])
            .or_else(|| non_empty(&v["message"]))
            .or_else(|| non_empty(&v["text"]))
            .unwrap_or(FALLBACK_SUMMARY);
        let device_label = non_empty(&v["deviceName"])
            .or_else(|| non_empty(&v["device"]))
            .or_else(|| non_empty(&v["name"]))
            .unwrap_or(FALLBACK_DEVICE);
        let timestamp = match non_empty(&v["timestamp"]) {
            Some(ts) => ts.to_string(),
            None => chrono::Utc::now().to_rfc3339(),
        };
        Self {
            device_label: device_label.to_string(),
            text: text.to_string(),
            timestamp,
        }
    }
}

fn non_empty(v: &Value) -> Option<&str> {
    v.as_str().filter(|s| !s.is_empty())
}

/// Loose boolean: JSON true, or any non-zero number.
fn truthy(v: &Value) -> bool {
    match v {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

/// Battery percentage from a number or a numeric string.
fn battery_of(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
