//! Maps the geolocation service reply to a [`Position`].

use super::types::{Position, SourceType};
use crate::coords::round7;
use crate::error::{GeoError, Result};
use crate::transport::HttpResponse;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ApiResponse {
    /// Usually a string; tolerated as an object with a `message`.
    error: Option<Value>,
    position: Option<WirePosition>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct WirePosition {
    latitude: Option<f64>,
    longitude: Option<f64>,
    altitude: Option<f64>,
    precision: Option<f64>,
    altitude_precision: Option<f64>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

fn error_text(error: &Value) -> Option<String> {
    let text = match error {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("message").and_then(Value::as_str) {
            Some(msg) => msg.to_string(),
            None => error.to_string(),
        },
        other => other.to_string(),
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

pub fn map_geolocation(response: &HttpResponse, request: &str) -> Result<Position> {
    let body = response.body.as_str();
    let fail = |message: String| GeoError::service(message, body, request);

    let parsed: ApiResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) if !response.is_success() => {
            return Err(fail(format!("HTTP status {}", response.status)))
        }
        Err(e) => return Err(fail(format!("Deserialize error: {}", e))),
    };

    if let Some(message) = parsed.error.as_ref().and_then(error_text) {
        return Err(fail(message));
    }
    if !response.is_success() {
        return Err(fail(format!("HTTP status {}", response.status)));
    }

    let position = parsed
        .position
        .ok_or_else(|| fail(format!("no position in response: {}", body)))?;

    let kind = position
        .kind
        .as_deref()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| fail(format!("position has no type: {}", body)))?;
    let source_type: SourceType = kind.parse().map_err(fail)?;

    // absent numbers read as zero, the service's own default
    Ok(Position {
        latitude: round7(position.latitude.unwrap_or(0.0)),
        longitude: round7(position.longitude.unwrap_or(0.0)),
        altitude: position.altitude.unwrap_or(0.0),
        precision: position.precision.unwrap_or(0.0),
        altitude_precision: position.altitude_precision.unwrap_or(0.0),
        source_type,
    })
}
