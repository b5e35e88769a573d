//! Query parameters for the geocoder GET requests.

use crate::config::{ClientConfig, Lang};
use crate::coords::CoordFormat;
use crate::error::{GeoError, Result};
use crate::transport::HttpRequest;

pub const MAX_RESULTS: u8 = 100;

/// Clamp a requested result count into `1..=100`.
pub fn clamp_results(qty: u8) -> u8 {
    qty.clamp(1, MAX_RESULTS)
}

/// Reverse geocoding: one address for a `latitude,longitude` pair.
pub fn point_to_address(
    config: &ClientConfig,
    endpoint: &str,
    latitude: f64,
    longitude: f64,
    lang: Lang,
) -> Result<HttpRequest> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(GeoError::validation(format!(
            "coordinates are wrong: {},{}",
            latitude, longitude
        )));
    }

    let req = HttpRequest::get(endpoint, config.timeout)
        .query("geocode", format!("{},{}", latitude, longitude))
        .query("results", "1")
        .query("sco", CoordFormat::LatLong.as_str());
    Ok(with_common(req, config, lang))
}

/// Forward geocoding. `None` for a blank address: there is nothing to look up.
pub fn address_to_points(
    config: &ClientConfig,
    endpoint: &str,
    address: &str,
    qty: u8,
    lang: Lang,
) -> Option<HttpRequest> {
    if address.trim().is_empty() {
        return None;
    }

    let req = HttpRequest::get(endpoint, config.timeout)
        .query("geocode", address)
        .query("results", clamp_results(qty).to_string());
    Some(with_common(req, config, lang))
}

fn with_common(req: HttpRequest, config: &ClientConfig, lang: Lang) -> HttpRequest {
    let req = req.query("format", "json").query("lang", lang.as_str());
    match config.key() {
        Some(key) => req.query("key", key),
        None => req,
    }
}
