//! Builds the single form-encoded POST the geolocation service expects:
//! `json={"ip"|"gsm_cells"|"wifi_networks": ..., "common": {...}}`.

use super::types::{Gsm, Ip, WiFi};
use crate::config::ClientConfig;
use crate::error::{GeoError, Result};
use crate::ipv4;
use crate::transport::HttpRequest;
use serde::Serialize;

pub const API_VERSION: &str = "1.0";

#[derive(Serialize)]
struct Common<'a> {
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Serialize)]
struct RequestBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    ip: Option<&'a Ip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gsm_cells: Option<&'a [Gsm]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wifi_networks: Option<&'a [WiFi]>,
    common: Common<'a>,
}

impl<'a> RequestBody<'a> {
    fn new(config: &'a ClientConfig) -> Self {
        Self {
            ip: None,
            gsm_cells: None,
            wifi_networks: None,
            common: Common {
                version: API_VERSION,
                api_key: config.key(),
            },
        }
    }
}

/// `Ok(None)` when the address is internal: there is nothing to ask the
/// service about.
pub fn by_ip(config: &ClientConfig, endpoint: &str, ip: &Ip) -> Result<Option<HttpRequest>> {
    let address = ip.address_v4.trim();
    if address.is_empty() {
        return Err(GeoError::validation("IP address (v4) is empty"));
    }
    if ipv4::is_internal_address(address)? {
        return Ok(None);
    }

    let ip = Ip::new(address);
    let body = RequestBody {
        ip: Some(&ip),
        ..RequestBody::new(config)
    };
    encode(config, endpoint, &body).map(Some)
}

pub fn by_wifi(config: &ClientConfig, endpoint: &str, networks: &[WiFi]) -> Result<HttpRequest> {
    if networks.is_empty() {
        return Err(GeoError::validation("Wi-Fi network list is empty"));
    }
    let body = RequestBody {
        wifi_networks: Some(networks),
        ..RequestBody::new(config)
    };
    encode(config, endpoint, &body)
}

pub fn by_gsm(config: &ClientConfig, endpoint: &str, cells: &[Gsm]) -> Result<HttpRequest> {
    if cells.is_empty() {
        return Err(GeoError::validation("GSM cell list is empty"));
    }
    let body = RequestBody {
        gsm_cells: Some(cells),
        ..RequestBody::new(config)
    };
    encode(config, endpoint, &body)
}

fn encode(config: &ClientConfig, endpoint: &str, body: &RequestBody<'_>) -> Result<HttpRequest> {
    let json = serde_json::to_string(body)
        .map_err(|e| GeoError::validation(format!("cannot encode request: {}", e)))?;
    Ok(HttpRequest::post_form(endpoint, config.timeout).form("json", json))
}
