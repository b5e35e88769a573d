//! Geolocation client: one validated request, one exchange, one mapped reply.

use super::request;
use super::response::map_geolocation;
use super::types::{Gsm, Ip, Position, WiFi};
use crate::config::ClientConfig;
use crate::error::{GeoError, Result};
use crate::transport::{HttpRequest, Transport, UreqTransport};

pub const DEFAULT_ENDPOINT: &str = "http://api.lbs.yandex.net/geolocation";

/// Client for the geolocation (Locator) service. Requires an API key.
#[derive(Debug, Clone)]
pub struct GeoLocator<T: Transport = UreqTransport> {
    config: ClientConfig,
    endpoint: String,
    transport: T,
}

impl GeoLocator<UreqTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_transport(config, UreqTransport)
    }
}

impl<T: Transport> GeoLocator<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        if config.key().is_none() {
            return Err(GeoError::validation(
                "API key is empty. The geolocation service requires a key",
            ));
        }
        Ok(Self {
            config,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            transport,
        })
    }

    /// Point the client at another URL (proxy, staging, test double).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Locate by public IPv4 address. Internal addresses yield `Ok(None)`
    /// without a network call.
    pub fn get_by_ip(&self, ip: &Ip) -> Result<Option<Position>> {
        match request::by_ip(&self.config, &self.endpoint, ip)? {
            Some(req) => self.execute(&req).map(Some),
            None => {
                log::debug!("{} is an internal address, not geolocating", ip.address_v4);
                Ok(None)
            }
        }
    }

    pub fn get_by_wifi(&self, networks: &[WiFi]) -> Result<Position> {
        let req = request::by_wifi(&self.config, &self.endpoint, networks)?;
        self.execute(&req)
    }

    pub fn get_by_gsm(&self, cells: &[Gsm]) -> Result<Position> {
        let req = request::by_gsm(&self.config, &self.endpoint, cells)?;
        self.execute(&req)
    }

    fn execute(&self, req: &HttpRequest) -> Result<Position> {
        let described = req.describe();
        log::debug!("POST {} {}", req.url, described);

        let response = self.transport.send(req)?;
        log::trace!("geolocation reply {}: {}", response.status, response.body);

        map_geolocation(&response, &described).inspect_err(|e| {
            log::warn!("geolocation request failed: {}", e);
        })
    }
}
