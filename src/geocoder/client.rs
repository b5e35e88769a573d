//! Geocoding client: address for a point, points for an address.

use super::request;
use super::response::{map_geocode, GeocodeResult};
use super::types::Address;
use crate::config::{ClientConfig, Lang};
use crate::error::Result;
use crate::transport::{HttpRequest, Transport, UreqTransport};

pub const DEFAULT_ENDPOINT: &str = "https://geocode-maps.yandex.ru/1.x/";

/// Result count used by [`GeoDecoder::get_points_by_address`].
pub const DEFAULT_RESULTS: u8 = 5;

/// Client for the geocoding service. The API key is optional.
#[derive(Debug, Clone)]
pub struct GeoDecoder<T: Transport = UreqTransport> {
    config: ClientConfig,
    endpoint: String,
    transport: T,
}

impl GeoDecoder<UreqTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport)
    }
}

impl Default for GeoDecoder<UreqTransport> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> GeoDecoder<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            transport,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Address of the object at `latitude, longitude`, in the configured language.
    pub fn get_address_by_point(&self, latitude: f64, longitude: f64) -> Result<Option<Address>> {
        self.get_address_by_point_in(latitude, longitude, self.config.lang)
    }

    pub fn get_address_by_point_in(
        &self,
        latitude: f64,
        longitude: f64,
        lang: Lang,
    ) -> Result<Option<Address>> {
        let req = request::point_to_address(&self.config, &self.endpoint, latitude, longitude, lang)?;
        let result = self.execute(&req)?;
        Ok(result.addresses.into_iter().next())
    }

    /// Up to `qty` matches for a free-text address (clamped to `1..=100`).
    /// A blank address returns an empty list without a request.
    pub fn get_points_by_address(&self, address: &str, qty: u8) -> Result<Vec<Address>> {
        self.get_points_by_address_in(address, qty, self.config.lang)
    }

    pub fn get_points_by_address_in(
        &self,
        address: &str,
        qty: u8,
        lang: Lang,
    ) -> Result<Vec<Address>> {
        match request::address_to_points(&self.config, &self.endpoint, address, qty, lang) {
            Some(req) => Ok(self.execute(&req)?.addresses),
            None => Ok(Vec::new()),
        }
    }

    fn execute(&self, req: &HttpRequest) -> Result<GeocodeResult> {
        let described = req.describe();
        log::debug!("GET {}?{}", req.url, described);

        let response = self.transport.send(req)?;
        log::trace!("geocoder reply {}: {}", response.status, response.body);

        let result = map_geocode(&response, &described).inspect_err(|e| {
            log::warn!("geocoder request failed: {}", e);
        })?;

        if let Some(meta) = &result.meta {
            log::debug!(
                "geocoder matched '{}': found {}, returned {}",
                meta.request.as_deref().unwrap_or_default(),
                meta.found.as_deref().unwrap_or("?"),
                result.addresses.len()
            );
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use crate::transport::testing::FakeTransport;

    fn decoder(fake: &FakeTransport) -> GeoDecoder<&FakeTransport> {
        GeoDecoder::with_transport(ClientConfig::new().with_lang(Lang::EnUs), fake)
            .with_endpoint("https://geocoder.test/")
    }

    const TWO_HITS: &str = r#"{"response":{"GeoObjectCollection":{"featureMember":[
        {"GeoObject":{"metaDataProperty":{"GeocoderMetaData":{"Address":{"Components":[
            {"kind":"locality","name":"Moscow"}]}}},"Point":{"pos":"37.617698 55.755864"}}},
        {"GeoObject":{"metaDataProperty":{"GeocoderMetaData":{"Address":{"Components":[
            {"kind":"locality","name":"Moscow"},{"kind":"province","name":"Idaho"}]}}},
            "Point":{"pos":"-116.999 46.7324"}}}]}}}"#;

    #[test]
    fn test_points_by_address() {
        let fake = FakeTransport::replying(200, TWO_HITS);
        let hits = decoder(&fake).get_points_by_address("Moscow", 10).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].province, "Idaho");
        assert!(hits[1].point.unwrap().longitude < 0.0);

        let req = fake.last_request();
        assert_eq!(req.url, "https://geocoder.test/");
        assert_eq!(req.query_value("results"), Some("10"));
        assert_eq!(req.query_value("lang"), Some("en_US"));
    }

    #[test]
    fn test_blank_address_skips_network() {
        let fake = FakeTransport::default();
        assert!(decoder(&fake).get_points_by_address("", DEFAULT_RESULTS).unwrap().is_empty());
        assert_eq!(fake.sent_count(), 0);
    }

    #[test]
    fn test_address_by_point_takes_first() {
        let fake = FakeTransport::replying(200, TWO_HITS);
        let addr = decoder(&fake).get_address_by_point(55.755864, 37.617698).unwrap().unwrap();
        assert_eq!(addr.city, "Moscow");
        assert!(addr.province.is_empty());
        assert_eq!(fake.last_request().query_value("geocode"), Some("55.755864,37.617698"));
    }

    #[test]
    fn test_address_by_point_no_match() {
        let fake = FakeTransport::replying(200, r#"{"response":{"GeoObjectCollection":{"featureMember":[]}}}"#);
        assert!(decoder(&fake).get_address_by_point(0.0, 0.0).unwrap().is_none());
    }

    #[test]
    fn test_per_call_language() {
        let fake = FakeTransport::replying(200, r#"{"response":{}}"#);
        decoder(&fake).get_points_by_address_in("Kyiv", 1, Lang::UkUa).unwrap();
        assert_eq!(fake.last_request().query_value("lang"), Some("uk_UA"));
    }

    #[test]
    fn test_service_error_carries_query() {
        let fake = FakeTransport::replying(200, "{}");
        match decoder(&fake).get_points_by_address("Moscow", 1).unwrap_err() {
            GeoError::Service { request, .. } => assert!(request.contains("geocode=Moscow")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_transport_error_propagates() {
        let fake = FakeTransport::failing("dns failure");
        let err = decoder(&fake).get_address_by_point(1.0, 2.0).unwrap_err();
        assert!(matches!(err, GeoError::Transport(_)));
    }
}
