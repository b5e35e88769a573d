//! Maps the geocoder's nested JSON envelope to [`Address`] values.
//!
//! Every level of `response.GeoObjectCollection.featureMember[].GeoObject`
//! may be missing or `null`; each is modelled as an `Option` and checked
//! before descending.

use super::components::classify;
use super::types::{Address, Component, ComponentKind, Precision};
use crate::coords::{CoordFormat, Envelope, Point};
use crate::error::{GeoError, Result};
use crate::transport::HttpResponse;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ApiResponse {
    response: Option<ResponseData>,
    // error replies look like {"statusCode":403,"error":"Forbidden","message":"Invalid key"}
    error: Option<String>,
    message: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ResponseData {
    #[serde(rename = "GeoObjectCollection")]
    geo_object_collection: Option<GeoObjectCollection>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct GeoObjectCollection {
    #[serde(rename = "metaDataProperty")]
    meta_data_property: Option<CollectionMetaData>,
    #[serde(rename = "featureMember")]
    feature_member: Option<Vec<FeatureMember>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct CollectionMetaData {
    #[serde(rename = "GeocoderResponseMetaData")]
    geocoder_response_meta_data: Option<ResponseMetaData>,
}

/// Echo of the query and hit counts for the whole collection.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ResponseMetaData {
    pub request: Option<String>,
    pub found: Option<String>,
    pub results: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct FeatureMember {
    #[serde(rename = "GeoObject")]
    geo_object: Option<GeoObject>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct GeoObject {
    #[serde(rename = "metaDataProperty")]
    meta_data_property: Option<ObjectMetaData>,
    #[serde(rename = "boundedBy")]
    bounded_by: Option<Bound>,
    #[serde(rename = "Point")]
    point: Option<WirePoint>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ObjectMetaData {
    #[serde(rename = "GeocoderMetaData")]
    geocoder_meta_data: Option<GeocoderMetaData>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct GeocoderMetaData {
    kind: Option<String>,
    text: Option<String>,
    precision: Option<String>,
    #[serde(rename = "Address")]
    address: Option<GeoAddress>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct GeoAddress {
    country_code: Option<String>,
    postal_code: Option<String>,
    formatted: Option<String>,
    #[serde(rename = "Components")]
    components: Option<Vec<WireComponent>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct WireComponent {
    kind: Option<String>,
    name: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Bound {
    #[serde(rename = "Envelope")]
    envelope: Option<WireEnvelope>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct WireEnvelope {
    #[serde(rename = "lowerCorner")]
    lower_corner: Option<String>,
    #[serde(rename = "upperCorner")]
    upper_corner: Option<String>,
}

/// `pos` is `"lon lat"`.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct WirePoint {
    pos: Option<String>,
}

/// Result of one geocoder exchange.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocodeResult {
    pub meta: Option<ResponseMetaData>,
    /// Empty when nothing matched.
    pub addresses: Vec<Address>,
}

pub fn map_geocode(response: &HttpResponse, request: &str) -> Result<GeocodeResult> {
    let body = response.body.as_str();
    let fail = |message: String| GeoError::service(message, body, request);

    let parsed: ApiResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) if !response.is_success() => {
            return Err(fail(format!("HTTP status {}", response.status)))
        }
        Err(e) => return Err(fail(format!("Deserialize error: {}", e))),
    };

    let service_text = parsed
        .message
        .as_deref()
        .or(parsed.error.as_deref())
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string);

    if !response.is_success() {
        return Err(fail(
            service_text.unwrap_or_else(|| format!("HTTP status {}", response.status)),
        ));
    }

    let data = parsed
        .response
        .ok_or_else(|| fail(service_text.unwrap_or_else(|| body.to_string())))?;

    let Some(collection) = data.geo_object_collection else {
        return Ok(GeocodeResult::default());
    };

    let meta = collection
        .meta_data_property
        .and_then(|m| m.geocoder_response_meta_data);

    let addresses = collection
        .feature_member
        .unwrap_or_default()
        .into_iter()
        .filter_map(|member| member.geo_object)
        .map(address_from_geo_object)
        .collect::<Result<Vec<_>>>()
        .map_err(|e| match e {
            GeoError::Validation(msg) => fail(format!("bad coordinates in response: {}", msg)),
            other => other,
        })?;

    Ok(GeocodeResult { meta, addresses })
}

fn address_from_geo_object(geo_object: GeoObject) -> Result<Address> {
    let mut address = Address::default();

    if let Some(meta) = geo_object
        .meta_data_property
        .and_then(|m| m.geocoder_meta_data)
    {
        address.kind = meta.kind.as_deref().map(ComponentKind::from_wire);
        address.text = meta.text.unwrap_or_default();

        if let Some(geo_address) = meta.address {
            address.country_code = geo_address.country_code.unwrap_or_default();
            address.postal_code = geo_address.postal_code.unwrap_or_default();
            address.formatted = geo_address.formatted.unwrap_or_default();
            address.precision = meta.precision.as_deref().and_then(Precision::from_wire);

            let components: Vec<Component> = geo_address
                .components
                .unwrap_or_default()
                .into_iter()
                .map(|c| Component::new(c.kind.unwrap_or_default(), c.name.unwrap_or_default()))
                .collect();
            classify(&components).apply_to(&mut address);
        }
    }

    if let Some(envelope) = geo_object.bounded_by.and_then(|b| b.envelope) {
        if let (Some(lower), Some(upper)) = (
            non_empty(envelope.lower_corner),
            non_empty(envelope.upper_corner),
        ) {
            address.envelope = Some(Envelope::parse(&lower, &upper)?);
        }
    }

    if let Some(pos) = geo_object.point.and_then(|p| non_empty(p.pos)) {
        address.point = Some(Point::parse(CoordFormat::LongLat, &pos)?);
    }

    Ok(address)
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}
