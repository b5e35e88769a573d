//! Request parameter objects and the resolved position.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the service located the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Ip,
    Wifi,
    Gsm,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ip => "ip",
            Self::Wifi => "wifi",
            Self::Gsm => "gsm",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ip" => Ok(Self::Ip),
            "wifi" => Ok(Self::Wifi),
            "gsm" => Ok(Self::Gsm),
            other => Err(format!("unknown position type '{}'", other)),
        }
    }
}

/// Position reported by the geolocation service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Degrees, 7 decimal places.
    pub latitude: f64,
    /// Degrees, 7 decimal places.
    pub longitude: f64,
    /// Height above sea level.
    pub altitude: f64,
    /// Radius in meters around the point that contains the device.
    pub precision: f64,
    pub altitude_precision: f64,
    #[serde(rename = "type")]
    pub source_type: SourceType,
}

/// Public IPv4 address assigned to the device by its carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ip {
    pub address_v4: String,
}

impl Ip {
    pub fn new(address_v4: impl Into<String>) -> Self {
        Self {
            address_v4: address_v4.into(),
        }
    }
}

/// A visible Wi-Fi access point.
///
/// `mac` may use `-`, `:` or `.` between bytes, or no separator at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WiFi {
    pub mac: String,
    /// dBm, negative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_strength: Option<i32>,
    /// Milliseconds since the scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl WiFi {
    pub fn new(mac: impl Into<String>) -> Self {
        Self {
            mac: mac.into(),
            signal_strength: None,
            age: None,
        }
    }

    pub fn with_signal_strength(mut self, dbm: i32) -> Self {
        self.signal_strength = Some(dbm);
        self
    }

    pub fn with_age(mut self, ms: i32) -> Self {
        self.age = Some(ms);
        self
    }
}

/// A visible GSM cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gsm {
    /// MCC
    pub countrycode: i32,
    /// MNC
    pub operatorid: i32,
    /// CID
    pub cellid: i32,
    /// LAC
    pub lac: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_strength: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl Gsm {
    pub fn new(countrycode: i32, operatorid: i32, cellid: i32, lac: i32) -> Self {
        Self {
            countrycode,
            operatorid,
            cellid,
            lac,
            signal_strength: None,
            age: None,
        }
    }

    pub fn with_signal_strength(mut self, dbm: i32) -> Self {
        self.signal_strength = Some(dbm);
        self
    }

    pub fn with_age(mut self, ms: i32) -> Self {
        self.age = Some(ms);
        self
    }
}
