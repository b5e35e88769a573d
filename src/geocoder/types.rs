//! Geocoder result types.

use crate::coords::{Envelope, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Toponym kind used by address components and by whole geo objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Other,
    House,
    Street,
    Metro,
    District,
    Locality,
    Area,
    Province,
    Country,
    Hydro,
    Railway,
    Route,
    Vegetation,
    Airport,
    /// Any kind this client does not know; ignored when classifying.
    Unknown,
}

impl ComponentKind {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "other" => Self::Other,
            "house" => Self::House,
            "street" => Self::Street,
            "metro" => Self::Metro,
            "district" => Self::District,
            "locality" => Self::Locality,
            "area" => Self::Area,
            "province" => Self::Province,
            "country" => Self::Country,
            "hydro" => Self::Hydro,
            "railway" => Self::Railway,
            "route" => Self::Route,
            "vegetation" => Self::Vegetation,
            "airport" => Self::Airport,
            _ => Self::Unknown,
        }
    }
}

/// How well the match corresponds to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Other,
    /// Exact match.
    Exact,
    /// House number matched, building or block did not.
    Number,
    /// A house with a nearby number was found.
    Near,
    /// Approximate coordinates of the requested house.
    Range,
    /// Only the street was found.
    Street,
}

impl Precision {
    /// `None` for a missing or blank tag; unrecognized text is `Other`.
    pub fn from_wire(s: &str) -> Option<Self> {
        let p = match s.trim() {
            "" => return None,
            "exact" => Self::Exact,
            "number" => Self::Number,
            "near" => Self::Near,
            "range" => Self::Range,
            "street" => Self::Street,
            _ => Self::Other,
        };
        Some(p)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Other => "other",
            Self::Exact => "exact",
            Self::Number => "number",
            Self::Near => "near",
            Self::Range => "range",
            Self::Street => "street",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One typed name fragment of an address, in service order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub kind: String,
    pub name: String,
}

impl Component {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

/// A geocoded address. Text fields are empty rather than absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Address {
    pub country_code: String,
    pub postal_code: String,
    pub country: String,
    /// First province-kind component.
    pub province: String,
    /// Second and later province-kind components.
    pub region: String,
    pub area: String,
    pub city: String,
    pub street: String,
    pub house: String,
    pub precision: Option<Precision>,
    pub formatted: String,
    /// Kind of the matched object as a whole.
    pub kind: Option<ComponentKind>,
    /// Full text of the match, country first.
    pub text: String,
    pub envelope: Option<Envelope>,
    pub point: Option<Point>,
}
