//! Coordinate pairs as the services write them.
//!
//! The geocoder emits `"lon lat"` strings for points and bounding boxes but
//! accepts `"lat,lon"` on input, so every parse names its ordering explicitly.
//! Values are always stored latitude-first and rounded to 7 decimal places.

use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const SCALE: f64 = 1e7;

/// Order of the two numbers in a coordinate string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordFormat {
    LongLat,
    LatLong,
}

impl CoordFormat {
    /// Value of the geocoder `sco` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LongLat => "longlat",
            Self::LatLong => "latlong",
        }
    }
}

/// Round to 7 decimal places, the precision the services report.
///
/// Magnitudes too large to carry a 7th decimal are returned unchanged.
pub fn round7(value: f64) -> f64 {
    let scaled = value * SCALE;
    if !scaled.is_finite() || scaled.abs() >= 1e16 {
        return value;
    }
    scaled.round() / SCALE
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: round7(latitude),
            longitude: round7(longitude),
        }
    }

    /// Parse two numbers separated by `,`, `;` or whitespace.
    ///
    /// No range check is applied to either value.
    pub fn parse(format: CoordFormat, raw: &str) -> Result<Self> {
        let tokens: Vec<&str> = raw
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.len() != 2 {
            return Err(GeoError::validation(format!(
                "wrong token count: expected 2 coordinates, got {} in '{}'",
                tokens.len(),
                raw
            )));
        }

        let (lat_str, lon_str) = match format {
            CoordFormat::LatLong => (tokens[0], tokens[1]),
            CoordFormat::LongLat => (tokens[1], tokens[0]),
        };

        let latitude = parse_number(lat_str)
            .ok_or_else(|| GeoError::validation(format!("latitude is wrong: '{}'", lat_str)))?;
        let longitude = parse_number(lon_str)
            .ok_or_else(|| GeoError::validation(format!("longitude is wrong: '{}'", lon_str)))?;

        Ok(Self::new(latitude, longitude))
    }
}

// `str::parse::<f64>` only knows `.` as the decimal separator, which is the
// wire format. Non-finite spellings (`inf`, `NaN`) are not coordinates.
fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Renders `latitude,longitude`, the order the geocoder accepts with `sco=latlong`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub lower_corner: Point,
    pub upper_corner: Point,
}

impl Envelope {
    /// Build from the geocoder's `"lon lat"` corner strings.
    pub fn parse(lower_corner: &str, upper_corner: &str) -> Result<Self> {
        Ok(Self {
            lower_corner: Point::parse(CoordFormat::LongLat, lower_corner)?,
            upper_corner: Point::parse(CoordFormat::LongLat, upper_corner)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_parse_latlong_comma() {
        let p = Point::parse(CoordFormat::LatLong, "55.753083,37.587614").unwrap();
        assert_abs_diff_eq!(p.latitude, 55.753083, epsilon = 1e-9);
        assert_abs_diff_eq!(p.longitude, 37.587614, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_longlat_space_swaps_order() {
        let p = Point::parse(CoordFormat::LongLat, "37.587614 55.753083").unwrap();
        assert_abs_diff_eq!(p.latitude, 55.753083, epsilon = 1e-9);
        assert_abs_diff_eq!(p.longitude, 37.587614, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_any_separator_and_padding() {
        let expected = Point::new(55.7, 37.6);
        for raw in [
            "55.7,37.6",
            "55.7;37.6",
            "55.7 37.6",
            "  55.7 ,  37.6  ",
            "55.7,,37.6",
            "\t55.7\n37.6 ",
        ] {
            assert_eq!(Point::parse(CoordFormat::LatLong, raw).unwrap(), expected, "{}", raw);
        }
    }

    #[test]
    fn test_parse_rounds_to_seven_places() {
        let p = Point::parse(CoordFormat::LatLong, "55.123456789 -37.000000049").unwrap();
        assert_abs_diff_eq!(p.latitude, 55.1234568, epsilon = 1e-12);
        assert_abs_diff_eq!(p.longitude, -37.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_no_range_check() {
        let p = Point::parse(CoordFormat::LatLong, "123.5,-720").unwrap();
        assert_abs_diff_eq!(p.latitude, 123.5);
        assert_abs_diff_eq!(p.longitude, -720.0);
    }

    #[test]
    fn test_parse_wrong_token_count() {
        for raw in ["", "55.7", "1,2,3", "1 2 3 4", " ; , "] {
            let err = Point::parse(CoordFormat::LatLong, raw).unwrap_err();
            assert!(err.is_validation());
            assert!(err.to_string().contains("wrong token count"), "{}", err);
        }
    }

    #[test]
    fn test_parse_blames_latitude() {
        let err = Point::parse(CoordFormat::LatLong, "abc,37.6").unwrap_err();
        assert!(err.to_string().contains("latitude is wrong"), "{}", err);

        // in lon-lat order the second token is the latitude
        let err = Point::parse(CoordFormat::LongLat, "37.6 abc").unwrap_err();
        assert!(err.to_string().contains("latitude is wrong"), "{}", err);
    }

    #[test]
    fn test_parse_blames_longitude() {
        let err = Point::parse(CoordFormat::LatLong, "55.7,x").unwrap_err();
        assert!(err.to_string().contains("longitude is wrong"), "{}", err);

        let err = Point::parse(CoordFormat::LongLat, "x 55.7").unwrap_err();
        assert!(err.to_string().contains("longitude is wrong"), "{}", err);
    }

    #[test]
    fn test_parse_rejects_locale_comma_decimal() {
        // "55,7" splits into two tokens, so a third one makes the count wrong
        assert!(Point::parse(CoordFormat::LatLong, "55,7 37,6").is_err());
    }

    #[test]
    fn test_parse_huge_value_stays_finite() {
        let p = Point::parse(CoordFormat::LatLong, "1e305,0").unwrap();
        assert!(p.latitude.is_finite());
        assert_eq!(p.latitude, 1e305);
        assert_eq!(p.longitude, 0.0);
        assert_eq!(round7(-1e300), -1e300);
        assert_eq!(round7(1e17), 1e17);
        assert_eq!(round7(0.123456789), 0.1234568);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(Point::parse(CoordFormat::LatLong, "NaN,37.6").is_err());
        assert!(Point::parse(CoordFormat::LatLong, "55.7,inf").is_err());
    }

    #[test]
    fn test_display_is_lat_first() {
        assert_eq!(Point::new(55.75, 37.58).to_string(), "55.75,37.58");
    }

    #[test]
    fn test_envelope_corners_are_lon_lat() {
        let env = Envelope::parse("37.583508 55.750768", "37.591719 55.755398").unwrap();
        assert_abs_diff_eq!(env.lower_corner.latitude, 55.750768, epsilon = 1e-9);
        assert_abs_diff_eq!(env.lower_corner.longitude, 37.583508, epsilon = 1e-9);
        assert_abs_diff_eq!(env.upper_corner.latitude, 55.755398, epsilon = 1e-9);
        assert_abs_diff_eq!(env.upper_corner.longitude, 37.591719, epsilon = 1e-9);
    }

    #[test]
    fn test_sco_values() {
        assert_eq!(CoordFormat::LatLong.as_str(), "latlong");
        assert_eq!(CoordFormat::LongLat.as_str(), "longlat");
    }
}
