//! Geolocation by network observables: public IPv4, Wi-Fi access points
//! or GSM cells.

pub mod client;
pub mod request;
pub mod response;
pub mod types;

pub use client::{GeoLocator, DEFAULT_ENDPOINT};
pub use types::{Gsm, Ip, Position, SourceType, WiFi};
