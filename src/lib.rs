//! Blocking client for two Yandex geo services.
//!
//! - [`locator::GeoLocator`] resolves an approximate position from a public
//!   IPv4 address, a list of Wi-Fi access points or a list of GSM cells.
//! - [`geocoder::GeoDecoder`] converts coordinates to an address and a
//!   free-text address to candidate points.
//!
//! Both clients normalize the loosely typed wire responses into the owned
//! value types in this crate. "Nothing found" is reported as `Ok(None)` or an
//! empty `Vec`, never as an error.

pub mod config;
pub mod coords;
pub mod error;
pub mod geocoder;
pub mod ipv4;
pub mod locator;
pub mod transport;

pub use config::{ClientConfig, Lang};
pub use coords::{CoordFormat, Envelope, Point};
pub use error::{GeoError, Result};
pub use geocoder::{Address, GeoDecoder, Precision};
pub use locator::{GeoLocator, Gsm, Ip, Position, SourceType, WiFi};
pub use transport::{Transport, TransportError, UreqTransport};
