//! Forward and reverse geocoding.

pub mod client;
pub mod components;
pub mod request;
pub mod response;
pub mod types;

pub use client::{GeoDecoder, DEFAULT_ENDPOINT, DEFAULT_RESULTS};
pub use components::{classify, PartialAddress};
pub use response::{GeocodeResult, ResponseMetaData};
pub use types::{Address, Component, ComponentKind, Precision};
