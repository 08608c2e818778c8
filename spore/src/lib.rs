#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
mod coerce;
pub mod decode;
pub mod endpoint;
mod error;
pub mod model;
mod rest;
pub mod xml;

pub use client::{Client, HttpClient, Transport};
pub use decode::decode;
pub use endpoint::Page;
pub use error::{Error, Result};
pub use model::{AssetId, SporecastId, UserId};
pub use reqwest;
