//! # dk-client
//!
//! Core HTTP client infrastructure for the Daktela REST API.
//!
//! This crate provides the transport layer used by `daktela-rest`:
//! - Client configuration (authentication mode, timeouts, headers)
//! - Wire-level query parameters with bracket-notation serialization
//! - One HTTP round trip per call, no hidden retries
//! - Normalization of responses into [`DaktelaResponse`]
//! - Normalization of failures into a single [`Error`] type
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    DaktelaConnector                         │
//! │  (daktela-rest: options -> QueryParameters, auth mode)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    DkHttpClient                             │
//! │  - Raw HTTP via reqwest                                     │
//! │  - Query flattening, headers, JSON bodies                   │
//! │  - Response / error normalization                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use daktela_client::{ClientConfig, DkHttpClient, QueryParameters};
//!
//! let client = DkHttpClient::new(ClientConfig::default())?;
//! let response = client
//!     .send(
//!         client
//!             .get("https://my.daktela.com/api/v6/tickets")
//!             .cookie_auth(token)
//!             .query(QueryParameters::new().with("take", 10)),
//!     )
//!     .await?;
//! println!("{} of {:?}", response.status, response.total);
//! ```

mod client;
mod config;
mod error;
mod params;
mod request;
mod response;

pub use client::DkHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use params::{QueryParameters, ACCESS_TOKEN_PARAM};
pub use request::{RequestBuilder, RequestMethod};
pub use response::{parse_error_response, DaktelaResponse, Response};

/// Daktela REST API version prefix used for every call.
pub const API_PATH: &str = "api/v6/";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("daktela-api/", env!("CARGO_PKG_VERSION"));
