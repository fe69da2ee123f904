//! # daktela-api
//!
//! A client library for the Daktela contact-center REST API.
//!
//! The connector turns declarative query descriptions (fields, sort,
//! pagination, filters) into wire-level query parameters and turns every
//! HTTP outcome into a uniform [`rest::DaktelaResponse`] or
//! [`rest::Error`].
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Tracing spans skip payloads, options and credentials
//! - Transport error messages are sanitized of `accessToken` and `c_user`
//!   values
//!
//! ## Crates
//!
//! - **daktela-client** - Transport: configuration, query serialization,
//!   response and error normalization
//! - **daktela-rest** - Pagination/sort/filter vocabulary, parameter compiler,
//!   `DaktelaConnector`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use daktela_api::rest::{DaktelaConnector, Pagination, RequestOptions, Sort};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let daktela = DaktelaConnector::from_env()?;
//!
//!     let tickets = daktela
//!         .get(
//!             "tickets",
//!             Some(
//!                 &RequestOptions::new()
//!                     .sort([Sort::desc("edited")])
//!                     .pagination(Pagination::with_take(10)),
//!             ),
//!         )
//!         .await?;
//!
//!     println!("{} tickets in total", tickets.total.unwrap_or_default());
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
pub use daktela_client as client;
pub use daktela_rest as rest;
