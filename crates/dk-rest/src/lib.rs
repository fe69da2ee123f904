//! # dk-rest
//!
//! Daktela REST API connector.
//!
//! ## Features
//!
//! - **Query vocabulary** - Pagination, sort keys, simple and composite filters
//! - **Parameter compiler** - Turns [`RequestOptions`] into wire-level query
//!   parameters with a fixed precedence
//! - **Connector** - GET, POST, PUT and DELETE against `api/v6/`, with
//!   cookie or query-token authentication
//! - **Uniform outcomes** - Every call yields a [`DaktelaResponse`] or an
//!   [`Error`] exposing status and API error payload
//!
//! ## Example
//!
//! ```rust,ignore
//! use daktela_rest::{DaktelaConnector, RequestOptions, SimpleFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), daktela_rest::Error> {
//!     let daktela = DaktelaConnector::new("my.daktela.com", "access_token_here")?;
//!
//!     // Create
//!     let created = daktela
//!         .post("statuses", &serde_json::json!({"name": "s1", "title": "Status"}), None)
//!         .await?;
//!
//!     // Query
//!     let found = daktela
//!         .get(
//!             "statuses",
//!             Some(&RequestOptions::new().filters([SimpleFilter::new("name", "eq", "s1")])),
//!         )
//!         .await?;
//!
//!     // Update
//!     daktela
//!         .put("statuses/s1", &serde_json::json!({"description": "Updated"}), None)
//!         .await?;
//!
//!     // Delete
//!     daktela.delete("statuses/s1", None).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod options;
mod types;

// Main client
pub use client::DaktelaConnector;

// Request options and compilation
pub use options::{compile, AuthMode, RequestOptions};

// Query vocabulary
pub use types::{
    CompositeFilter, Filter, Pagination, SimpleFilter, Sort, FILTER_LOGIC_AND, FILTER_LOGIC_OR,
    PAGINATION_SKIP, PAGINATION_TAKE, SORT_ASCENDING, SORT_DESCENDING,
};

// Re-export dk-client types that users might need
pub use daktela_client::{
    ClientConfig, ClientConfigBuilder, DaktelaResponse, Error, ErrorKind, QueryParameters, Result,
};
