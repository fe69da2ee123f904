//! HTTP response handling and normalization.
//!
//! The Daktela API wraps every payload in a `result` envelope. List
//! endpoints answer `{"result": {"data": [...], "total": N}}`, single
//! entities `{"result": {...}}` or `{"result": null}`, and failures may carry
//! an `{"error": ...}` object. [`DaktelaResponse`] and
//! [`parse_error_response`] turn those shapes into one uniform result and one
//! uniform error.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

/// Raw response as received from the transport, body fully read.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    body: Bytes,
}

impl Response {
    /// Create a response from its parts.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The raw body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The body parsed as JSON, or `None` when empty or not JSON.
    pub fn json_body(&self) -> Option<Value> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        serde_json::from_slice(&self.body).ok()
    }

    /// Normalize a successful response.
    pub fn into_daktela(self) -> DaktelaResponse {
        DaktelaResponse::from_body(self.status, self.json_body().as_ref())
    }

    /// Normalize the response into a result or, for a non-2xx status, an
    /// error.
    pub fn check_daktela_error(self) -> Result<DaktelaResponse> {
        if self.is_success() {
            Ok(self.into_daktela())
        } else {
            Err(parse_error_response(self.status, self.json_body().as_ref()))
        }
    }
}

/// Uniform result of a Daktela API call.
#[derive(Debug, Clone, PartialEq)]
pub struct DaktelaResponse {
    /// HTTP status code of the response.
    pub status: u16,
    /// Payload: the list for list endpoints, the entity otherwise.
    pub data: Option<Value>,
    /// Total number of rows, only for list responses.
    pub total: Option<u64>,
}

impl DaktelaResponse {
    /// Build from a status code and a decoded body.
    pub fn from_body(status: u16, body: Option<&Value>) -> Self {
        let result = body
            .and_then(|body| body.get("result"))
            .filter(|result| !result.is_null());

        let Some(result) = result else {
            return Self {
                status,
                data: None,
                total: None,
            };
        };

        match result.get("data") {
            Some(Value::Array(rows)) => Self {
                status,
                data: Some(Value::Array(rows.clone())),
                total: result.get("total").and_then(Value::as_u64),
            },
            _ => Self {
                status,
                data: Some(result.clone()),
                total: None,
            },
        }
    }

    /// Returns true if this is a list response.
    pub fn is_list(&self) -> bool {
        matches!(self.data, Some(Value::Array(_)))
    }

    /// Deserialize the payload.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let data = self.data.clone().unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(Into::into)
    }

    /// Deserialize the rows of a list response. A single-entity or empty
    /// response yields no rows.
    pub fn records<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        match &self.data {
            Some(Value::Array(rows)) => rows
                .iter()
                .map(|row| serde_json::from_value(row.clone()).map_err(Into::into))
                .collect(),
            _ => Ok(Vec::new()),
        }
    }
}

/// Convert a non-2xx response into an error, keeping the API's `error`
/// payload when the body carries one.
pub fn parse_error_response(status: u16, body: Option<&Value>) -> Error {
    let api_error = body
        .and_then(|body| body.get("error"))
        .filter(|error| !error.is_null())
        .cloned();

    Error::new(ErrorKind::Http {
        status,
        message: format!("Request failed with status code {status}"),
        api_error,
    })
}
