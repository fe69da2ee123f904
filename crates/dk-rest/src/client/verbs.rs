//! HTTP verbs of the connector.

use daktela_client::{DaktelaResponse, QueryParameters, RequestMethod, Result};
use serde::Serialize;
use tracing::instrument;

use super::DaktelaConnector;
use crate::options::RequestOptions;

impl DaktelaConnector {
    /// HTTP GET.
    ///
    /// `options` shape the query string: fields, sort, pagination and
    /// filters, or raw `params` that override all of them.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let statuses = daktela
    ///     .get("statuses", Some(&RequestOptions::new().filters([SimpleFilter::new("name", "eq", name)])))
    ///     .await?;
    /// assert_eq!(statuses.total, Some(1));
    /// ```
    #[instrument(skip(self, options), fields(endpoint = %endpoint))]
    pub async fn get(
        &self,
        endpoint: &str,
        options: Option<&RequestOptions>,
    ) -> Result<DaktelaResponse> {
        let params = self.build_request_params(options);
        let request = self.request(RequestMethod::Get, endpoint).query(params);
        self.http.send(request).await
    }

    /// HTTP POST with a JSON payload. `params` are sent verbatim.
    #[instrument(skip(self, payload, params), fields(endpoint = %endpoint))]
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &B,
        params: Option<QueryParameters>,
    ) -> Result<DaktelaResponse> {
        let request = self
            .request(RequestMethod::Post, endpoint)
            .query(self.enrich_with_access_token(params))
            .json(payload)?;
        self.http.send(request).await
    }

    /// HTTP PUT with a JSON payload. `params` are sent verbatim.
    #[instrument(skip(self, payload, params), fields(endpoint = %endpoint))]
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &B,
        params: Option<QueryParameters>,
    ) -> Result<DaktelaResponse> {
        let request = self
            .request(RequestMethod::Put, endpoint)
            .query(self.enrich_with_access_token(params))
            .json(payload)?;
        self.http.send(request).await
    }

    /// HTTP DELETE. `params` are sent verbatim.
    #[instrument(skip(self, params), fields(endpoint = %endpoint))]
    pub async fn delete(
        &self,
        endpoint: &str,
        params: Option<QueryParameters>,
    ) -> Result<DaktelaResponse> {
        let request = self
            .request(RequestMethod::Delete, endpoint)
            .query(self.enrich_with_access_token(params));
        self.http.send(request).await
    }
}
