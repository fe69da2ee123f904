//! Daktela REST API connector.
//!
//! `DaktelaConnector` wraps `DkHttpClient` from `dk-client`, owns the base
//! URL and the authentication mode, and exposes the four HTTP verbs.

use daktela_client::{
    ClientConfig, DkHttpClient, Error, ErrorKind, QueryParameters, RequestBuilder, RequestMethod,
    Result, API_PATH,
};

use crate::options::{compile, AuthMode, RequestOptions};

mod verbs;

/// Daktela REST API connector.
///
/// Configuration is fixed at construction, so one connector can serve
/// concurrent calls without locking.
///
/// # Example
///
/// ```rust,ignore
/// use daktela_rest::{DaktelaConnector, Pagination, RequestOptions, SimpleFilter, Sort};
///
/// let daktela = DaktelaConnector::new("my.daktela.com", "access_token_here")?;
///
/// let tickets = daktela
///     .get(
///         "tickets",
///         Some(
///             &RequestOptions::new()
///                 .fields(["name", "title"])
///                 .sort([Sort::desc("edited")])
///                 .pagination(Pagination::with_take(10))
///                 .filters([SimpleFilter::new("stage", "eq", "OPEN")]),
///         ),
///     )
///     .await?;
/// println!("{} of {:?}", tickets.status, tickets.total);
/// ```
#[derive(Clone)]
pub struct DaktelaConnector {
    http: DkHttpClient,
    base_url: String,
    auth: AuthMode,
}

impl std::fmt::Debug for DaktelaConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DaktelaConnector")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

impl DaktelaConnector {
    /// Create a connector for the given instance (e.g. `my.daktela.com`)
    /// with default configuration.
    pub fn new(instance_url: impl AsRef<str>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(
            instance_url,
            Some(access_token.into()),
            ClientConfig::default(),
        )
    }

    /// Create a connector that sends no credentials.
    pub fn without_token(instance_url: impl AsRef<str>) -> Result<Self> {
        Self::with_config(instance_url, None, ClientConfig::default())
    }

    /// Create a connector with custom configuration.
    pub fn with_config(
        instance_url: impl AsRef<str>,
        access_token: Option<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = normalize_base_url(instance_url.as_ref())?;
        let auth = AuthMode {
            cookie_auth: config.cookie_auth,
            access_token,
        };
        let http = DkHttpClient::new(config)?;
        Ok(Self {
            http,
            base_url,
            auth,
        })
    }

    /// Create a connector from environment variables.
    ///
    /// - `DAKTELA_INSTANCE` (or `INSTANCE`): required.
    /// - `DAKTELA_ACCESS_TOKEN` (or `ACCESS_TOKEN`): optional.
    /// - `DAKTELA_COOKIE_AUTH`: `false`, `0` or `no` switches to the
    ///   `accessToken` query parameter.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let instance = lookup("DAKTELA_INSTANCE")
            .or_else(|| lookup("INSTANCE"))
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| Error::new(ErrorKind::EnvVar("DAKTELA_INSTANCE".to_string())))?;

        let access_token = lookup("DAKTELA_ACCESS_TOKEN")
            .or_else(|| lookup("ACCESS_TOKEN"))
            .filter(|value| !value.is_empty());

        let cookie_auth = !matches!(
            lookup("DAKTELA_COOKIE_AUTH")
                .map(|value| value.trim().to_ascii_lowercase())
                .as_deref(),
            Some("false" | "0" | "no")
        );

        let config = ClientConfig::builder().with_cookie_auth(cookie_auth).build();
        Self::with_config(instance, access_token, config)
    }

    /// Base URL of the instance, always ending with a single `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an API endpoint.
    ///
    /// Example: `api_url("tickets")` -> `https://my.daktela.com/api/v6/tickets`
    pub fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url,
            API_PATH,
            endpoint.trim_start_matches('/')
        )
    }

    /// Whether the token travels as a session cookie.
    pub fn cookie_auth(&self) -> bool {
        self.auth.cookie_auth
    }

    /// Whether an access token is configured.
    pub fn has_access_token(&self) -> bool {
        self.auth.access_token.is_some()
    }

    /// Get the underlying HTTP client.
    pub fn inner(&self) -> &DkHttpClient {
        &self.http
    }

    /// Compile request options into query parameters, adding the access
    /// token when query-token authentication is used.
    pub fn build_request_params(&self, options: Option<&RequestOptions>) -> QueryParameters {
        compile(options, &self.auth)
    }

    /// Raw query parameters plus the access token when needed. Used by the
    /// verbs that carry structured data in the body.
    pub fn enrich_with_access_token(&self, params: Option<QueryParameters>) -> QueryParameters {
        let options = RequestOptions {
            params,
            ..RequestOptions::default()
        };
        compile(Some(&options), &self.auth)
    }

    /// Create an authenticated request builder for an endpoint.
    pub(crate) fn request(&self, method: RequestMethod, endpoint: &str) -> RequestBuilder {
        let url = self.api_url(endpoint);
        let builder = match method {
            RequestMethod::Get => self.http.get(url),
            RequestMethod::Post => self.http.post(url),
            RequestMethod::Put => self.http.put(url),
            RequestMethod::Delete => self.http.delete(url),
        };

        match self.auth.cookie_token() {
            Some(token) => builder.cookie_auth(token),
            None => builder,
        }
    }
}

/// Normalize an instance address: `https://` when no scheme is given and
/// exactly one trailing `/`.
fn normalize_base_url(instance_url: &str) -> Result<String> {
    let trimmed = instance_url.trim();
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let base = format!("{}/", with_scheme.trim_end_matches('/'));

    let parsed = url::Url::parse(&base)?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(Error::new(ErrorKind::InvalidUrl(format!(
            "missing host in '{instance_url}'"
        ))));
    }

    Ok(base)
}
