//! Client configuration.

use std::time::Duration;

/// Configuration for the HTTP client and the authentication mode.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Authorize requests with the `c_user` session cookie. When disabled the
    /// access token travels as the `accessToken` query parameter.
    pub cookie_auth: bool,
    /// Request timeout. `None` means no timeout.
    pub timeout: Option<Duration>,
    /// Connection timeout. `None` leaves the transport default.
    pub connect_timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: String,
    /// Extra headers sent with every request.
    pub headers: Vec<(String, String)>,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cookie_auth: true,
            timeout: None,
            connect_timeout: None,
            user_agent: crate::USER_AGENT.to_string(),
            headers: Vec::new(),
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Choose between cookie authentication (default) and the
    /// `accessToken` query parameter.
    pub fn with_cookie_auth(mut self, enabled: bool) -> Self {
        self.config.cookie_auth = enabled;
        self
    }

    /// Set request timeout. A zero duration disables the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    /// Remove the request timeout.
    pub fn without_timeout(mut self) -> Self {
        self.config.timeout = None;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request. A later value for the same
    /// name replaces the earlier one.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.config
            .headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.config.headers.push((name, value.into()));
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
