use daktela_api::client::ClientConfig;
use daktela_api::rest::DaktelaConnector;

fn required_var(name: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => panic!(
            "\n\n\
            INTEGRATION TEST CONFIGURATION ERROR\n\
            {name} is not set.\n\n\
            Integration tests require a reachable Daktela instance:\n\
              export DAKTELA_INSTANCE='my.daktela.com'\n\
              export DAKTELA_ACCESS_TOKEN='...'\n\n"
        ),
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn instance() -> String {
    required_var("DAKTELA_INSTANCE")
}

pub fn access_token() -> String {
    required_var("DAKTELA_ACCESS_TOKEN")
}

/// Connector authenticating with the session cookie.
pub fn connector() -> DaktelaConnector {
    init_tracing();
    DaktelaConnector::new(instance(), access_token()).expect("connector should build")
}

/// Connector authenticating with the `accessToken` query parameter.
pub fn query_token_connector() -> DaktelaConnector {
    init_tracing();
    DaktelaConnector::with_config(
        instance(),
        Some(access_token()),
        ClientConfig::builder().with_cookie_auth(false).build(),
    )
    .expect("connector should build")
}

/// Unique suffix so concurrent runs do not collide.
pub fn unique_suffix() -> String {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    millis.to_string()
}
