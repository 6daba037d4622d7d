use lexsign_core::{Context, OsEnv};
use lexsign_http_send_reqwest::ReqwestHttpSend;

/// Create a [`Context`] reading the process environment and sending
/// requests with a default `reqwest` client.
pub fn default_context() -> Context {
    Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default())
}
