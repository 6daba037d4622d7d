use std::env;

use anyhow::Result;
use http::StatusCode;
use lexsign_aws_v4::EnvCredentialProvider;
use lexsign_core::{Context, OsEnv, ProvideCredential};
use lexsign_http_send_reqwest::ReqwestHttpSend;
use lexsign_lex::{Client, Config, PostTextInput};
use log::{debug, warn};

async fn init_live_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("LEXSIGN_LEX_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default());
    let config = Config::from_env(&ctx).expect("lex config must be valid");
    let cred = EnvCredentialProvider::new()
        .provide_credential(&ctx)
        .await
        .expect("load credential must success")
        .expect("env AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must set");

    Some(Client::new(ctx, config, cred).expect("client must be valid"))
}

#[tokio::test]
async fn test_live_post_text() -> Result<()> {
    let Some(client) = init_live_client().await else {
        warn!("LEXSIGN_LEX_TEST is not set, skipped");
        return Ok(());
    };

    let input = PostTextInput::new("in").with_session_attribute("attr_name", "value");
    let resp = client.send_text(&input).await?;
    debug!("got response: {resp:?}");
    assert_eq!(StatusCode::OK, resp.status());

    Ok(())
}
