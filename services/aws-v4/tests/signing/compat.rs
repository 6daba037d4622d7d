use super::{init_signing_test, lex_signer, ACCESS_KEY_ID, LEX_HOST, LEX_PATH, SECRET_ACCESS_KEY};
use anyhow::Result;
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{SignableBody, SignableRequest, SigningSettings};
use aws_sigv4::sign::v4;
use http::header::AUTHORIZATION;
use http::Request;
use lexsign_aws_v4::Credential;
use lexsign_core::time::DateTime;
use lexsign_core::{Context, SignRequest};
use pretty_assertions::assert_eq;
use std::time::SystemTime;
use test_case::test_case;

fn lex_request(path: &str, body: &'static str, query: Option<&str>) -> Request<&'static str> {
    let uri = match query {
        Some(q) => format!("https://{LEX_HOST}{path}?{q}"),
        None => format!("https://{LEX_HOST}{path}"),
    };

    Request::post(uri)
        .header("content-type", "application/json")
        .body(body)
        .expect("request must be valid")
}

fn sign_with_aws_sigv4(
    req: &mut Request<&'static str>,
    token: Option<&str>,
    now: DateTime,
) -> Result<()> {
    // Defaults: double path encoding, no payload hash header.
    let ss = SigningSettings::default();

    let id = Credentials::new(
        ACCESS_KEY_ID,
        SECRET_ACCESS_KEY,
        token.map(|v| v.to_string()),
        None,
        "hardcoded-credentials",
    )
    .into();
    let sp = v4::SigningParams::builder()
        .identity(&id)
        .region("eu-west-1")
        .name("lex")
        .time(SystemTime::from(now))
        .settings(ss)
        .build()
        .expect("signing params must be valid");

    let output = aws_sigv4::http_request::sign(
        SignableRequest::new(
            req.method().as_str(),
            req.uri().to_string(),
            req.headers()
                .iter()
                .map(|(k, v)| (k.as_str(), std::str::from_utf8(v.as_bytes()).unwrap())),
            SignableBody::Bytes(req.body().as_bytes()),
        )
        .unwrap(),
        &sp.into(),
    )?;
    let (aws_sig, _) = output.into_parts();
    aws_sig.apply_to_request_http1x(req);
    Ok(())
}

#[test_case(LEX_PATH, r#"{"inputText": "in", "sessionAttributes": {"attr_name" : "value"}}"#, None, None; "lex body")]
#[test_case(LEX_PATH, r#"{"inputText":"in","sessionAttributes":{"attr_name":"value"}}"#, None, None; "compact lex body")]
#[test_case(LEX_PATH, "", None, None; "empty body")]
#[test_case(LEX_PATH, r#"{"inputText": "in"}"#, None, Some("SESSIONTOKEN"); "with session token")]
#[test_case(LEX_PATH, r#"{"inputText": "in"}"#, Some("b=2&a=1&c=hello%20world"), None; "with query")]
#[test_case("/bot/fichin/alias/fichin/user/eu%3Auser/text", r#"{"inputText": "in"}"#, None, None; "encoded user id")]
#[test_case("/bot/fichin/alias/fichin/user/my%20user/text", r#"{"inputText": "in"}"#, None, None; "encoded space")]
#[tokio::test]
async fn test_matches_aws_sigv4(
    path: &'static str,
    body: &'static str,
    query: Option<&'static str>,
    token: Option<&'static str>,
) -> Result<()> {
    let now = init_signing_test();

    let mut expected = lex_request(path, body, query);
    sign_with_aws_sigv4(&mut expected, token, now)?;

    let mut cred = Credential::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY);
    if let Some(token) = token {
        cred = cred.with_session_token(token);
    }
    let (mut parts, body) = lex_request(path, body, query).into_parts();
    lex_signer()
        .sign_request(&Context::new(), &mut parts, body.as_bytes(), Some(&cred))
        .await?;
    let actual = Request::from_parts(parts, body);

    assert_eq!(
        expected.headers().get(AUTHORIZATION),
        actual.headers().get(AUTHORIZATION),
    );
    for name in ["x-amz-date", "x-amz-security-token"] {
        assert_eq!(
            expected.headers().get(name),
            actual.headers().get(name),
            "header {name} must match"
        );
    }
    Ok(())
}
