use super::{init_signing_test, lex_signer, test_credential, LEX_PATH};
use anyhow::Result;
use lexsign_aws_v4::{Credential, RequestDescriptor};
use lexsign_core::ErrorKind;
use pretty_assertions::assert_eq;
use std::sync::Arc;

const LEX_BODY: &str = r#"{"inputText": "in", "sessionAttributes": {"attr_name" : "value"}}"#;

#[test]
fn test_lex_post_text_scenario() -> Result<()> {
    let now = init_signing_test();

    let req = RequestDescriptor::post(LEX_PATH).with_body(LEX_BODY);
    let signed = lex_signer().sign(&test_credential(), &req, now)?;

    let authorization = signed.authorization().expect("authorization must be set");
    assert!(authorization.starts_with("AWS4-HMAC-SHA256"));
    assert!(authorization.contains("Credential=AKIDEXAMPLE/20210101/eu-west-1/lex/aws4_request"));
    assert!(authorization.contains("SignedHeaders=content-type;host;x-amz-date"));
    assert_eq!(
        signed.signature(),
        "481e82d88561c0a5c99a4ec7b1f5cb85430278cd93b4f8e85f48dda82e98b861"
    );
    Ok(())
}

#[test]
fn test_query_changes_signature() -> Result<()> {
    let now = init_signing_test();
    let signer = lex_signer();

    let plain = signer.sign(
        &test_credential(),
        &RequestDescriptor::post(LEX_PATH).with_body(LEX_BODY),
        now,
    )?;
    let with_query = signer.sign(
        &test_credential(),
        &RequestDescriptor::post(LEX_PATH)
            .with_body(LEX_BODY)
            .with_query("x", "1"),
        now,
    )?;

    assert_eq!(plain.signed_headers(), with_query.signed_headers());
    assert_ne!(plain.signature(), with_query.signature());
    Ok(())
}

#[test]
fn test_missing_secret_fails_before_signing() {
    let now = init_signing_test();

    let err = lex_signer()
        .sign(
            &Credential::new("AKIDEXAMPLE", ""),
            &RequestDescriptor::post(LEX_PATH),
            now,
        )
        .expect_err("signing without secret must fail");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[test]
fn test_signer_is_shareable_between_threads() -> Result<()> {
    let now = init_signing_test();
    let signer = Arc::new(lex_signer());
    let expected = signer
        .sign(
            &test_credential(),
            &RequestDescriptor::post(LEX_PATH).with_body(LEX_BODY),
            now,
        )?
        .signature()
        .to_string();

    let handles = (0..4)
        .map(|_| {
            let signer = signer.clone();
            std::thread::spawn(move || {
                signer
                    .sign(
                        &test_credential(),
                        &RequestDescriptor::post(LEX_PATH).with_body(LEX_BODY),
                        now,
                    )
                    .map(|signed| signed.signature().to_string())
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let signature = handle.join().expect("thread must not panic")?;
        assert_eq!(signature, expected);
    }
    Ok(())
}
