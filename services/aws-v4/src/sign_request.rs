// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::{
    AWS4_HMAC_SHA256, AWS4_REQUEST, AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET, X_AMZ_DATE,
    X_AMZ_SECURITY_TOKEN,
};
use crate::{Credential, RequestDescriptor, SignedRequest, SigningContext, TimestampPair};
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::request::Parts;
use http::{HeaderMap, HeaderName, HeaderValue};
use log::debug;
use lexsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use lexsign_core::time::{now, DateTime};
use lexsign_core::{Context, Error, Result, SignRequest};
use percent_encoding::utf8_percent_encode;
use std::collections::BTreeMap;
use std::fmt;

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// Signing is a pure function of the credential, the request and the instant:
/// the signer holds no mutable state and can be shared between tasks.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    ctx: SigningContext,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given signing context.
    pub fn new(ctx: SigningContext) -> Self {
        Self { ctx, time: None }
    }

    /// Specify the signing time used by [`SignRequest::sign_request`].
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The signing context of this signer.
    pub fn signing_context(&self) -> &SigningContext {
        &self.ctx
    }

    /// Sign `req` with `cred` at `now`.
    ///
    /// Fails with [`lexsign_core::ErrorKind::ConfigInvalid`] before doing any
    /// work if either half of the key pair is missing.
    pub fn sign(
        &self,
        cred: &Credential,
        req: &RequestDescriptor,
        now: DateTime,
    ) -> Result<SignedRequest> {
        cred.check()?;

        let timestamp = TimestampPair::new(now);
        let headers = CanonicalHeaders::build(&self.ctx, req, cred, &timestamp);

        let creq = CanonicalRequest {
            method: req.method().as_str(),
            uri: canonical_uri(req.path()),
            query: canonical_query(req.query()),
            headers: &headers,
            payload_hash: hex_sha256(req.body()),
        }
        .to_string();

        // Scope: "20220313/<region>/<service>/aws4_request"
        let scope = format!(
            "{}/{}/{}/{AWS4_REQUEST}",
            timestamp.date_stamp(),
            self.ctx.region(),
            self.ctx.service()
        );
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20220313T072004Z
        // 20220313/<region>/<service>/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = [
            AWS4_HMAC_SHA256,
            timestamp.timestamp(),
            scope.as_str(),
            hex_sha256(creq.as_bytes()).as_str(),
        ]
        .join("\n");
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(
            &cred.secret_access_key,
            timestamp.date_stamp(),
            self.ctx.region(),
            self.ctx.service(),
        );
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let signed_headers = headers.signed_headers();
        let mut authorization = HeaderValue::from_str(&format!(
            "{AWS4_HMAC_SHA256} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
            cred.access_key_id,
        ))?;
        authorization.set_sensitive(true);

        let mut header_map = headers.to_header_map()?;
        header_map.insert(AUTHORIZATION, authorization);

        Ok(SignedRequest::new(
            req.clone(),
            header_map,
            timestamp,
            signed_headers,
            signature,
        ))
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::config_invalid(
                "no credential available to sign the request",
            ));
        };
        cred.check()?;

        let now = self.time.unwrap_or_else(now);
        let desc = RequestDescriptor::from_parts(req, body)?;

        // Drop stale signing headers so the transmitted set is exactly the signed one.
        req.headers.remove(AUTHORIZATION);
        req.headers.remove(X_AMZ_SECURITY_TOKEN);

        self.sign(cred, &desc, now)?.apply(req);
        Ok(())
    }
}

/// CanonicalHeaders is the single ordered list of signed headers.
///
/// Both the canonical header block and the `SignedHeaders` value are rendered
/// from it, and so is the header map handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CanonicalHeaders(BTreeMap<&'static str, String>);

impl CanonicalHeaders {
    fn build(
        ctx: &SigningContext,
        req: &RequestDescriptor,
        cred: &Credential,
        timestamp: &TimestampPair,
    ) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("content-type", normalize_header_value(req.content_type()));
        headers.insert("host", normalize_header_value(ctx.host()));
        headers.insert(X_AMZ_DATE, timestamp.timestamp().to_string());
        if let Some(token) = &cred.session_token {
            headers.insert(X_AMZ_SECURITY_TOKEN, normalize_header_value(token));
        }

        Self(headers)
    }

    /// `content-type;host;x-amz-date`
    fn signed_headers(&self) -> String {
        self.0.keys().copied().collect::<Vec<_>>().join(";")
    }

    fn to_header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.0.len() + 1);
        for (name, value) in &self.0 {
            let mut value = HeaderValue::from_str(value)?;
            if *name == X_AMZ_SECURITY_TOKEN {
                value.set_sensitive(true);
            }
            map.insert(HeaderName::from_static(*name), value);
        }
        Ok(map)
    }
}

/// Renders `name:value\n` for every header, sorted by name.
impl fmt::Display for CanonicalHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.0 {
            writeln!(f, "{name}:{value}")?;
        }
        Ok(())
    }
}

/// CanonicalRequest keeps the fields of the canonical request apart until
/// they are rendered in their fixed order.
struct CanonicalRequest<'a> {
    method: &'a str,
    uri: String,
    query: String,
    headers: &'a CanonicalHeaders,
    payload_hash: String,
}

impl fmt::Display for CanonicalRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.uri)?;
        writeln!(f, "{}", self.query)?;
        // The header block ends with its own newline, one more separates it.
        writeln!(f, "{}", self.headers)?;
        writeln!(f, "{}", self.headers.signed_headers())?;
        write!(f, "{}", self.payload_hash)
    }
}

/// Encode the path as it goes on the wire once more.
///
/// Every service but S3 signs the double encoded path: `eu%3Auser` on the
/// wire is `eu%253Auser` in the canonical request.
fn canonical_uri(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    utf8_percent_encode(path, &AWS_URI_ENCODE_SET).to_string()
}

fn canonical_query(query: &[(String, String)]) -> String {
    let mut pairs = query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();
    // Sort by encoded name, then by value.
    pairs.sort();

    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Trim surrounding spaces and collapse inner runs of whitespace.
fn normalize_header_value(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn generate_signing_key(secret: &str, date_stamp: &str, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date_stamp.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}
