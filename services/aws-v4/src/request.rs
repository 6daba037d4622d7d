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

use crate::constants::DEFAULT_CONTENT_TYPE;
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::request::Parts;
use http::{HeaderMap, Method};
use lexsign_core::time::{format_date, format_iso8601, DateTime};
use lexsign_core::Result;

/// RequestDescriptor is everything about a request that gets signed,
/// except the headers the signer derives itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Bytes,
    content_type: String,
}

impl RequestDescriptor {
    /// Create a descriptor with an empty query, an empty body and the
    /// default `application/json` content type.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: Bytes::new(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }

    /// Shortcut of `RequestDescriptor::new(Method::POST, path)`.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Push a query pair. Pairs are stored unencoded.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the payload.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Build a descriptor from request parts and the body that will be sent.
    ///
    /// The path is taken as it appears in the uri; query pairs are decoded.
    /// A missing `content-type` header falls back to `application/json`.
    pub fn from_parts(parts: &Parts, body: &[u8]) -> Result<Self> {
        let query = parts
            .uri
            .query()
            .map(|v| {
                form_urlencoded::parse(v.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        let content_type = match parts.headers.get(CONTENT_TYPE) {
            Some(v) => v.to_str()?.to_string(),
            None => DEFAULT_CONTENT_TYPE.to_string(),
        };

        Ok(Self {
            method: parts.method.clone(),
            path: parts.uri.path().to_string(),
            query,
            body: Bytes::copy_from_slice(body),
            content_type,
        })
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path as sent on the wire, already percent-encoded.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs as given, unencoded and unsorted.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Payload.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Content type.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}

/// TimestampPair holds both renderings of the signing instant.
///
/// They are always produced together from one instant: the date in the
/// credential scope must be the date of the `x-amz-date` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampPair {
    instant: DateTime,
    timestamp: String,
    date_stamp: String,
}

impl TimestampPair {
    /// Render `instant` as `YYYYMMDDTHHMMSSZ` and `YYYYMMDD`.
    pub fn new(instant: DateTime) -> Self {
        Self {
            instant,
            timestamp: format_iso8601(instant),
            date_stamp: format_date(instant),
        }
    }

    /// The instant both stamps come from.
    pub fn instant(&self) -> DateTime {
        self.instant
    }

    /// Full timestamp: `20210101T000000Z`.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Date only: `20210101`.
    pub fn date_stamp(&self) -> &str {
        &self.date_stamp
    }
}

/// SignedRequest is a [`RequestDescriptor`] together with the headers that
/// must be transmitted with it.
///
/// The header map holds every signed header plus `authorization`; nothing
/// else. Sending a header that is not listed in `signed_headers` (other than
/// `authorization`) or dropping one that is listed breaks the signature.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    descriptor: RequestDescriptor,
    headers: HeaderMap,
    timestamp: TimestampPair,
    signed_headers: String,
    signature: String,
}

impl SignedRequest {
    pub(crate) fn new(
        descriptor: RequestDescriptor,
        headers: HeaderMap,
        timestamp: TimestampPair,
        signed_headers: String,
        signature: String,
    ) -> Self {
        Self {
            descriptor,
            headers,
            timestamp,
            signed_headers,
            signature,
        }
    }

    /// The request that was signed.
    pub fn descriptor(&self) -> &RequestDescriptor {
        &self.descriptor
    }

    /// Headers to transmit.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The timestamps used for signing.
    pub fn timestamp(&self) -> &TimestampPair {
        &self.timestamp
    }

    /// Semicolon separated, sorted names of the signed headers.
    pub fn signed_headers(&self) -> &str {
        &self.signed_headers
    }

    /// Hex encoded signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Value of the `authorization` header.
    pub fn authorization(&self) -> Option<&str> {
        self.headers.get(AUTHORIZATION)?.to_str().ok()
    }

    /// Write the headers into `parts`, replacing existing values with the same name.
    pub fn apply(self, parts: &mut Parts) {
        for (name, value) in self.headers.iter() {
            parts.headers.insert(name.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_timestamp_pair_from_one_instant() {
        // One second before midnight must not leak into the next day in either stamp.
        let instant = Utc.with_ymd_and_hms(2020, 12, 31, 23, 59, 59).unwrap();
        let pair = TimestampPair::new(instant);

        assert_eq!(pair.timestamp(), "20201231T235959Z");
        assert_eq!(pair.date_stamp(), "20201231");
        assert_eq!(pair.instant(), instant);
        assert!(pair.timestamp().starts_with(pair.date_stamp()));
    }

    #[test]
    fn test_descriptor_from_parts() -> anyhow::Result<()> {
        let (parts, _) = http::Request::post(
            "https://runtime.lex.eu-west-1.amazonaws.com/bot/fichin/alias/fichin/user/myuserid/text?b=2&a=hello%20world",
        )
        .header("content-type", "application/x-amz-json-1.1")
        .body(())?
        .into_parts();

        let desc = RequestDescriptor::from_parts(&parts, b"{}")?;
        assert_eq!(desc.method(), &Method::POST);
        assert_eq!(desc.path(), "/bot/fichin/alias/fichin/user/myuserid/text");
        assert_eq!(
            desc.query(),
            &[
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "hello world".to_string())
            ]
        );
        assert_eq!(desc.body().as_ref(), b"{}");
        assert_eq!(desc.content_type(), "application/x-amz-json-1.1");
        Ok(())
    }

    #[test]
    fn test_descriptor_defaults() {
        let desc = RequestDescriptor::post("/text");
        assert_eq!(desc.method(), &Method::POST);
        assert!(desc.query().is_empty());
        assert!(desc.body().is_empty());
        assert_eq!(desc.content_type(), DEFAULT_CONTENT_TYPE);
    }
}
