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

use lexsign_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of a PostText request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTextInput {
    /// Text the user typed.
    pub input_text: String,
    /// Attributes kept by the bot across the session.
    pub session_attributes: BTreeMap<String, String>,
    /// Attributes for this request only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_attributes: Option<BTreeMap<String, String>>,
}

impl PostTextInput {
    /// Create an input with no attributes.
    pub fn new(input_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            ..Default::default()
        }
    }

    /// Set a session attribute, replacing an existing one with the same key.
    pub fn with_session_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.session_attributes.insert(key.into(), value.into());
        self
    }

    /// Set a request attribute, replacing an existing one with the same key.
    pub fn with_request_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request_attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// JSON payload as sent on the wire.
    pub fn to_body(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| {
            Error::request_invalid("failed to serialize PostText input").with_source(e)
        })
    }
}

/// Reply of the bot to a PostText request.
///
/// Only `message` is required, the rest depends on the bot definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTextOutput {
    pub message: String,
    pub intent_name: Option<String>,
    pub dialog_state: Option<String>,
    pub message_format: Option<String>,
    pub slot_to_elicit: Option<String>,
    pub slots: Option<BTreeMap<String, Option<String>>>,
    pub session_attributes: Option<BTreeMap<String, String>>,
}

impl PostTextOutput {
    /// Parse the response of a PostText call.
    ///
    /// A non-success status is a [`lexsign_core::ErrorKind::Transport`] error
    /// carrying status and body. A body that is not JSON or lacks `message`
    /// is [`lexsign_core::ErrorKind::ResponseInvalid`].
    pub fn from_response(resp: &http::Response<String>) -> Result<Self> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::transport(format!(
                "PostText failed with status {status}: {}",
                resp.body()
            )));
        }

        serde_json::from_str(resp.body()).map_err(|e| {
            Error::response_invalid(format!("PostText response is not valid: {e}")).with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use lexsign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn response(status: StatusCode, body: &str) -> http::Response<String> {
        http::Response::builder()
            .status(status)
            .body(body.to_string())
            .expect("response must be valid")
    }

    #[test]
    fn test_input_body() -> anyhow::Result<()> {
        let input = PostTextInput::new("in").with_session_attribute("attr_name", "value");
        assert_eq!(
            String::from_utf8(input.to_body()?)?,
            r#"{"inputText":"in","sessionAttributes":{"attr_name":"value"}}"#
        );

        let input = PostTextInput::new("hi").with_request_attribute("x-amz-lex:channel", "cli");
        assert_eq!(
            String::from_utf8(input.to_body()?)?,
            r#"{"inputText":"hi","sessionAttributes":{},"requestAttributes":{"x-amz-lex:channel":"cli"}}"#
        );
        Ok(())
    }

    #[test]
    fn test_output_from_response() -> anyhow::Result<()> {
        let resp = response(
            StatusCode::OK,
            r#"{
                "dialogState": "ElicitSlot",
                "intentName": "OrderFlowers",
                "message": "What type of flowers would you like to order?",
                "messageFormat": "PlainText",
                "sessionAttributes": {"attr_name": "value"},
                "slotToElicit": "FlowerType",
                "slots": {"FlowerType": null, "PickupDate": "2021-01-01"},
                "responseCard": null
            }"#,
        );

        let out = PostTextOutput::from_response(&resp)?;
        assert_eq!(out.message, "What type of flowers would you like to order?");
        assert_eq!(out.intent_name.as_deref(), Some("OrderFlowers"));
        assert_eq!(out.dialog_state.as_deref(), Some("ElicitSlot"));
        assert_eq!(out.slot_to_elicit.as_deref(), Some("FlowerType"));
        assert_eq!(
            out.slots.as_ref().and_then(|v| v.get("FlowerType").cloned()),
            Some(None)
        );
        assert_eq!(
            out.session_attributes
                .as_ref()
                .and_then(|v| v.get("attr_name"))
                .map(String::as_str),
            Some("value")
        );
        Ok(())
    }

    #[test]
    fn test_output_only_message() -> anyhow::Result<()> {
        let out = PostTextOutput::from_response(&response(StatusCode::OK, r#"{"message":"hi"}"#))?;
        assert_eq!(out.message, "hi");
        assert!(out.intent_name.is_none());
        assert!(out.slots.is_none());
        Ok(())
    }

    #[test_case(StatusCode::FORBIDDEN, r#"{"message":"The security token included in the request is invalid."}"#, ErrorKind::Transport; "forbidden")]
    #[test_case(StatusCode::INTERNAL_SERVER_ERROR, "", ErrorKind::Transport; "server error")]
    #[test_case(StatusCode::OK, "<html></html>", ErrorKind::ResponseInvalid; "not json")]
    #[test_case(StatusCode::OK, r#"{"intentName":"OrderFlowers"}"#, ErrorKind::ResponseInvalid; "missing message")]
    #[test_case(StatusCode::OK, r#"{"message":null}"#, ErrorKind::ResponseInvalid; "null message")]
    fn test_output_errors(status: StatusCode, body: &str, kind: ErrorKind) {
        let err = PostTextOutput::from_response(&response(status, body))
            .expect_err("response must be rejected");
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn test_transport_error_carries_status_and_body() {
        let err = PostTextOutput::from_response(&response(StatusCode::NOT_FOUND, "bot not found"))
            .expect_err("404 must fail");
        assert_eq!(
            err.message(),
            "PostText failed with status 404 Not Found: bot not found"
        );
    }
}
