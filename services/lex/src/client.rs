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

use crate::{Config, PostTextInput, PostTextOutput};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use lexsign_aws_v4::{Credential, RequestSigner};
use lexsign_core::time::DateTime;
use lexsign_core::{Context, Error, Result, SignRequest};
use log::debug;

/// Client talks to one Lex bot as one user.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    config: Config,
    signer: RequestSigner,
    credential: Credential,
}

impl Client {
    /// Create a new client.
    ///
    /// Fails with [`lexsign_core::ErrorKind::ConfigInvalid`] if the
    /// credential is incomplete or the config can't produce a url, so that
    /// nothing is sent with a broken setup.
    pub fn new(ctx: Context, config: Config, credential: Credential) -> Result<Self> {
        credential.check()?;
        config.url()?;
        let signer = RequestSigner::new(config.signing_context()?);

        Ok(Self {
            ctx,
            config,
            signer,
            credential,
        })
    }

    /// Sign every request at `time` instead of now.
    ///
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.signer = self.signer.with_time(time);
        self
    }

    /// Config of this client.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Url PostText requests are sent to.
    pub fn url(&self) -> Result<String> {
        self.config.url()
    }

    /// Sign and send a PostText request, returning the raw response.
    ///
    /// The status is not checked here, see [`PostTextOutput::from_response`].
    pub async fn send_text(&self, input: &PostTextInput) -> Result<http::Response<String>> {
        let url = self.config.url()?;
        let req = http::Request::post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(Bytes::from(input.to_body()?))?;

        let (mut parts, body) = req.into_parts();
        self.signer
            .sign_request(&self.ctx, &mut parts, &body, Some(&self.credential))
            .await?;
        let req = http::Request::from_parts(parts, body);

        debug!("sending PostText request to {url}");
        let resp = match self.config.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.ctx.http_send_as_string(req))
                .await
                .map_err(|e| {
                    Error::transport(format!("PostText to {url} timed out after {timeout:?}"))
                        .with_source(e)
                })??,
            None => self.ctx.http_send_as_string(req).await?,
        };
        debug!("PostText responded with status {}", resp.status());

        Ok(resp)
    }

    /// Send `input` and parse the reply of the bot.
    pub async fn post_text(&self, input: &PostTextInput) -> Result<PostTextOutput> {
        let resp = self.send_text(input).await?;
        PostTextOutput::from_response(&resp)
    }
}
