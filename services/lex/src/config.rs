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

use crate::constants::*;
use lexsign_aws_v4::SigningContext;
use lexsign_core::{Context, Error, Result};
use percent_encoding::utf8_percent_encode;
use std::time::Duration;

/// Config for the Lex runtime client.
///
/// Defaults target the `fichin` bot in `eu-west-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Region of the bot.
    pub region: String,
    /// Name of the bot.
    pub bot_name: String,
    /// Alias of the bot.
    pub bot_alias: String,
    /// Id of the user talking to the bot.
    pub user_id: String,
    /// Endpoint override like `http://127.0.0.1:9900`.
    ///
    /// The request is signed for the host of this endpoint.
    pub endpoint: Option<String>,
    /// Upper bound of one round trip.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            bot_name: DEFAULT_BOT_NAME.to_string(),
            bot_alias: DEFAULT_BOT_ALIAS.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            endpoint: None,
            timeout: None,
        }
    }
}

impl Config {
    /// Load config from environment variables, keeping defaults for the
    /// variables that are unset or empty.
    pub fn from_env(ctx: &Context) -> Result<Self> {
        let var = |key: &str| ctx.env_var(key).filter(|v| !v.is_empty());
        let default = Self::default();

        let timeout = match var(LEX_TIMEOUT_SECS) {
            Some(v) => Some(parse_timeout(&v)?),
            None => None,
        };

        Ok(Self {
            region: var(LEX_REGION)
                .or_else(|| var(AWS_REGION))
                .unwrap_or(default.region),
            bot_name: var(LEX_BOT_NAME).unwrap_or(default.bot_name),
            bot_alias: var(LEX_BOT_ALIAS).unwrap_or(default.bot_alias),
            user_id: var(LEX_USER_ID).unwrap_or(default.user_id),
            endpoint: var(LEX_ENDPOINT),
            timeout,
        })
    }

    /// Host requests are sent to and signed for.
    pub fn host(&self) -> Result<String> {
        match &self.endpoint {
            Some(endpoint) => {
                let uri: http::Uri = endpoint.parse().map_err(|e| {
                    Error::config_invalid(format!("endpoint '{endpoint}' is not a valid uri"))
                        .with_source(e)
                })?;
                uri.authority()
                    .map(|v| v.to_string())
                    .ok_or_else(|| Error::config_invalid(format!("endpoint '{endpoint}' has no host")))
            }
            None => Ok(self.signing_context()?.host().to_string()),
        }
    }

    /// Scheme and authority the path is appended to, without trailing slash.
    pub fn endpoint(&self) -> Result<String> {
        match &self.endpoint {
            Some(endpoint) => Ok(endpoint.trim_end_matches('/').to_string()),
            None => Ok(format!("https://{}", self.host()?)),
        }
    }

    /// Path of the PostText operation: `/bot/<bot>/alias/<alias>/user/<user>/text`.
    pub fn path(&self) -> Result<String> {
        Ok(format!(
            "/bot/{}/alias/{}/user/{}/text",
            path_segment("bot name", &self.bot_name)?,
            path_segment("bot alias", &self.bot_alias)?,
            path_segment("user id", &self.user_id)?,
        ))
    }

    /// Full url of the PostText operation.
    pub fn url(&self) -> Result<String> {
        Ok(format!("{}{}", self.endpoint()?, self.path()?))
    }

    /// Signing context for the Lex runtime in the configured region.
    pub fn signing_context(&self) -> Result<SigningContext> {
        if self.region.is_empty() {
            return Err(Error::config_invalid("region is empty"));
        }

        let ctx = SigningContext::new(LEX_SERVICE, &self.region);
        match &self.endpoint {
            Some(_) => Ok(ctx.with_host(self.host()?)),
            None => Ok(ctx),
        }
    }
}

fn parse_timeout(v: &str) -> Result<Duration> {
    match v.parse::<u64>() {
        Ok(0) => Err(Error::config_invalid(format!(
            "{LEX_TIMEOUT_SECS} must be greater than zero"
        ))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(Error::config_invalid(format!(
            "{LEX_TIMEOUT_SECS} must be a whole number of seconds, got '{v}'"
        ))
        .with_source(e)),
    }
}

// Segments are encoded on their own so that `/` can't add path levels.
// The signer encodes the result a second time, `%2F` stays one segment.
fn path_segment(name: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(Error::config_invalid(format!("{name} is empty")));
    }
    Ok(utf8_percent_encode(value, &PATH_SEGMENT_ENCODE_SET).to_string())
}
