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

//! Lex runtime support with convenience APIs

pub use lexsign_lex::*;

use lexsign_aws_v4::{Credential, EnvCredentialProvider};
use lexsign_core::{Context, Error, ProvideCredential, Result};

/// Message of the error returned when no credential is configured.
pub const MISSING_CREDENTIAL: &str = "No access key is available. Please set the AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY environment variables.";

/// Load the credential from the environment of `ctx`.
///
/// Fails with [`lexsign_core::ErrorKind::ConfigInvalid`] when the key pair is
/// not set, so callers can stop before anything is sent.
pub async fn load_credential(ctx: &Context) -> Result<Credential> {
    EnvCredentialProvider::new()
        .provide_credential(ctx)
        .await?
        .ok_or_else(|| Error::config_invalid(MISSING_CREDENTIAL))
}

/// Create a client configured from the process environment.
///
/// See [`Config::from_env`] for the variables that are read.
#[cfg(feature = "default-context")]
pub async fn default_client() -> Result<Client> {
    let ctx = crate::default_context();
    let config = Config::from_env(&ctx)?;
    let credential = load_credential(&ctx).await?;

    Client::new(ctx, config, credential)
}
