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

use crate::{Error, Result};
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Context is what lexsign sees of the outside world: environment variables
/// and a way to put requests on the wire.
///
/// Both seams start out disconnected. Reading a variable from a fresh
/// context yields `None` and sending fails with a transport error, so a
/// forgotten `with_*` call shows up as an error instead of a silent fallback.
///
/// ```
/// use lexsign_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// assert_eq!(ctx.env_var("LEXSIGN_SURELY_UNSET"), None);
/// ```
#[derive(Clone)]
pub struct Context {
    env: Arc<dyn Env>,
    transport: Arc<dyn HttpSend>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("env", &self.env)
            .field("transport", &self.transport)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a context with both seams disconnected.
    pub fn new() -> Self {
        Self {
            env: Arc::new(NoopEnv),
            transport: Arc::new(NoopHttpSend),
        }
    }

    /// Use `transport` to send requests.
    pub fn with_http_send(mut self, transport: impl HttpSend) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Use `env` to look up variables.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Send `req` as is.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.transport.http_send(req).await
    }

    /// Send `req` and decode the body as utf-8 text.
    ///
    /// A body that isn't valid utf-8 fails with `ResponseInvalid`.
    pub async fn http_send_as_string(
        &self,
        req: http::Request<Bytes>,
    ) -> Result<http::Response<String>> {
        let (parts, body) = self.transport.http_send(req).await?.into_parts();
        let body = String::from_utf8(body.to_vec()).map_err(|e| {
            Error::response_invalid("response body is not valid utf-8").with_source(e)
        })?;
        Ok(http::Response::from_parts(parts, body))
    }

    /// Value of the variable `key`, `None` if it's unset or not utf-8.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }
}

/// HttpSend puts a signed request on the wire and hands back what came back.
///
/// Implementations only move bytes: no retry, no redirect policy of their own,
/// and any status code is a successful send.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send `req`, returning the response whatever its status.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// Env looks up configuration variables.
pub trait Env: Debug + Send + Sync + 'static {
    /// Value of `key`, `None` if it's unset or not utf-8.
    fn var(&self, key: &str) -> Option<String>;
}

/// OsEnv reads the environment of the current process.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// StaticEnv answers from a fixed map, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// Variables by name.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

/// NoopHttpSend refuses to send anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::transport(format!(
            "no transport configured, request to {} not sent",
            req.uri()
        )))
    }
}

/// NoopEnv has no variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _: &str) -> Option<String> {
        None
    }
}
