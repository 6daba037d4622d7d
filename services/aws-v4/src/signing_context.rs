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

/// SigningContext binds a signature to one service in one region.
///
/// The host is derived from service and region when the context is created
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext {
    service: String,
    region: String,
    host: String,
}

impl SigningContext {
    /// Create a signing context for `service` in `region`.
    ///
    /// The host is `runtime.<service>.<region>.amazonaws.com`.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.to_string(),
            region: region.to_string(),
            host: format!("runtime.{service}.{region}.amazonaws.com"),
        }
    }

    /// Replace the derived host, for custom endpoints or local test servers.
    ///
    /// The value is used verbatim as the `host` header, include the port if
    /// the endpoint uses a non default one.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Service name used in the credential scope.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region used in the credential scope.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Host the request is sent to.
    pub fn host(&self) -> &str {
        &self.host
    }
}
