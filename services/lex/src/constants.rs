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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Service name in the credential scope.
pub const LEX_SERVICE: &str = "lex";

// Defaults of the PostText target.
pub const DEFAULT_REGION: &str = "eu-west-1";
pub const DEFAULT_BOT_NAME: &str = "fichin";
pub const DEFAULT_BOT_ALIAS: &str = "fichin";
pub const DEFAULT_USER_ID: &str = "myuserid";

// Env values used by the lex client.
pub const LEX_REGION: &str = "LEX_REGION";
pub const AWS_REGION: &str = "AWS_REGION";
pub const LEX_BOT_NAME: &str = "LEX_BOT_NAME";
pub const LEX_BOT_ALIAS: &str = "LEX_BOT_ALIAS";
pub const LEX_USER_ID: &str = "LEX_USER_ID";
pub const LEX_ENDPOINT: &str = "LEX_ENDPOINT";
pub const LEX_TIMEOUT_SECS: &str = "LEX_TIMEOUT_SECS";

/// Bytes kept as-is inside one path segment: alphanumerics and `-._~`.
pub static PATH_SEGMENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
