// Copyright 2025 the oc-utils authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bearer token acquisition. The token comes from the locally installed `oc`
//! client (`oc whoami -t`), or from the OC_TOKEN environment variable for
//! non-interactive use.

use crate::infrastructure::constants::{ENV_TOKEN, OC_BINARY};
use crate::shared::error::{OcError, Result};
use tokio::process::Command;

pub async fn acquire_token() -> Result<String> {
    if let Ok(token) = std::env::var(ENV_TOKEN) {
        let token = token.trim().to_string();
        if !token.is_empty() {
            tracing::debug!("using token from {}", ENV_TOKEN);
            return Ok(token);
        }
    }

    let output = Command::new(OC_BINARY)
        .args(["whoami", "-t"])
        .output()
        .await
        .map_err(|e| {
            OcError::TokenAcquisition(format!("failed to run '{} whoami -t': {}", OC_BINARY, e))
        })?;

    if !output.status.success() {
        return Err(OcError::LoginRequired);
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(OcError::LoginRequired);
    }

    Ok(token)
}
