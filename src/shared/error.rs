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

use crate::infrastructure::constants::DEFAULT_NONPROD_URL;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OcError>;

#[derive(Error, Debug)]
pub enum OcError {
    #[error("OpenShift API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error(
        "you need to login to OpenShift before running this (use 'oc login {}' for example)",
        DEFAULT_NONPROD_URL
    )]
    LoginRequired,

    #[error("Resource not found: {resource_type} '{name}' in namespace '{namespace}'")]
    NotFound {
        resource_type: String,
        name: String,
        namespace: String,
    },

    #[error("Connection error: {0} - you're probably not on the VPN?")]
    Connection(String),

    #[error("Failed to acquire OpenShift token: {0}")]
    TokenAcquisition(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl OcError {
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn not_found(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Whether the error came from the transport rather than the API,
    /// i.e. a retry might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = OcError::not_found("pod", "web-1-abcde", "demo");
        assert_eq!(
            err.to_string(),
            "Resource not found: pod 'web-1-abcde' in namespace 'demo'"
        );
    }

    #[test]
    fn test_login_required_mentions_oc_login() {
        let err = OcError::LoginRequired;
        assert!(err.to_string().contains("oc login"));
    }

    #[test]
    fn test_transient_classification() {
        assert!(OcError::Connection("connection refused".to_string()).is_transient());
        assert!(!OcError::LoginRequired.is_transient());
        assert!(!OcError::Api {
            status: 500,
            message: "boom".to_string()
        }
        .is_transient());
    }
}
