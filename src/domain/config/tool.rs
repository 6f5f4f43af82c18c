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

use super::environment::Environment;
use crate::infrastructure::constants::{DEFAULT_NONPROD_URL, DEFAULT_PROD_URL, ENV_CONF_FILE};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;

/// Tool configuration. Everything has a built-in default, so the config file
/// is optional and only needed when pointing the tool at different clusters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConf {
    pub prod_url: String,
    pub nonprod_url: String,
}

impl Default for ToolConf {
    fn default() -> Self {
        Self {
            prod_url: DEFAULT_PROD_URL.to_string(),
            nonprod_url: DEFAULT_NONPROD_URL.to_string(),
        }
    }
}

impl ToolConf {
    /// Load configuration from a TOML file
    pub fn from<T: AsRef<str>>(path: T) -> anyhow::Result<Self> {
        let content = read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.as_ref(), e))?;

        let conf: Self =
            toml::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))?;

        Ok(conf)
    }

    /// Resolve configuration: explicit path > OC_UTILS_CONF_FILE > defaults.
    pub fn load(explicit_path: Option<&str>) -> anyhow::Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from(path);
        }
        if let Ok(env_path) = std::env::var(ENV_CONF_FILE) {
            return Self::from(&env_path);
        }
        Ok(Self::default())
    }

    pub fn base_url(&self, environment: Environment) -> &str {
        match environment {
            Environment::Prod => &self.prod_url,
            Environment::NonProd => &self.nonprod_url,
        }
    }
}
