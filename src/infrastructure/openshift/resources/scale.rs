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

use super::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The `scale` subresource of a deployment configuration.
///
/// The update flow is read-modify-write: the PUT body is the GET body with
/// `spec.replicas` adjusted, so everything read here (notably
/// `metadata.resourceVersion`, which the server uses for optimistic
/// concurrency) must serialize back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scale {
    pub kind: String,
    pub api_version: String,
    pub metadata: ObjectMeta,
    pub spec: ScaleSpec,
    pub status: ScaleStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleSpec {
    pub replicas: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleStatus {
    pub replicas: u32,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub selector: HashMap<String, String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_selector: String,
}
