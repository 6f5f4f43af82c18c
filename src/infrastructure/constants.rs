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

/// Default cluster base URLs
pub const DEFAULT_PROD_URL: &str = "https://ose.mlcinsurance.com.au:8443";
pub const DEFAULT_NONPROD_URL: &str = "https://osenp.mlcinsurance.com.au:8443";

/// REST path prefixes. Deployment configurations live under the legacy
/// OpenShift API group, pods under the core Kubernetes API.
pub const OAPI_PREFIX: &str = "/oapi/v1";
pub const CORE_API_PREFIX: &str = "/api/v1";

/// Environment variables
pub const ENV_CONF_FILE: &str = "OC_UTILS_CONF_FILE";
pub const ENV_TOKEN: &str = "OC_TOKEN";

/// Token acquisition
pub const OC_BINARY: &str = "oc";

/// HTTP client settings
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const GET_RETRY_MAX_TIMES: usize = 2;

/// Restart threshold arithmetic
pub const HOURS_PER_DAY: i64 = 24;

/// Resource type names used in error reporting
pub const RESOURCE_DEPLOYMENT_CONFIG: &str = "deploymentconfig";
pub const RESOURCE_POD: &str = "pod";
