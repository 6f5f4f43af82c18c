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

use crate::infrastructure::constants::{
    CORE_API_PREFIX, GET_RETRY_MAX_TIMES, OAPI_PREFIX, REQUEST_TIMEOUT_SECS,
    RESOURCE_DEPLOYMENT_CONFIG, RESOURCE_POD,
};
use crate::infrastructure::openshift::resources::{DeploymentConfigList, PodList, Scale};
use crate::shared::error::OcError;
use backon::{ExponentialBuilder, Retryable};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[async_trait::async_trait]
pub trait OpenShiftClient: Send + Sync {
    async fn list_deployment_configs(
        &self,
        namespace: &str,
    ) -> Result<DeploymentConfigList, OcError>;

    async fn get_scale(&self, namespace: &str, name: &str) -> Result<Scale, OcError>;

    async fn update_scale(
        &self,
        namespace: &str,
        name: &str,
        scale: &Scale,
    ) -> Result<Scale, OcError>;

    async fn list_pods(&self, namespace: &str) -> Result<PodList, OcError>;

    async fn delete_pod(&self, namespace: &str, name: &str) -> Result<(), OcError>;
}

/// Talks to the OpenShift REST API directly with a bearer token, no
/// kubeconfig involved.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, OcError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn deployment_configs_url(&self, namespace: &str) -> String {
        format!(
            "{}{}/namespaces/{}/deploymentconfigs",
            self.base_url, OAPI_PREFIX, namespace
        )
    }

    fn scale_url(&self, namespace: &str, name: &str) -> String {
        format!("{}/{}/scale", self.deployment_configs_url(namespace), name)
    }

    fn pods_url(&self, namespace: &str) -> String {
        format!(
            "{}{}/namespaces/{}/pods",
            self.base_url, CORE_API_PREFIX, namespace
        )
    }

    fn transport_error(err: reqwest::Error) -> OcError {
        if err.is_connect() || err.is_timeout() {
            OcError::Connection(err.to_string())
        } else {
            OcError::Http(err)
        }
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, OcError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(OcError::LoginRequired);
        }
        let message = response.text().await.unwrap_or_default();
        Err(OcError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// GET with retry. Reads are idempotent, so connection-level failures are
    /// retried with exponential backoff; API errors are returned as-is.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, OcError> {
        let send = || async {
            let response = self
                .http
                .get(url)
                .bearer_auth(&self.token)
                .send()
                .await
                .map_err(Self::transport_error)?;
            Self::ensure_success(response).await
        };

        let response = send
            .retry(&ExponentialBuilder::default().with_max_times(GET_RETRY_MAX_TIMES))
            .when(|err: &OcError| err.is_transient())
            .notify(|err, dur| {
                tracing::warn!("retrying GET {} in {:?}: {}", url, dur, err);
            })
            .await?;

        response.json::<T>().await.map_err(OcError::Http)
    }
}

#[async_trait::async_trait]
impl OpenShiftClient for RestClient {
    async fn list_deployment_configs(
        &self,
        namespace: &str,
    ) -> Result<DeploymentConfigList, OcError> {
        let url = self.deployment_configs_url(namespace);
        tracing::debug!("listing deploymentconfigs in {}", namespace);
        self.get_json(&url).await
    }

    async fn get_scale(&self, namespace: &str, name: &str) -> Result<Scale, OcError> {
        let url = self.scale_url(namespace, name);
        match self.get_json(&url).await {
            Err(OcError::Api { status: 404, .. }) => Err(OcError::not_found(
                RESOURCE_DEPLOYMENT_CONFIG,
                name,
                namespace,
            )),
            other => other,
        }
    }

    async fn update_scale(
        &self,
        namespace: &str,
        name: &str,
        scale: &Scale,
    ) -> Result<Scale, OcError> {
        let url = self.scale_url(namespace, name);
        tracing::debug!(
            "updating scale of {}/{} to {} replicas",
            namespace,
            name,
            scale.spec.replicas
        );

        // No retry: a PUT that timed out may still have been applied.
        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .json(scale)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let response = Self::ensure_success(response).await?;
        response.json().await.map_err(OcError::Http)
    }

    async fn list_pods(&self, namespace: &str) -> Result<PodList, OcError> {
        let url = self.pods_url(namespace);
        tracing::debug!("listing pods in {}", namespace);
        self.get_json(&url).await
    }

    async fn delete_pod(&self, namespace: &str, name: &str) -> Result<(), OcError> {
        let url = format!("{}/{}", self.pods_url(namespace), name);
        tracing::debug!("deleting pod {}/{}", namespace, name);

        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(Self::transport_error)?;

        match Self::ensure_success(response).await {
            Ok(_) => Ok(()),
            Err(OcError::Api { status: 404, .. }) => {
                Err(OcError::not_found(RESOURCE_POD, name, namespace))
            }
            Err(err) => Err(err),
        }
    }
}
