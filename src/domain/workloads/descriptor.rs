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

use crate::domain::workloads::report::{
    RestartReport, RestartedPod, ScaleDirection, ScaleOutcome,
};
use crate::infrastructure::constants::HOURS_PER_DAY;
use crate::infrastructure::openshift::client::{OpenShiftClient, RestClient};
use crate::shared::error::{OcError, Result};
use chrono::{Duration, Utc};

/// Orchestrates the read/modify calls for one namespace.
pub struct NamespaceDescriptor {
    client: Box<dyn OpenShiftClient>,
    namespace: String,
}

impl NamespaceDescriptor {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        namespace: String,
    ) -> Result<Self> {
        let client = RestClient::new(base_url, token)?;
        Ok(Self {
            client: Box::new(client),
            namespace,
        })
    }

    pub fn with_client(client: Box<dyn OpenShiftClient>, namespace: String) -> Self {
        Self { client, namespace }
    }

    /// Adjust the replica count of every deployment configuration in the
    /// namespace by one, in the given direction. Returns one outcome per
    /// deployment; an empty vec means the namespace has no deployments
    /// (or does not exist - the API answers the same way for both).
    pub async fn scale_namespace(&self, direction: ScaleDirection) -> Result<Vec<ScaleOutcome>> {
        let list = self.client.list_deployment_configs(&self.namespace).await?;

        let mut outcomes = Vec::with_capacity(list.items.len());
        for deployment in &list.items {
            let name = &deployment.metadata.name;
            let mut scale = self.client.get_scale(&self.namespace, name).await?;
            let previous = scale.spec.replicas;

            let desired = match direction.apply(previous) {
                Some(desired) => desired,
                None => {
                    // Already at zero replicas - can't scale below zero.
                    tracing::info!("skipping {} (already at zero replicas)", name);
                    outcomes.push(ScaleOutcome::skipped(name, previous));
                    continue;
                }
            };

            scale.spec.replicas = desired;
            self.client
                .update_scale(&self.namespace, name, &scale)
                .await?;

            tracing::info!(
                "scaled deployment {} from {} -> {}",
                name,
                previous,
                desired
            );
            outcomes.push(ScaleOutcome::applied(name, previous, desired));
        }

        Ok(outcomes)
    }

    /// Delete every pod in the namespace older than `threshold_days`. The
    /// replication controller behind the deployment brings replacements up,
    /// so a delete is effectively a restart.
    pub async fn restart_old_pods(&self, threshold_days: u32) -> Result<RestartReport> {
        let pods = self.client.list_pods(&self.namespace).await?;
        let threshold = Duration::hours(threshold_days as i64 * HOURS_PER_DAY);
        let now = Utc::now();

        let mut report = RestartReport::new(threshold_days);
        report.examined = pods.items.len();

        for pod in &pods.items {
            let name = &pod.metadata.name;
            let age = match pod.age(now) {
                Some(age) => age,
                None => {
                    // Never started; nothing to restart.
                    tracing::debug!("skipping pod {} (no start time)", name);
                    report.skipped_pending += 1;
                    continue;
                }
            };

            if age <= threshold {
                continue;
            }

            match self.client.delete_pod(&self.namespace, name).await {
                Ok(()) => {
                    tracing::info!("restarting pod {} (age {}h)", name, age.num_hours());
                    report.restarted.push(RestartedPod {
                        name: name.clone(),
                        age_hours: age.num_hours(),
                    });
                }
                // The pod went away between the list and the delete; the goal
                // was to get rid of it, so count it as restarted.
                Err(OcError::NotFound { .. }) => {
                    tracing::debug!("pod {} already gone", name);
                    report.restarted.push(RestartedPod {
                        name: name.clone(),
                        age_hours: age.num_hours(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Ok(report)
    }
}
