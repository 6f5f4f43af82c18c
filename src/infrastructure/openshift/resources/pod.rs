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
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Pod {
    pub metadata: ObjectMeta,
    pub status: PodStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodStatus {
    pub phase: String,
    #[serde(rename = "hostIP")]
    pub host_ip: String,
    #[serde(rename = "podIP")]
    pub pod_ip: String,
    pub start_time: Option<DateTime<Utc>>,
    pub container_statuses: Vec<ContainerStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStatus {
    pub name: String,
    pub ready: bool,
    pub restart_count: u32,
    pub image: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodList {
    pub kind: String,
    pub api_version: String,
    pub items: Vec<Pod>,
}

impl Pod {
    /// Time the pod has been running, or `None` if it never started
    /// (still pending or just scheduled).
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.status.start_time.map(|started| now - started)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_pod_list() {
        let json = r#"{
            "kind": "PodList",
            "apiVersion": "v1",
            "items": [
                {
                    "metadata": {
                        "name": "web-7-k2xzv",
                        "generateName": "web-7-",
                        "namespace": "demo",
                        "labels": {"app": "web", "deployment": "web-7"}
                    },
                    "status": {
                        "phase": "Running",
                        "hostIP": "10.0.0.5",
                        "podIP": "10.128.2.14",
                        "startTime": "2018-02-26T21:00:00Z",
                        "containerStatuses": [
                            {"name": "web", "ready": true, "restartCount": 1, "image": "web:7"}
                        ]
                    }
                },
                {
                    "metadata": {"name": "worker-1-build", "namespace": "demo"},
                    "status": {"phase": "Pending"}
                }
            ]
        }"#;

        let list: PodList = serde_json::from_str(json).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].metadata.name, "web-7-k2xzv");
        assert_eq!(list.items[0].status.phase, "Running");
        assert_eq!(list.items[0].status.container_statuses[0].restart_count, 1);
        assert!(list.items[1].status.start_time.is_none());
    }

    #[test]
    fn test_pod_age() {
        let mut pod = Pod::default();
        let started = Utc.with_ymd_and_hms(2018, 2, 26, 21, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2018, 3, 1, 21, 0, 0).unwrap();

        assert!(pod.age(now).is_none());

        pod.status.start_time = Some(started);
        assert_eq!(pod.age(now).unwrap().num_hours(), 72);
    }
}
