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

use chrono::{Duration, Utc};
use oc_utils::*;

fn scale_body(name: &str, replicas: u32) -> String {
    format!(
        r#"{{
            "kind": "Scale",
            "apiVersion": "extensions/v1beta1",
            "metadata": {{"name": "{}", "namespace": "demo", "resourceVersion": "7"}},
            "spec": {{"replicas": {}}},
            "status": {{"replicas": {}}}
        }}"#,
        name, replicas, replicas
    )
}

#[tokio::test]
async fn test_scale_up_namespace_end_to_end() {
    let mut server = mockito::Server::new_async().await;

    let list_mock = server
        .mock("GET", "/oapi/v1/namespaces/demo/deploymentconfigs")
        .with_status(200)
        .with_body(
            r#"{"kind": "DeploymentConfigList", "items": [
                {"metadata": {"name": "web"}, "spec": {"replicas": 2}}
            ]}"#,
        )
        .create_async()
        .await;
    let get_scale_mock = server
        .mock("GET", "/oapi/v1/namespaces/demo/deploymentconfigs/web/scale")
        .with_status(200)
        .with_body(scale_body("web", 2))
        .create_async()
        .await;
    let put_scale_mock = server
        .mock("PUT", "/oapi/v1/namespaces/demo/deploymentconfigs/web/scale")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "spec": {"replicas": 3}
        })))
        .with_status(200)
        .with_body(scale_body("web", 3))
        .create_async()
        .await;

    let descriptor =
        NamespaceDescriptor::new(server.url(), "sha256~token", "demo".to_string()).unwrap();
    let outcomes = descriptor
        .scale_namespace(ScaleDirection::Up)
        .await
        .unwrap();

    list_mock.assert_async().await;
    get_scale_mock.assert_async().await;
    put_scale_mock.assert_async().await;

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].applied);
    assert_eq!((outcomes[0].previous, outcomes[0].desired), (2, 3));
}

#[tokio::test]
async fn test_scale_down_at_zero_issues_no_put() {
    let mut server = mockito::Server::new_async().await;

    let _list_mock = server
        .mock("GET", "/oapi/v1/namespaces/demo/deploymentconfigs")
        .with_status(200)
        .with_body(
            r#"{"kind": "DeploymentConfigList", "items": [
                {"metadata": {"name": "idle"}, "spec": {"replicas": 0}}
            ]}"#,
        )
        .create_async()
        .await;
    let _get_scale_mock = server
        .mock("GET", "/oapi/v1/namespaces/demo/deploymentconfigs/idle/scale")
        .with_status(200)
        .with_body(scale_body("idle", 0))
        .create_async()
        .await;
    let put_scale_mock = server
        .mock("PUT", "/oapi/v1/namespaces/demo/deploymentconfigs/idle/scale")
        .expect(0)
        .create_async()
        .await;

    let descriptor = NamespaceDescriptor::new(server.url(), "token", "demo".to_string()).unwrap();
    let outcomes = descriptor
        .scale_namespace(ScaleDirection::Down)
        .await
        .unwrap();

    put_scale_mock.assert_async().await;
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].applied);
}

#[tokio::test]
async fn test_restart_old_pods_end_to_end() {
    let mut server = mockito::Server::new_async().await;

    let old_start = (Utc::now() - Duration::days(5)).to_rfc3339();
    let fresh_start = (Utc::now() - Duration::hours(6)).to_rfc3339();

    let _list_mock = server
        .mock("GET", "/api/v1/namespaces/demo/pods")
        .with_status(200)
        .with_body(format!(
            r#"{{"kind": "PodList", "items": [
                {{"metadata": {{"name": "old-1-aaaaa"}},
                  "status": {{"phase": "Running", "startTime": "{}"}}}},
                {{"metadata": {{"name": "fresh-1-bbbbb"}},
                  "status": {{"phase": "Running", "startTime": "{}"}}}}
            ]}}"#,
            old_start, fresh_start
        ))
        .create_async()
        .await;
    let delete_old = server
        .mock("DELETE", "/api/v1/namespaces/demo/pods/old-1-aaaaa")
        .with_status(200)
        .with_body(r#"{"kind": "Status", "status": "Success"}"#)
        .create_async()
        .await;
    let delete_fresh = server
        .mock("DELETE", "/api/v1/namespaces/demo/pods/fresh-1-bbbbb")
        .expect(0)
        .create_async()
        .await;

    let descriptor = NamespaceDescriptor::new(server.url(), "token", "demo".to_string()).unwrap();
    let report = descriptor.restart_old_pods(3).await.unwrap();

    delete_old.assert_async().await;
    delete_fresh.assert_async().await;

    assert_eq!(report.examined, 2);
    assert_eq!(report.restarted.len(), 1);
    assert_eq!(report.restarted[0].name, "old-1-aaaaa");
}

#[tokio::test]
async fn test_expired_token_reports_login_required() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/oapi/v1/namespaces/demo/deploymentconfigs")
        .with_status(401)
        .create_async()
        .await;

    let descriptor = NamespaceDescriptor::new(server.url(), "expired", "demo".to_string()).unwrap();
    let err = descriptor
        .scale_namespace(ScaleDirection::Up)
        .await
        .unwrap_err();
    assert!(matches!(err, OcError::LoginRequired));
}

#[test]
fn test_environment_selects_base_url() {
    let conf = ToolConf::default();
    assert!(conf.base_url(Environment::Prod).starts_with("https://ose."));
    assert!(conf
        .base_url(Environment::NonProd)
        .starts_with("https://osenp."));
}
