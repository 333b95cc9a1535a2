//! End-to-end tests for the `/projects` routes.

use std::collections::HashSet;

use axum::http::StatusCode;
use projects_sdk::ProjectsClient;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_full_lifecycle_scenario() {
    let server = common::start_server().await;
    let sdk = ProjectsClient::with_client(&server.base_url(), common::client());

    let created = sdk.create(Some("Spec"), Some("A")).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.title.as_deref(), Some("Spec"));
    assert_eq!(created.owner.as_deref(), Some("A"));

    let found = sdk.list(Some("Spec")).await.unwrap();
    assert_eq!(found, vec![created.clone()]);

    let updated = sdk.update(&created.id, Some("Spec2"), Some("A")).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title.as_deref(), Some("Spec2"));
    assert_eq!(updated.owner.as_deref(), Some("A"));

    let res = common::client()
        .delete(server.url(&format!("/projects/{}", created.id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().is_empty());

    assert!(sdk.list(None).await.unwrap().is_empty());
    assert_eq!(server.store_len(), 0);
}

#[tokio::test]
async fn test_creates_mint_distinct_ids_in_order() {
    let server = common::start_server().await;
    let sdk = ProjectsClient::with_client(&server.base_url(), common::client());

    let mut created = Vec::new();
    for i in 0..10 {
        let title = format!("project-{i}");
        created.push(sdk.create(Some(&title), Some("owner")).await.unwrap());
    }

    assert_eq!(server.store_len(), 10);
    let ids: HashSet<_> = created.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids.len(), 10);

    let listed = sdk.list(None).await.unwrap();
    assert_eq!(listed, created);
}

#[tokio::test]
async fn test_list_filter_is_case_sensitive_substring() {
    let server = common::start_server().await;
    let sdk = ProjectsClient::with_client(&server.base_url(), common::client());

    let api = sdk.create(Some("Rust API"), Some("A")).await.unwrap();
    let cli = sdk.create(Some("Rust CLI"), Some("B")).await.unwrap();
    sdk.create(Some("Docs"), Some("C")).await.unwrap();

    assert_eq!(sdk.list(Some("Rust")).await.unwrap(), vec![api.clone(), cli]);
    assert_eq!(sdk.list(Some("API")).await.unwrap(), vec![api]);
    assert!(sdk.list(Some("rust")).await.unwrap().is_empty());
    assert!(sdk.list(Some("nothing")).await.unwrap().is_empty());
    assert_eq!(sdk.list(Some("")).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_ignores_client_id_and_accepts_missing_fields() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .post(server.url("/projects"))
        .json(&json!({ "id": "client-chosen", "title": "Spec" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_ne!(body["id"], "client-chosen");
    assert_eq!(body["title"], "Spec");
    assert!(body.get("owner").is_none());

    // No body at all.
    let res = client.post(server.url("/projects")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert!(body["id"].is_string());
    assert!(body.get("title").is_none());

    assert_eq!(server.store_len(), 2);
}

#[tokio::test]
async fn test_update_is_full_replace() {
    let server = common::start_server().await;
    let sdk = ProjectsClient::with_client(&server.base_url(), common::client());

    let created = sdk.create(Some("Spec"), Some("A")).await.unwrap();
    let updated = sdk.update(&created.id, Some("Spec2"), None).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title.as_deref(), Some("Spec2"));
    assert_eq!(updated.owner, None);
    assert_eq!(sdk.list(None).await.unwrap(), vec![updated]);
}

#[tokio::test]
async fn test_update_unknown_id_leaves_store_unchanged() {
    let server = common::start_server().await;
    let sdk = ProjectsClient::with_client(&server.base_url(), common::client());

    let created = sdk.create(Some("Spec"), Some("A")).await.unwrap();
    let unknown = "6f1c2a3e-9b4d-4c7a-8e21-0f5d3b9a7c11";

    let res = common::client()
        .put(server.url(&format!("/projects/{unknown}")))
        .json(&json!({ "title": "X", "owner": "Y" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "project not found" }));

    assert_eq!(sdk.list(None).await.unwrap(), vec![created]);
}

#[tokio::test]
async fn test_delete_unknown_id_leaves_store_unchanged() {
    let server = common::start_server().await;
    let sdk = ProjectsClient::with_client(&server.base_url(), common::client());

    sdk.create(Some("Spec"), Some("A")).await.unwrap();
    let err = sdk
        .delete("6f1c2a3e-9b4d-4c7a-8e21-0f5d3b9a7c11")
        .await
        .unwrap_err();
    assert_eq!(err.api_message(), Some("project not found"));
    assert_eq!(server.store_len(), 1);
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let server = common::start_server().await;
    let sdk = ProjectsClient::with_client(&server.base_url(), common::client());

    let a = sdk.create(Some("a"), Some("A")).await.unwrap();
    let b = sdk.create(Some("b"), Some("B")).await.unwrap();
    let c = sdk.create(Some("c"), Some("C")).await.unwrap();

    sdk.delete(&b.id).await.unwrap();
    assert_eq!(server.store_len(), 2);
    assert_eq!(sdk.list(None).await.unwrap(), vec![a, c]);

    // Second delete of the same id is a not-found.
    let err = sdk.delete(&b.id).await.unwrap_err();
    assert_eq!(err.api_message(), Some("project not found"));
}

#[tokio::test]
async fn test_id_lookup_matches_exact_spelling() {
    let server = common::start_server().await;
    let sdk = ProjectsClient::with_client(&server.base_url(), common::client());
    let client = common::client();

    let created = sdk.create(Some("Spec"), Some("A")).await.unwrap();
    let upper = created.id.to_uppercase();
    assert_ne!(upper, created.id);

    let res = client
        .put(server.url(&format!("/projects/{upper}")))
        .json(&json!({ "title": "Loud", "owner": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "project not found" }));

    let res = client
        .delete(server.url(&format!("/projects/{upper}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "project not found" }));

    assert_eq!(sdk.list(None).await.unwrap(), vec![created]);
}
