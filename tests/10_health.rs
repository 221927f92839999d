mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    // OK with a live store, INTERNAL_SERVER_ERROR without one; both prove liveness
    assert!(
        res.status() == StatusCode::OK || res.status() == StatusCode::INTERNAL_SERVER_ERROR,
        "unexpected status: {}",
        res.status()
    );

    let body = res.json::<serde_json::Value>().await?;
    assert!(body.get("status").is_some(), "missing status field: {}", body);
    assert!(body.get("database").is_some(), "missing database field: {}", body);
    Ok(())
}

#[tokio::test]
async fn root_index_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["name"], "Catalog API");
    assert!(body.get("endpoints").is_some(), "missing endpoints: {}", body);
    Ok(())
}
