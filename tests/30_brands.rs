mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

// Full brand lifecycle against a live store. Skipped when MONGODB_URI is not
// set.

#[tokio::test]
async fn brand_lifecycle_round_trips() -> Result<()> {
    if !common::db_configured() {
        eprintln!("skipping: MONGODB_URI not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let (username, password) = common::admin_credentials();
    let slug = common::unique_marker("brand");

    // Create
    let res = client
        .post(format!("{}/brands", server.base_url))
        .basic_auth(&username, Some(&password))
        .json(&json!({
            "name": "Test Brand",
            "slug": slug,
            "logo_url": "https://example.com/logo.png",
            "banner_url": "https://example.com/banner.png",
            "description": "created by integration test",
            "visible": false,
            "order": 99,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["_id"].as_str().expect("string id").to_string();
    assert_eq!(id.len(), 24, "expected hex ObjectId, got {}", id);
    assert_eq!(created["slug"], slug.as_str());
    assert_eq!(created["visible"], false);

    // Hidden from the public listing, present in the admin listing
    let public = client
        .get(format!("{}/brands", server.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert!(
        !public
            .as_array()
            .unwrap()
            .iter()
            .any(|b| b["_id"] == id.as_str()),
        "invisible brand leaked into public listing"
    );

    let all = client
        .get(format!("{}/brands/all", server.base_url))
        .basic_auth(&username, Some(&password))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert!(
        all.as_array().unwrap().iter().any(|b| b["_id"] == id.as_str()),
        "created brand missing from admin listing"
    );

    // Update is a full replace of editable fields
    let res = client
        .put(format!("{}/brands/{}", server.base_url, id))
        .basic_auth(&username, Some(&password))
        .json(&json!({
            "name": "Test Brand Renamed",
            "slug": slug,
            "logo_url": "https://example.com/logo2.png",
            "banner_url": "https://example.com/banner2.png",
            "description": "renamed by integration test",
            "visible": true,
            "in_navbar": true,
            "order": 42,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Now visible publicly, with the replaced fields
    let public = client
        .get(format!("{}/brands", server.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let found = public
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["_id"] == id.as_str())
        .cloned()
        .expect("updated brand should be publicly visible");
    assert_eq!(found["name"], "Test Brand Renamed");
    assert_eq!(found["order"], 42);

    // Delete, then the identifier dangles
    let res = client
        .delete(format!("{}/brands/{}", server.base_url, id))
        .basic_auth(&username, Some(&password))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(format!("{}/brands/{}", server.base_url, id))
        .basic_auth(&username, Some(&password))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .put(format!("{}/brands/{}", server.base_url, id))
        .basic_auth(&username, Some(&password))
        .json(&json!({
            "name": "n",
            "slug": "s",
            "logo_url": "l",
            "banner_url": "b",
            "description": "d",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn brand_create_with_missing_field_is_rejected() -> Result<()> {
    if !common::db_configured() {
        eprintln!("skipping: MONGODB_URI not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let (username, password) = common::admin_credentials();

    let res = client
        .post(format!("{}/brands", server.base_url))
        .basic_auth(&username, Some(&password))
        .json(&json!({ "name": "No Slug" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR", "unexpected body: {}", body);
    Ok(())
}
