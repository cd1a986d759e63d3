mod common;

use anyhow::Result;
use common::{cascade_config, TestServer};
use reqwest::StatusCode;
use serde_json::{json, Value};

const API_URL: &str = "https://api.cs-system-009.cxgenie.app";

#[tokio::test]
async fn create_list_show_update() -> Result<()> {
    let server = TestServer::start().await?;
    let created = server.create_brand("brand_1", API_URL).await?;
    assert_eq!(created["status"], "active");
    assert!(created.get("api_token").is_none(), "token must not be echoed");

    let list: Value = server.get("/api/v1/brands").send().await?.json().await?;
    assert_eq!(list["data"].as_array().map(|a| a.len()), Some(1));

    let res = server
        .put("/api/v1/brands/brand_1")
        .json(&json!({ "name": "Renamed", "status": "inactive" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let shown: Value = server.get("/api/v1/brands/brand_1").send().await?.json().await?;
    assert_eq!(shown["data"]["name"], "Renamed");
    assert_eq!(shown["data"]["status"], "inactive");
    assert_eq!(shown["data"]["api_url"], API_URL);
    Ok(())
}

#[tokio::test]
async fn create_rejects_duplicates_and_bad_input() -> Result<()> {
    let server = TestServer::start().await?;
    server.create_brand("brand_1", API_URL).await?;

    let dup = server
        .post("/api/v1/brands")
        .json(&json!({ "id": "brand_1", "name": "Again", "api_url": API_URL, "api_token": "t" }))
        .send()
        .await?;
    assert_eq!(dup.status(), StatusCode::CONFLICT);

    let bad_url = server
        .post("/api/v1/brands")
        .json(&json!({ "name": "X", "api_url": "ftp://example.com", "api_token": "t" }))
        .send()
        .await?;
    assert_eq!(bad_url.status(), StatusCode::BAD_REQUEST);
    let body: Value = bad_url.json().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let malformed = server
        .post("/api/v1/brands")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    let body: Value = malformed.json().await?;
    assert_eq!(body["code"], "BAD_REQUEST");
    Ok(())
}

#[tokio::test]
async fn delete_is_blocked_by_dependents() -> Result<()> {
    let server = TestServer::start().await?;
    server.create_brand("brand_1", API_URL).await?;
    server.attach("brand_1", "workspaces", "Customer Service").await?;
    server.attach("brand_1", "workspaces", "Sales Support").await?;
    server.attach("brand_1", "agents", "Alice").await?;

    let res = server.delete("/api/v1/brands/brand_1").send().await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let body: Value = res.json().await?;
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(body["details"], json!({ "workspaces": 2, "bots": 0, "agents": 1 }));
    assert_eq!(
        body["message"],
        "Cannot delete brand with associated resources: 2 workspaces, 0 bots, 1 agents"
    );

    // Brand is untouched
    let shown = server.get("/api/v1/brands/brand_1").send().await?;
    assert_eq!(shown.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn delete_without_dependents_then_not_found() -> Result<()> {
    let server = TestServer::start().await?;
    server.create_brand("brand_1", API_URL).await?;

    let res = server.delete("/api/v1/brands/brand_1").send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["brand_id"], "brand_1");
    assert_eq!(body["data"]["brand_name"], "Brand brand_1");

    let again = server.delete("/api/v1/brands/brand_1").send().await?;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    let body: Value = again.json().await?;
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn cascade_policy_removes_dependents() -> Result<()> {
    let server = TestServer::start_with(cascade_config()).await?;
    server.create_brand("brand_1", API_URL).await?;
    server.attach("brand_1", "bots", "FAQ bot").await?;

    let res = server.delete("/api/v1/brands/brand_1").send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["cascaded"]["bots"], 1);

    let stats: Value = server.get("/api/v1/dashboard/stats").send().await?.json().await?;
    assert_eq!(stats["data"]["bot_count"], 0);
    Ok(())
}

#[tokio::test]
async fn soft_delete_is_once_only() -> Result<()> {
    let server = TestServer::start().await?;
    server.create_brand("brand_1", API_URL).await?;

    let first = server.put("/api/v1/brands/brand_1/soft-delete").send().await?;
    assert_eq!(first.status(), StatusCode::OK);
    let first: Value = first.json().await?;
    let deleted_at = first["data"]["deleted_at"].clone();
    assert!(deleted_at.is_string());

    let second = server.put("/api/v1/brands/brand_1/soft-delete").send().await?;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let second: Value = second.json().await?;
    assert_eq!(second["code"], "ALREADY_DELETED");

    // Original timestamp survives, and the brand drops out of the active list
    let shown: Value = server.get("/api/v1/brands/brand_1").send().await?.json().await?;
    assert_eq!(shown["data"]["deleted_at"], deleted_at);
    assert_eq!(shown["data"]["status"], "deleted");

    let active: Value = server.get("/api/v1/brands").send().await?.json().await?;
    assert_eq!(active["data"].as_array().map(|a| a.len()), Some(0));

    let all: Value = server
        .get("/api/v1/brands?include_deleted=true")
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(all["data"].as_array().map(|a| a.len()), Some(1));
    Ok(())
}

#[tokio::test]
async fn restore_reverses_soft_delete() -> Result<()> {
    let server = TestServer::start().await?;
    server.create_brand("brand_1", API_URL).await?;

    let not_deleted = server.put("/api/v1/brands/brand_1/restore").send().await?;
    assert_eq!(not_deleted.status(), StatusCode::CONFLICT);

    server.put("/api/v1/brands/brand_1/soft-delete").send().await?;
    let res = server.put("/api/v1/brands/brand_1/restore").send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["status"], "active");
    assert!(body["data"]["deleted_at"].is_null());
    Ok(())
}

#[tokio::test]
async fn unknown_brand_is_not_found_everywhere() -> Result<()> {
    let server = TestServer::start().await?;

    for res in [
        server.get("/api/v1/brands/ghost").send().await?,
        server.delete("/api/v1/brands/ghost").send().await?,
        server.put("/api/v1/brands/ghost/soft-delete").send().await?,
        server.get("/api/v1/brands/ghost/token").send().await?,
        server.get("/api/v1/brands/ghost/workspaces").send().await?,
    ] {
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = res.json().await?;
        assert_eq!(body["code"], "NOT_FOUND");
    }
    Ok(())
}

#[tokio::test]
async fn token_and_dependents_are_exposed() -> Result<()> {
    let server = TestServer::start().await?;
    server.create_brand("brand_1", API_URL).await?;
    server.attach("brand_1", "workspaces", "Customer Service").await?;

    let token: Value = server.get("/api/v1/brands/brand_1/token").send().await?.json().await?;
    assert_eq!(token["data"]["token"], "brand_1-token");
    assert!(token["data"]["expires_at"].is_null());

    let workspaces: Value = server
        .get("/api/v1/brands/brand_1/workspaces")
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(workspaces["data"][0]["name"], "Customer Service");
    assert_eq!(workspaces["data"][0]["brand_id"], "brand_1");
    Ok(())
}
