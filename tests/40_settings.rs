mod common;

use anyhow::Result;
use common::TestServer;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn settings(site_name: &str, max_login_attempts: i64) -> Value {
    json!({
        "siteName": site_name,
        "defaultLanguage": "en-US",
        "timezone": "UTC",
        "debugMode": true,
        "maxLoginAttempts": max_login_attempts,
        "sessionTimeout": 12,
        "emailNotifications": false,
        "maintenanceMode": false
    })
}

#[tokio::test]
async fn defaults_before_first_save() -> Result<()> {
    let server = TestServer::start().await?;

    let body: Value = server.get("/api/v1/system/settings").send().await?.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["siteName"], "HRM 管理系統");
    assert_eq!(body["data"]["defaultLanguage"], "zh-TW");
    assert_eq!(body["data"]["timezone"], "Asia/Taipei");
    assert_eq!(body["data"]["maxLoginAttempts"], 5);
    assert_eq!(body["data"]["sessionTimeout"], 24);
    Ok(())
}

#[tokio::test]
async fn update_replaces_current_settings() -> Result<()> {
    let server = TestServer::start().await?;

    for (name, attempts) in [("First", 3), ("Second", 7)] {
        let res = server
            .put("/api/v1/system/settings")
            .json(&settings(name, attempts))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await?;
        assert_eq!(body["data"], settings(name, attempts));
    }

    let body: Value = server.get("/api/v1/system/settings").send().await?.json().await?;
    assert_eq!(body["data"], settings("Second", 7));
    Ok(())
}

#[tokio::test]
async fn invalid_settings_are_rejected() -> Result<()> {
    let server = TestServer::start().await?;

    let res = server
        .put("/api/v1/system/settings")
        .json(&settings("Console", 0))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let missing_field = server
        .put("/api/v1/system/settings")
        .json(&json!({ "siteName": "Console" }))
        .send()
        .await?;
    assert_eq!(missing_field.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn dashboard_stats_count_real_rows() -> Result<()> {
    let server = TestServer::start().await?;
    server.create_brand("brand_1", "https://a.example.com").await?;
    server.create_brand("brand_2", "https://b.example.com").await?;
    server.attach("brand_1", "workspaces", "Customer Service").await?;
    server.attach("brand_1", "agents", "Alice").await?;
    server.attach("brand_2", "agents", "Bob").await?;
    server.put("/api/v1/brands/brand_2/soft-delete").send().await?;

    let body: Value = server.get("/api/v1/dashboard/stats").send().await?.json().await?;
    assert_eq!(
        body["data"],
        json!({ "brand_count": 1, "workspace_count": 1, "bot_count": 0, "agent_count": 2 })
    );
    Ok(())
}
