#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use hrm_api_rust::config::{AppConfig, DeletionPolicy};
use hrm_api_rust::database::SqliteStore;
use hrm_api_rust::{app, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: Client,
    pub token: String,
    handle: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Development profile with a fixed secret and a short status source timeout
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.security.jwt_secret = TEST_SECRET.to_string();
    config.security.admin_username = Some("admin".to_string());
    config.security.admin_password = Some("password".to_string());
    config.status_source.timeout_secs = 1;
    config.api.enable_request_logging = false;
    config
}

pub fn cascade_config() -> AppConfig {
    let mut config = test_config();
    config.brands.deletion_policy = DeletionPolicy::Cascade;
    config
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        Self::start_with(test_config()).await
    }

    /// Serve the app in-process against a private in-memory store
    pub async fn start_with(config: AppConfig) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(SqliteStore::in_memory().await?);
        let state = AppState::new(store, &config);
        let router = app(state, &config);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind port {}", port))?;
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let token = hrm_api_rust::auth::JwtCredentials::new(TEST_SECRET, 1)
            .issue("tester", "admin")?
            .0;

        let server = Self {
            port,
            base_url,
            client: Client::new(),
            token,
            handle,
        };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = tokio::time::Instant::now() + timeout;
        while tokio::time::Instant::now() < deadline {
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path)).bearer_auth(&self.token)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path)).bearer_auth(&self.token)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.client.put(self.url(path)).bearer_auth(&self.token)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.client.delete(self.url(path)).bearer_auth(&self.token)
    }

    /// Create a brand pointing at `api_url`, asserting success
    pub async fn create_brand(&self, id: &str, api_url: &str) -> Result<Value> {
        let res = self
            .post("/api/v1/brands")
            .json(&json!({
                "id": id,
                "name": format!("Brand {}", id),
                "api_url": api_url,
                "api_token": format!("{}-token", id),
            }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "create brand: {}", res.status());
        let body: Value = res.json().await?;
        Ok(body["data"].clone())
    }

    pub async fn attach(&self, brand_id: &str, kind: &str, name: &str) -> Result<()> {
        let res = self
            .post(&format!("/api/v1/brands/{}/{}", brand_id, kind))
            .json(&json!({ "name": name }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "attach {}: {}", kind, res.status());
        Ok(())
    }
}
