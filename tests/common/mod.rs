#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

pub const API_KEY: &str = "integration-test-key";

static NAME_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub database_path: PathBuf,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Fresh database file per server
        let database_path = std::env::temp_dir().join(format!("cafe-api-test-{}-{}.db", std::process::id(), port));
        let _ = std::fs::remove_file(&database_path);
        let database_url = format!("sqlite://{}?mode=rwc", database_path.display());

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_cafe-api"));
        cmd.env("CAFE_API_PORT", port.to_string())
            .env("DATABASE_URL", &database_url)
            .env("CAFE_API_KEY", API_KEY)
            .env("APP_ENV", "development")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, database_path, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let _ = std::fs::remove_file(&self.database_path);
    }
}

/// Start a server with its own empty database; it is stopped when dropped
pub async fn spawn_server() -> Result<TestServer> {
    let server = TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(15)).await?;
    Ok(server)
}

/// Cafe names must be unique within one server
pub fn unique_name(prefix: &str) -> String {
    let n = NAME_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{} {} {}", prefix, std::process::id(), n)
}

/// Form fields for `POST /add`
pub fn cafe_form(name: &str, location: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", name.to_string()),
        ("map_url", format!("https://maps.example.com/{}", name)),
        ("img_url", format!("https://img.example.com/{}.jpg", name)),
        ("loc", location.to_string()),
        ("sockets", "1".to_string()),
        ("toilet", "1".to_string()),
        ("wifi", "1".to_string()),
        ("calls", "".to_string()),
        ("seats", "20-30".to_string()),
        ("coffee_price", "£2.50".to_string()),
    ]
}

/// Add a cafe and return its JSON record from `/all`
pub async fn add_cafe(client: &reqwest::Client, server: &TestServer, name: &str, location: &str) -> Result<serde_json::Value> {
    let res = client.post(server.url("/add")).form(&cafe_form(name, location)).send().await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "add failed: {}", res.status());

    find_by_name(client, server, name).await?.context("added cafe missing from /all")
}

pub async fn find_by_name(client: &reqwest::Client, server: &TestServer, name: &str) -> Result<Option<serde_json::Value>> {
    let body = client.get(server.url("/all")).send().await?.json::<serde_json::Value>().await?;
    let cafes = body["cafes"].as_array().context("cafes should be an array")?;
    Ok(cafes.iter().find(|c| c["name"] == name).cloned())
}
