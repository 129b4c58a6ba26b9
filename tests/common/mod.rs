#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::Value;

use school_api::config::AppConfig;
use school_api::database::DatabaseManager;
use school_api::routes;
use school_api::state::AppState;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

impl TestServer {
    /// Serve the app on a background thread that owns its own runtime, so the
    /// server outlives each test's runtime and ends with the test process.
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let listener =
            TcpListener::bind(("127.0.0.1", port)).context("failed to bind test port")?;
        listener.set_nonblocking(true)?;

        let config = AppConfig::from_env().context("invalid test configuration")?;

        std::thread::Builder::new()
            .name("school-api-test-server".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        eprintln!("test server runtime failed: {e}");
                        return;
                    }
                };
                if let Err(e) = runtime.block_on(serve(listener, config)) {
                    eprintln!("test server stopped: {e:#}");
                }
            })
            .context("failed to start test server thread")?;

        Ok(Self { port, base_url })
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
        format!("{}/api/v1{}", self.base_url, path)
    }
}

async fn serve(listener: TcpListener, config: AppConfig) -> Result<()> {
    let db = DatabaseManager::connect(&config.database).await?;
    db.synchronize_schema().await?;

    let listener = tokio::net::TcpListener::from_std(listener)?;
    axum::serve(listener, routes::app(AppState::new(db))).await?;
    Ok(())
}

/// Start the server once per test binary. Returns `None` when no database is
/// configured, in which case callers skip.
pub async fn ensure_server() -> Result<Option<&'static TestServer>> {
    let _ = dotenvy::dotenv();
    if std::env::var("DB_NAME").map(|v| v.is_empty()).unwrap_or(true) {
        eprintln!("DB_NAME not set, skipping end-to-end test");
        return Ok(None);
    }

    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to start test server"));
    server.wait_ready(Duration::from_secs(15)).await?;
    Ok(Some(server))
}

/// POST a payload and return the created entity, asserting 201.
pub async fn create(client: &reqwest::Client, url: &str, payload: Value) -> Result<Value> {
    let res = client.post(url).json(&payload).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED, "POST {} failed", url);
    Ok(res.json::<Value>().await?)
}
