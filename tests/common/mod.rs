//! Shared utilities for integration tests.

use std::net::SocketAddr;

use projects_api::config::ServiceConfig;
use projects_api::lifecycle::Shutdown;
use projects_api::projects::SharedStore;
use projects_api::HttpServer;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A projects server running on an ephemeral port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: SharedStore,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn store_len(&self) -> usize {
        self.store.lock().len()
    }
}

/// Start a server with default configuration.
pub async fn start_server() -> TestServer {
    start_server_with(ServiceConfig::default()).await
}

/// Start a server with the given configuration.
///
/// The listener is bound before this returns, so requests can be sent
/// immediately.
pub async fn start_server_with(config: ServiceConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    let store = server.store();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        store,
        shutdown,
        handle,
    }
}

/// HTTP client that ignores proxy environment variables.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}
