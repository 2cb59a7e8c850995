//! HTTP serving boundary.
//!
//! A health check, a read-only JSON view of the plant catalog, and the static
//! web build with SPA fallback.

mod rejections;
mod routes;
mod statics;

use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::Mode;
use crate::error::Error;

pub use rejections::AppError;
pub use statics::PLACEHOLDER_IMAGE;

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub mode: Mode,
}

/// State shared by every request handler. The catalog is read-only.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<Catalog>,
    pub static_dir: Arc<PathBuf>,
    pub mode: Mode,
}

impl ServerState {
    pub fn new(catalog: Catalog, static_dir: PathBuf, mode: Mode) -> Self {
        Self {
            catalog: Arc::new(catalog),
            static_dir: Arc::new(static_dir),
            mode,
        }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(routes::routes())
        .fallback(statics::serve)
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn run(config: ServerConfig, catalog: Catalog) -> Result<(), Error> {
    let addr = SocketAddr::new(config.host, config.port);
    let listener = TcpListener::bind(addr).await?;

    if !config.static_dir.join(statics::INDEX_FILE).is_file() {
        warn!(
            static_dir = %config.static_dir.display(),
            "static directory has no index.html, only the API will be useful"
        );
    }

    info!(%addr, mode = ?config.mode, plants = catalog.len(), "🌿 Nature Explorer server is running");
    info!("🌎 Local access: http://localhost:{}", config.port);
    if let Some(ip) = network_address() {
        info!("🔗 Network access: http://{}:{}", ip, config.port);
    }

    let state = ServerState::new(catalog, config.static_dir, config.mode);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Address other devices on the local network can reach us at.
///
/// Connecting a UDP socket only selects a route; nothing is sent.
fn network_address() -> Option<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
    socket.connect((Ipv4Addr::new(192, 0, 2, 1), 80)).ok()?;
    let ip = socket.local_addr().ok()?.ip();
    (!ip.is_loopback() && !ip.is_unspecified()).then_some(ip)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for shutdown signal");
    }
}
