use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{ConnectInfo, State};
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio_util::task::TaskTracker;

use crate::domain::config::ServerConfig;
use crate::domain::models::{RequestRecord, ServerInfo};
use crate::error::ServiceError;
use crate::features::history::HistoryStore;
use crate::utils::HostIdentity;

#[derive(Clone)]
pub struct AppState {
    pub history: Arc<HistoryStore>,
    pub identity: HostIdentity,
    pub tasks: TaskTracker,
}

impl AppState {
    pub fn new(history: Arc<HistoryStore>) -> Self {
        Self {
            history,
            identity: HostIdentity::default(),
            tasks: TaskTracker::new(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handle_request))
        .fallback(handle_request)
        .with_state(state)
}

pub async fn run(history: Arc<HistoryStore>) -> Result<()> {
    let addr = format!("{}:{}", ServerConfig::BIND_HOST, ServerConfig::PORT);
    let listener = TcpListener::bind(&addr).await?;

    log::info!("Server is running on port {}...", ServerConfig::PORT);

    serve(listener, AppState::new(history), shutdown_signal()).await?;

    log::info!("Server stopped");

    Ok(())
}

/// Serves until `shutdown` resolves, then waits for pending history writes
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let tasks = state.tasks.clone();

    axum::serve(
        listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;

    tasks.close();
    if !tasks.is_empty() {
        log::info!("Waiting for {} pending history writes", tasks.len());
    }
    tasks.wait().await;

    Ok(())
}

async fn handle_request(
    State(state): State<AppState>,
    method: Method,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> Result<Response, ServiceError> {
    let hostname = (state.identity.hostname)()?;
    let host_ip = (state.identity.host_ip)()?;

    let other_content = if method == Method::GET {
        Some(state.history.render().await.into_content())
    } else {
        None
    };

    let info = ServerInfo::new(hostname, host_ip, other_content);
    let body = serde_json::to_vec(&info)?;

    record_visit(&state, peer);

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Appends the visit in the background so the response is not held up by file I/O
fn record_visit(state: &AppState, peer: Option<ConnectInfo<SocketAddr>>) {
    let Some(ConnectInfo(addr)) = peer else {
        log::warn!("Error extracting client address; request not recorded");
        return;
    };

    let record = RequestRecord::visit(addr.ip().to_string());
    let history = state.history.clone();
    state.tasks.spawn(async move {
        history.append(record).await;
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Shutting down");
}
