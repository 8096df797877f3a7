//! Serving with graceful shutdown
//!
//! In-flight requests get `drain_timeout` to finish once the shutdown signal
//! fires; connections still open after that are dropped.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, signal, sync::Notify};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves, then drain for at most `drain_timeout`
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let draining = Arc::new(Notify::new());

    let server = axum::serve(listener, app).with_graceful_shutdown({
        let draining = Arc::clone(&draining);
        async move {
            shutdown.await;
            info!(timeout = ?drain_timeout, "Waiting for in-flight requests to finish");
            draining.notify_one();
        }
    });

    let deadline = async {
        draining.notified().await;
        tokio::time::sleep(drain_timeout).await;
    };

    tokio::select! {
        result = server.into_future() => result,
        () = deadline => {
            warn!(timeout = ?drain_timeout, "Shutdown timeout elapsed, dropping open connections");
            Ok(())
        }
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
