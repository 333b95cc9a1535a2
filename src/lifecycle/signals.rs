//! OS signal handling.

use tokio::sync::broadcast;

/// Resolve when Ctrl+C arrives or the shutdown broadcast fires.
///
/// A closed broadcast channel (coordinator dropped) also counts as a
/// shutdown request.
pub async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutdown signal received"),
        _ = shutdown.recv() => tracing::info!("Shutdown requested"),
    }
}
