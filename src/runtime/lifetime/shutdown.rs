use tokio::signal;
use tracing::{error, warn};

/// 等待 Ctrl+C；信号监听失败时不再触发关停
pub async fn listen_for_shutdown() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    warn!("Shutdown signal received, initiating graceful shutdown...");
}
