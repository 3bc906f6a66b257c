//! Server Implementation
//!
//! HTTP 服务器启动和优雅关闭

use std::net::SocketAddr;
use std::time::Duration;

use crate::core::{Config, ServerState};
use crate::routes::build_app;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl+C; in-flight requests get `shutdown_timeout_ms` to finish
    pub async fn run(self) -> std::io::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(%addr, environment = %self.config.environment, "POS server listening");

        let app = build_app(&self.state);
        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            let _ = stop_tx.send(());
        });

        let serve = tokio::spawn(async move { serve.await });
        // 收到信号后最多等待 grace，然后放弃未完成的请求
        let drain_deadline = async move {
            let _ = stop_rx.await;
            tokio::time::sleep(grace).await;
        };

        tokio::select! {
            res = serve => match res {
                Ok(served) => served?,
                Err(e) => return Err(std::io::Error::other(e)),
            },
            _ = drain_deadline => {
                tracing::warn!(grace_ms = self.config.shutdown_timeout_ms, "Shutdown timeout reached, dropping open connections");
            }
        }

        self.state.db.pool.close().await;
        self.state.db.writer.close().await;
        tracing::info!("Server stopped");
        Ok(())
    }
}
