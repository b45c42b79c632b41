#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! HTTP front end for the extraction engine.
//!
//! `POST /api/parser` takes `{"products": [...], "text": "..."}` and returns
//! the flat extraction result; `GET /` is a liveness message.

mod error;
mod routes;

use std::sync::Arc;

use ordex_core::Engine;
use tokio::net::TcpListener;
use tracing::info;

pub use error::{Result, ServerError};
pub use routes::{ErrorResponse, HomeResponse, ParseRequest, build_router};

/// Bind `host:port` and serve until Ctrl-C.
pub async fn serve(engine: Arc<Engine>, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("Parser API listening on http://{addr}");

    axum::serve(listener, build_router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Parser API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
