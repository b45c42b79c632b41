use std::path::PathBuf;
use std::sync::Arc;

use ordex_core::Engine;
use tracing::info;

/// Input parameters for the Serve command strategy.
#[derive(Debug, Clone)]
pub struct ServeInput {
    pub config_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Strategy for running the HTTP parser API.
///
/// Builds one engine from the config and shares it across all requests.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.config_path.as_deref())?;

        let host = input.host.unwrap_or(config.server.host);
        let port = input.port.unwrap_or(config.server.port);

        let engine = Arc::new(Engine::new(config.engine)?);
        info!(
            "Engine ready: scorer={:?}, threshold={}, repeated_scan={}",
            engine.config().scorer,
            engine.config().threshold.threshold,
            engine.config().repeated_scan
        );

        ordex_server::serve(engine, &host, port).await?;
        Ok(())
    }
}
