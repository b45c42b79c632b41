use std::io::Read;
use std::path::PathBuf;

use ordex_core::Engine;
use tracing::info;

/// Input parameters for the Parse command strategy.
#[derive(Debug, Clone)]
pub struct ParseInput {
    pub config_path: Option<PathBuf>,
    /// Catalog names given on the command line
    pub products: Vec<String>,
    /// Optional catalog file, one product per line
    pub catalog: Option<PathBuf>,
    /// Order text; stdin when `None`
    pub text: Option<String>,
    pub pretty: bool,
}

/// Strategy for running one extraction and printing the JSON result.
#[derive(Debug, Clone, Copy)]
pub struct ParseStrategy;

impl super::CommandStrategy for ParseStrategy {
    type Input = ParseInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.config_path.as_deref())?;

        let mut products = input.products;
        if let Some(path) = &input.catalog {
            let content = std::fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("Cannot read catalog {}: {e}", path.display())
            })?;
            products.extend(read_catalog(&content));
        }
        if products.is_empty() {
            anyhow::bail!("No products given. Use --product or --catalog.");
        }

        let text = match input.text {
            Some(text) => text,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        info!("Parsing order against {} products", products.len());
        let engine = Engine::new(config.engine)?;
        let result = engine.extract(&products, &text)?;

        let json = if input.pretty {
            serde_json::to_string_pretty(&result)?
        } else {
            serde_json::to_string(&result)?
        };
        println!("{json}");
        Ok(())
    }
}

/// Catalog file format: one name per line, blank lines and `#` comments skipped.
fn read_catalog(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
}
