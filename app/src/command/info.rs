use std::path::PathBuf;

use ordex_config::Config;

/// Strategy for displaying the effective configuration.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let source = match &input {
            Some(path) => path.clone(),
            None => Config::config_path()?,
        };
        let config = super::load_config(input.as_deref())?;
        let engine = &config.engine;

        println!("=== ordex Configuration ===\n");

        println!("Source: {}", source.display());
        if !source.exists() {
            println!("  (file not found, showing defaults)");
        }
        println!();

        println!("Matching:");
        println!("  Scorer: {:?}", engine.scorer);
        println!("  Threshold: {}", engine.threshold.threshold);
        println!(
            "  Strict Threshold: {} (when >= {:.0}% of names have <= {} chars)",
            engine.threshold.strict_threshold,
            engine.threshold.short_name_ratio * 100.0,
            engine.threshold.short_name_max_chars
        );
        println!("  Fixed Threshold: {}", engine.threshold.fixed);
        println!("  Repeated Scan: {}", engine.repeated_scan);
        println!(
            "  Max Occurrences Per Product: {}",
            engine.max_occurrences_per_product
        );
        println!("  Parallel: {}", engine.parallel);
        println!();

        println!("Quantities:");
        println!("  Units: {}", engine.units.join(", "));
        println!();

        println!("Server:");
        println!("  Address: {}:{}", config.server.host, config.server.port);

        Ok(())
    }
}
