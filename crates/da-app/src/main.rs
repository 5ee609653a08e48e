use std::io;

use anyhow::Result;
use clap::Parser;
use da_core::config::ConvertConfig;

pub mod cli;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging (stderr)
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    // 3. Charger la config, puis appliquer les overrides CLI
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config);
    log::debug!("{config:?}");

    // 4. Convertir
    let converter = pipeline::Converter::new(config);
    let mut out = io::stdout().lock();
    converter.run(&mut out)?;
    Ok(())
}

/// Load `--config` if present, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<ConvertConfig> {
    if cli.config.exists() {
        da_core::config::load_config(&cli.config)
    } else {
        log::info!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(ConvertConfig::default())
    }
}
