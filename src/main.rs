//! linkpages - category and tag page generation for a link-directory site.

mod build;
mod cli;
mod config;
mod data;
mod logger;
mod pages;
mod utils;

use anyhow::{Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use data::schema::{schema_customization, to_sdl};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Build { .. } => {
            let config = load_config(&cli)?;
            if config.config_path.exists() {
                log!("config"; "loaded {}", config.config_path.display());
            } else {
                log!("config"; "no config file, using defaults under {}", config.root.display());
            }

            let summary = build_site(&config).await?;
            log!(
                "build";
                "done: {} documents and {} links",
                summary.documents, summary.links
            );
            Ok(())
        }
        Commands::Schema => {
            print!("{}", to_sdl(&schema_customization()));
            Ok(())
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.clone().unwrap_or_else(|| "./".into());
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else if cli.config.as_os_str() != "linkpages.toml" {
        bail!("Config file not found: {}", config_path.display());
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
