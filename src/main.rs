mod cli;

use videofix::{
    config,
    processor::{self, FixOptions},
};
use videofix_av::Tools;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "videofix=debug,videofix_av=debug".to_string()
        } else {
            "videofix=info,videofix_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.check_tools {
        return check_tools();
    }

    let config = config::load_config_or_default(cli.config.as_deref())?;
    let options = resolve_options(&cli, &config)?;

    let tools = Tools::discover(&config.tools)
        .map_err(|e| anyhow::anyhow!("missing requirements: {}", e))?;

    let summary = processor::process_files(&cli.files, &tools, &options);
    tracing::debug!(
        "Done: {} fixed, {} unchanged, {} failed",
        summary.fixed,
        summary.unchanged,
        summary.failed
    );

    Ok(())
}

/// Merge command-line flags over the config file defaults.
fn resolve_options(cli: &Cli, config: &config::Config) -> Result<FixOptions> {
    let default_language = cli
        .lang
        .clone()
        .unwrap_or_else(|| config.defaults.language.clone())
        .trim()
        .to_string();
    let prune = cli.prune || config.defaults.prune;

    if prune && default_language.is_empty() {
        anyhow::bail!("--prune requires a default language (use --lang)");
    }

    Ok(FixOptions {
        default_language,
        prune,
        dry_run: cli.dry_run,
    })
}

fn check_tools() -> Result<()> {
    println!("Checking external tools...\n");

    let mut all_ok = true;
    for tool in videofix_av::check_tools() {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install the mkvtoolnix and ffmpeg packages.");
    }

    Ok(())
}
