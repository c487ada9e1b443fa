// =============================================================================
// VULKAN INFO - command-line report
// =============================================================================
//
// FLOW:
// 1. Load config.toml (or --config PATH), apply command-line overrides
// 2. Initialize logging
// 3. Load the Vulkan library, create an instance, collect the report
// 4. Print it as indented text or JSON
//
// =============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use vulkan_info::bridge;
use vulkan_info::config::{Config, OutputFormat};
use vulkan_info::report::text;

#[derive(Parser, Debug)]
#[command(name = "vulkan-info", version, about = "Report Vulkan device capabilities")]
struct Cli {
    /// Configuration file (defaults to ./config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Physical device to report on
    #[arg(long)]
    device: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load(),
    };
    if let Some(device) = cli.device {
        config.report.device_index = device;
    }
    if cli.json {
        config.report.format = OutputFormat::Json;
    }

    init_logging(&config);
    log::info!(
        "Querying device {} as {} / {}",
        config.report.device_index,
        config.instance.app_name,
        config.instance.engine_name
    );

    let info = bridge::query_vk_info(
        &config.instance_settings(),
        config.report.device_index,
        config.debug.validation_layers,
    )
    .context("No Vulkan report available")?;

    let node = info.to_node();
    match config.report.format {
        OutputFormat::Text => print!("{}", text::render(&node)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&node).context("Failed to serialize report")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Initialize logging; RUST_LOG still wins over the configured level
fn init_logging(config: &Config) {
    use env_logger::Builder;

    let mut builder = Builder::from_default_env();
    builder.filter_level(config.log_level());
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}
