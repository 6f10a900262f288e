//! usbwatch
//!
//! One-shot auditor for attached USB mass-storage devices. Enumerates
//! devices with the host platform's tooling, cross-references each serial
//! against a remotely fetched allow-list, and prints one report per run.

mod config;
mod enumerate;
mod fetch;
mod logging;
mod netinfo;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use usbwatch_core::report;

#[derive(Parser, Debug)]
#[command(name = "usbwatch")]
#[command(
    author,
    version,
    about = "Report attached USB mass-storage devices against an allow-list"
)]
#[command(long_about = "
Enumerates USB mass-storage devices with the host platform's tooling,
cross-references each device serial against a remotely fetched allow-list,
and prints a report with the device identity, bus path, host IP addresses
and the allow/deny verdict.

EXAMPLES:
    # JSON report with the configured endpoint
    usbwatch

    # Labeled text blocks instead of JSON
    usbwatch --text

    # Override the allow-list endpoint
    usbwatch --endpoint http://10.10.20.1/serial.php

    # Write the default configuration and exit
    usbwatch --save-config

CONFIGURATION:
    usbwatch looks for configuration files in the following order:
    1. Path specified with --config
    2. ~/.config/usbwatch/config.toml
    3. /etc/usbwatch/config.toml
    4. Built-in defaults
")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<std::path::PathBuf>,

    /// Save default configuration to the default location and exit
    #[arg(long)]
    save_config: bool,

    /// Allow-list endpoint URL (overrides the configured value)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Render labeled text blocks instead of JSON
    #[arg(long)]
    text: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.save_config {
        let config = config::Config::default();
        let path = config::Config::default_path();
        config.save(&path).context("Failed to save configuration")?;
        println!("Configuration saved to: {}", path.display());
        return Ok(());
    }

    let mut config = if let Some(ref path) = args.config {
        config::Config::load(Some(path.clone())).context("Failed to load configuration")?
    } else {
        config::Config::load_or_default()
    };
    if let Some(endpoint) = args.endpoint {
        config.allowlist.endpoint = endpoint;
    }

    let log_level = args.log_level.as_deref().unwrap_or(&config.log_level);
    logging::setup_logging(log_level).context("Failed to setup logging")?;

    info!("usbwatch v{}", env!("CARGO_PKG_VERSION"));

    let Some(enumerator) = enumerate::Enumerator::for_host() else {
        info!("Unsupported OS: {}", std::env::consts::OS);
        return Ok(());
    };

    let devices = enumerator.enumerate(&config.enumerate).await;
    if devices.is_empty() {
        println!("No USB devices found.");
        return Ok(());
    }

    let allow_list = fetch::fetch_allowlist(&config.allowlist).await;
    let ip = netinfo::local_ipv4_addresses();

    let records = report::assemble(&devices, &allow_list, &ip);
    if args.text {
        for record in &records {
            println!("{record}\n");
        }
    } else {
        let json = report::to_json(&records).context("Failed to serialize report")?;
        println!("{json}");
    }

    Ok(())
}
