//! Cyberkit Gallery
//!
//! Neon button and modal components for Dioxus Desktop
//!
//! This is the entry point of the desktop gallery. The configuration file is
//! taken from the first argument, then from `CYBERKIT_CONFIG`; without either
//! the defaults are used.

use std::path::PathBuf;

use anyhow::Context;
use cyberkit_ui::LaunchConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the configuration file
const CONFIG_ENV: &str = "CYBERKIT_CONFIG";

fn main() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   ◢◤ Cyberkit Gallery v{:<35}║", cyberkit_core::VERSION);
    println!("║   Neon buttons and modals for Dioxus Desktop              ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    let config = match config_path() {
        Some(path) => LaunchConfig::load(&path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => {
            tracing::info!("No configuration file given, using defaults");
            LaunchConfig::default()
        }
    };

    // Launch the Dioxus desktop application
    cyberkit_ui::launch_with_config(config);
    Ok(())
}

fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV))
        .map(PathBuf::from)
}
