//! Message-passing walkthrough entry point.
//!
//! Replays the usage notes for the complex number and both account styles,
//! logging every reply.

use std::process::ExitCode;

use message_passing::config::DemoConfig;
use message_passing::walkthrough;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,message_passing=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match DemoConfig::from_env() {
        Ok(config) => {
            tracing::info!(?config, "Configuration loaded");
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            DemoConfig::default()
        }
    };

    match walkthrough::run(&config) {
        Ok(report) => {
            tracing::info!(
                complex = ?report.complex,
                dispatched = ?report.dispatched,
                table = ?report.table,
                "Walkthrough finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Walkthrough failed: {e}");
            ExitCode::FAILURE
        }
    }
}
