//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the catalog service using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Catalog - item catalog microservice
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(version, about, long_about = None)]
#[command(author = "Catalog Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "catalog.toml", env = "CATALOG_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CATALOG_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve(commands::serve::ServeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
