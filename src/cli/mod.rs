//! CLI module for the heart-risk API
//!
//! Provides subcommands for running the service:
//! - `serve`: run the HTTP API server

pub mod serve;

use clap::{Parser, Subcommand};

/// Heart-Risk API - validates patient vitals and delegates classification
/// to an external worker
#[derive(Parser)]
#[command(name = "heart-risk-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
