// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `jobdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "jobdag",
    version,
    about = "Build a job dependency DAG and submit it to a scheduling optimizer.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the session file (TOML).
    ///
    /// Default: `Jobdag.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Jobdag.toml")]
    pub session: String,

    /// Optimizer endpoint; overrides `[submit].endpoint`.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Deadline in seconds; overrides `[submit].deadline`.
    #[arg(long, value_name = "SECS")]
    pub deadline: Option<f64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `JOBDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the jobs and graph, but don't contact the
    /// optimizer.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
