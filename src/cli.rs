// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `studyplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "studyplan",
    version,
    about = "Order study topics by prerequisites and priority, then pack them into days.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML).
    ///
    /// Default: `StudyPlan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "StudyPlan.toml")]
    pub plan: String,

    /// Enter topics and dependencies interactively instead of reading a file.
    #[arg(long)]
    pub interactive: bool,

    /// Override `[plan].daily_hours` from the plan file.
    #[arg(long, value_name = "HOURS")]
    pub daily_hours: Option<u32>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STUDYPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print topics and dependencies, but don't schedule.
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
