// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The ready set drained before every topic was scheduled.
    #[error(
        "Circular dependency detected: scheduled {scheduled} of {total} topics (cycle through: {})",
        .cycle.join(", ")
    )]
    CycleDetected {
        scheduled: usize,
        total: usize,
        /// Names of topics that sit on a dependency cycle.
        cycle: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
