// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for wpak

use std::io;
use thiserror::Error;

/// Result type alias for wpak operations
pub type Result<T> = std::result::Result<T, WpakError>;

/// Every failure wpak can hit. All of them are fatal at the binary boundary.
#[derive(Error, Debug)]
pub enum WpakError {
    /// I/O error (spawning a program, piping to it, reading a file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An external program ran but exited unsuccessfully
    #[error("Command failed: {program} exited with {status}{note}", note = stderr_suffix(.stderr))]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// Output of an external program did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input from the user
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No device is marked as the current default
    #[error("No default device: {0}")]
    NoDefaultDevice(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}
