// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for Toecan API calls and trip report export.

use std::path::PathBuf;

/// Errors surfaced by the client and report writer.
///
/// Nothing is retried or translated internally: every variant is handed
/// back to the caller as soon as it occurs.
#[derive(Debug, thiserror::Error)]
pub enum ToecanError {
    /// The API answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Request { status: u16, body: String },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Decode(String),

    #[error("Cannot write {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(f64),
}

impl ToecanError {
    /// HTTP status of a `Request` error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ToecanError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for client and report operations
pub type Result<T> = std::result::Result<T, ToecanError>;
