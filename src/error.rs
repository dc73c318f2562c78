// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for microdriver
//!
//! Every failure is surfaced to the caller as a typed [`Error`] and reported
//! once at the outermost control point.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for microdriver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for microdriver
#[derive(Error, Debug)]
pub enum Error {
    /// Path is neither a `.http` file nor a directory
    #[error("Invalid path or file type: {}. Please provide a valid directory or .http file.", .0.display())]
    InvalidPath(PathBuf),

    /// Directory contains no `.http` files
    #[error("No .http files found in {}", .0.display())]
    NoFilesFound(PathBuf),

    /// No `METHOD target` line anywhere in the file
    #[error("Invalid HTTP file format: no request line (GET, POST, PUT, DELETE or PATCH followed by a URL) found")]
    MalformedRequestLine,

    /// The request target could not be turned into an absolute URL
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport failure (DNS, connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file picker was dismissed without a selection
    #[error("No file selected")]
    SelectionCancelled,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Error::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}
