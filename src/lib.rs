// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # microdriver - run `.http` files from the terminal
//!
//! Reads a plain-text file describing one HTTP request, sends it and prints
//! the response. Given a directory, offers a small arrow-key picker over the
//! `.http` files it contains.
//!
//! ## File format
//!
//! ```text
//! POST https://example.com/echo
//! Content-Type: text/plain
//! X-Request-Id: 42
//!
//! hello world
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use microdriver::{parse, Executor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = parse("GET https://example.com/\nAccept: text/html\n")?;
//!     let response = Executor::new()?.execute(&request).await?;
//!
//!     println!("{} ({} bytes)", response.status, response.body.len());
//!     Ok(())
//! }
//! ```

pub mod console;
pub mod error;
pub mod http;
pub mod parser;
pub mod picker;
pub mod runner;

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{Executor, ExecutorConfig, HttpMethod, RequestDescriptor, ResponseDescriptor};

// Parser
pub use parser::{parse, HeaderScope, Parser, ParserConfig};

// Runner
pub use runner::{Runner, Target};

/// microdriver version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
