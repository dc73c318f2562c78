// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Path resolution and the parse-then-execute pipeline

use std::path::{Path, PathBuf};

use crate::console;
use crate::error::{Error, Result};
use crate::http::{Executor, ExecutorConfig, ResponseDescriptor};
use crate::parser::{Parser, ParserConfig};
use crate::picker;

/// What a command-line path refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single `.http` file
    File(PathBuf),
    /// A directory to pick a `.http` file from
    Directory(PathBuf),
}

impl Target {
    /// Classify a path
    pub fn resolve(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() && picker::is_http_file(path) {
            Ok(Target::File(path.to_path_buf()))
        } else if path.is_dir() {
            Ok(Target::Directory(path.to_path_buf()))
        } else {
            Err(Error::InvalidPath(path.to_path_buf()))
        }
    }
}

/// Runs one `.http` file per invocation
pub struct Runner {
    parser: Parser,
    executor: Executor,
}

impl Runner {
    /// Create a runner with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ParserConfig::default(), ExecutorConfig::default())
    }

    /// Create a runner with custom configuration
    pub fn with_config(parser: ParserConfig, executor: ExecutorConfig) -> Result<Self> {
        Ok(Self {
            parser: Parser::new(parser),
            executor: Executor::with_config(executor)?,
        })
    }

    /// Resolve `path`, pick a file if it is a directory, and run it
    pub async fn run(&self, path: impl AsRef<Path>) -> Result<ResponseDescriptor> {
        let file = match Target::resolve(path)? {
            Target::File(file) => file,
            Target::Directory(dir) => {
                let files = picker::find_http_files(&dir)?;
                if files.is_empty() {
                    return Err(Error::NoFilesFound(dir));
                }
                picker::select_file(&files)?
            }
        };

        self.run_file(&file).await
    }

    /// Read, parse and execute one file
    pub async fn run_file(&self, file: &Path) -> Result<ResponseDescriptor> {
        console::message(format!("Executing file: {}", file.display()), console::PROGRESS);

        let content = tokio::fs::read_to_string(file).await?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        self.run_text(content).await
    }

    /// Parse and execute file content
    pub async fn run_text(&self, content: &str) -> Result<ResponseDescriptor> {
        let request = self.parser.parse(content)?;

        console::message(
            format!("Executing {} {}", request.method, request.url),
            console::PROGRESS,
        );

        let response = self.executor.execute(&request).await?;

        tracing::debug!(
            status = response.status_code(),
            time_ms = response.elapsed_ms(),
            content_type = response.content_type().unwrap_or(""),
            body_len = response.body.len(),
            "Request file finished"
        );

        Ok(response)
    }
}
