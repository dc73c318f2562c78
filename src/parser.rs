// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! `.http` file parser
//!
//! The format is line-pattern based: the first `METHOD target` line is the
//! request line, every `Name: value` line is a header and whatever follows
//! the first blank line is the body. Header scanning covers the whole file
//! unless [`HeaderScope::BeforeBody`] is selected, so a body line shaped
//! like a header is read as one by default.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};
use crate::http::{HttpMethod, RequestDescriptor};

lazy_static! {
    static ref REQUEST_LINE: Regex =
        Regex::new(r"(?mR)^(GET|POST|PUT|DELETE|PATCH) [ \t]*(\S.*)$").unwrap();
    static ref HEADER_LINE: Regex = Regex::new(r"(?mR)^([\w-]+): (.+)$").unwrap();
}

const CONTENT_TYPE: &str = "Content-Type";

/// Which part of the file is scanned for header lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderScope {
    /// Every line of the file, body included
    #[default]
    WholeFile,
    /// Only the text before the first blank line
    BeforeBody,
}

/// Parser configuration
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Header scanning region
    pub header_scope: HeaderScope,
}

impl ParserConfig {
    /// Create a new parser config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set header scope
    pub fn header_scope(mut self, scope: HeaderScope) -> Self {
        self.header_scope = scope;
        self
    }
}

/// Parses `.http` file text into a [`RequestDescriptor`]
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a parser with custom configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse file content
    ///
    /// Fails only when no request line is present.
    pub fn parse(&self, content: &str) -> Result<RequestDescriptor> {
        let captures = REQUEST_LINE
            .captures(content)
            .ok_or(Error::MalformedRequestLine)?;
        let method: HttpMethod = captures[1].parse()?;
        let url = captures[2].trim_end().to_string();

        let separator = find_blank_line(content);

        let header_region = match (self.config.header_scope, separator) {
            (HeaderScope::BeforeBody, Some((start, _))) => &content[..start],
            _ => content,
        };
        let mut headers = scan_headers(header_region);

        let body = separator
            .map(|(_, end)| content[end..].trim())
            .filter(|body| !body.is_empty())
            .map(str::to_string);

        let content_type = headers.shift_remove(CONTENT_TYPE);

        tracing::debug!(
            %method,
            %url,
            headers = headers.len(),
            has_body = body.is_some(),
            content_type = content_type.as_deref().unwrap_or(""),
            "Parsed request file"
        );

        Ok(RequestDescriptor {
            method,
            url,
            headers,
            body,
            content_type,
        })
    }
}

/// Parse file content with the default configuration
pub fn parse(content: &str) -> Result<RequestDescriptor> {
    Parser::default().parse(content)
}

/// Collect `Name: value` lines; a later duplicate overwrites the value.
fn scan_headers(text: &str) -> IndexMap<String, String> {
    let mut headers = IndexMap::new();
    for captures in HEADER_LINE.captures_iter(text) {
        headers.insert(captures[1].to_string(), captures[2].to_string());
    }
    headers
}

/// Byte range of the first blank-line separator, LF or CRLF.
fn find_blank_line(content: &str) -> Option<(usize, usize)> {
    let lf = content.find("\n\n").map(|i| (i, i + 2));
    let crlf = content.find("\r\n\r\n").map(|i| (i, i + 4));
    match (lf, crlf) {
        (Some(a), Some(b)) => Some(if a.0 < b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}
