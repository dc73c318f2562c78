// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request descriptor types

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use reqwest::Method;

use crate::error::{Error, Result};

/// HTTP methods accepted on a request line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// All accepted methods, in request-line pattern order
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    /// Upper-case token as written in a `.http` file
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    /// Case-sensitive: `get` is not a method token.
    fn from_str(s: &str) -> Result<Self> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or(Error::MalformedRequestLine)
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Patch => Method::PATCH,
        }
    }
}

/// A request parsed from a `.http` file
///
/// `headers` keeps first-insertion order; a repeated name overwrites the
/// value in place. `Content-Type` is never stored there, it lives in
/// `content_type` and only applies when a body is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Request method
    pub method: HttpMethod,
    /// Request target, verbatim from the request line
    pub url: String,
    /// Headers other than `Content-Type`
    pub headers: IndexMap<String, String>,
    /// Request body
    pub body: Option<String>,
    /// Media type declared for the body
    pub content_type: Option<String>,
}

impl RequestDescriptor {
    /// Create a descriptor with no headers and no body
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: IndexMap::new(),
            body: None,
            content_type: None,
        }
    }

    /// Set a header, replacing any previous value for the same name
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the body
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the body media type
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Look up a header value by its exact name
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
