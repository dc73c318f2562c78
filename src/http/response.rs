// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response descriptor types

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// HTTP response representation, fully buffered
#[derive(Debug, Clone)]
pub struct ResponseDescriptor {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body decoded as text
    pub body: String,
    /// Time from send to fully read body
    pub elapsed: Duration,
}

impl ResponseDescriptor {
    /// Create a new response
    pub fn new(status: StatusCode, headers: HeaderMap, body: String, elapsed: Duration) -> Self {
        Self {
            status,
            headers,
            body,
            elapsed,
        }
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Status line as printed to the console, e.g. `200 OK (12 ms)`
    pub fn status_line(&self) -> String {
        format!("{} ({} ms)", self.status, self.elapsed_ms())
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Response time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}
