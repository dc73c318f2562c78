// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request executor

use std::time::{Duration, Instant};

use reqwest::header::{HeaderName, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Client;
use url::Url;

use super::request::RequestDescriptor;
use super::response::ResponseDescriptor;
use super::{DEFAULT_TEXT_CONTENT_TYPE, DEFAULT_USER_AGENT};
use crate::error::{Error, Result};

/// Executor configuration
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// User agent string
    pub user_agent: String,
    /// Whole-request timeout; `None` leaves it to the transport
    pub timeout: Option<Duration>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ExecutorConfig {
    /// Create a new executor config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Sends a [`RequestDescriptor`] and buffers the response
pub struct Executor {
    client: Client,
}

impl Executor {
    /// Create a new executor with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ExecutorConfig::default())
    }

    /// Create a new executor with custom configuration
    pub fn with_config(config: ExecutorConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;

        Ok(Self { client })
    }

    /// Execute a request
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<ResponseDescriptor> {
        let url = Url::parse(&request.url).map_err(|e| Error::invalid_url(&request.url, e))?;

        let mut builder = self.client.request(request.method.into(), url);

        if let Some(ref body) = request.body {
            let content_type = request
                .content_type
                .as_deref()
                .unwrap_or(DEFAULT_TEXT_CONTENT_TYPE);
            match HeaderValue::from_bytes(content_type.as_bytes()) {
                Ok(value) => builder = builder.header(CONTENT_TYPE, value),
                Err(_) => {
                    tracing::warn!(content_type, "Skipping unrepresentable content type");
                }
            }
            builder = builder.body(body.clone());
        }

        for (name, value) in &request.headers {
            match to_header(name, value) {
                // Body framing headers come from the body itself
                Some((name, _)) if name == CONTENT_TYPE || name == CONTENT_LENGTH => {
                    tracing::debug!(header = %name, "Ignoring body header on request");
                }
                Some((name, value)) => builder = builder.header(name, value),
                None => tracing::warn!(header = %name, "Skipping unrepresentable header"),
            }
        }

        tracing::info!(
            method = %request.method,
            url = %request.url,
            headers = request.headers.len(),
            body_len = request.body.as_ref().map_or(0, String::len),
            "Request"
        );

        let start = Instant::now();
        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        let elapsed = start.elapsed();

        tracing::info!(
            url = %request.url,
            status = %status,
            time_ms = elapsed.as_millis() as u64,
            "Response"
        );

        Ok(ResponseDescriptor::new(
            status,
            headers,
            String::from_utf8_lossy(&body).into_owned(),
            elapsed,
        ))
    }
}

/// Convert a parsed header without checking the value beyond what the wire
/// format can carry.
fn to_header(name: &str, value: &str) -> Option<(HeaderName, HeaderValue)> {
    let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
    let value = HeaderValue::from_bytes(value.as_bytes()).ok()?;
    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_default_config() {
        let config = ExecutorConfig::new();
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.timeout.is_none());
    }

    #[tokio::test]
    async fn test_execute_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let req = RequestDescriptor::new(HttpMethod::Get, server.uri());
        let resp = Executor::new().unwrap().execute(&req).await.unwrap();
        assert_eq!(resp.status_code(), 200);
    }

    #[tokio::test]
    async fn test_body_headers_never_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let req = RequestDescriptor::new(HttpMethod::Get, server.uri())
            .header("content-type", "text/html")
            .header("Content-Length", "999")
            .header("X-Kept", "yes");
        Executor::new().unwrap().execute(&req).await.unwrap();

        let received = server.received_requests().await.unwrap();
        let names: Vec<&str> = received[0].headers.keys().map(|name| name.as_str()).collect();
        assert!(names.contains(&"x-kept"));
        assert!(!names.contains(&"content-type"));
        assert!(!names.contains(&"content-length"));
    }

    #[tokio::test]
    async fn test_lowercase_content_type_yields_to_body_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("content-type", "application/xml"))
            .and(body_string("<a/>"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let req = RequestDescriptor::new(HttpMethod::Post, server.uri())
            .header("content-type", "text/html")
            .content_type("application/xml")
            .body("<a/>");
        let resp = Executor::new().unwrap().execute(&req).await.unwrap();
        assert_eq!(resp.status_code(), 200);
    }

    #[test]
    fn test_to_header() {
        assert!(to_header("X-Test", "1").is_some());
        assert!(to_header("X-Odd", "caf\u{e9}").is_some());
        assert!(to_header("Bad Name", "1").is_none());
        assert!(to_header("X-Test", "line\nbreak").is_none());
    }

    #[test]
    fn test_relative_url_is_invalid() {
        let executor = Executor::new().unwrap();
        let req = RequestDescriptor::new(HttpMethod::Get, "/foo");

        let err = tokio_test::block_on(executor.execute(&req)).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { ref url, .. } if url == "/foo"));
    }

    #[tokio::test]
    async fn test_execute_sends_body_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(header("content-type", "text/plain"))
            .and(header("x-trace", "abc"))
            .and(body_string("hello world"))
            .respond_with(ResponseTemplate::new(201).set_body_string("created"))
            .expect(1)
            .mount(&server)
            .await;

        let req = RequestDescriptor::new(HttpMethod::Post, format!("{}/echo", server.uri()))
            .header("X-Trace", "abc")
            .content_type("text/plain")
            .body("hello world");

        let resp = Executor::new().unwrap().execute(&req).await.unwrap();
        assert_eq!(resp.status_code(), 201);
        assert_eq!(resp.body, "created");
    }

    #[tokio::test]
    async fn test_execute_defaults_text_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(header("content-type", DEFAULT_TEXT_CONTENT_TYPE))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let req = RequestDescriptor::new(HttpMethod::Put, server.uri()).body("plain");

        let resp = Executor::new().unwrap().execute(&req).await.unwrap();
        assert_eq!(resp.status_code(), 204);
        assert!(resp.body.is_empty());
    }

    #[tokio::test]
    async fn test_execute_without_body_sends_no_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let req = RequestDescriptor::new(HttpMethod::Get, server.uri())
            .content_type("application/json");
        let resp = Executor::new().unwrap().execute(&req).await.unwrap();
        assert_eq!(resp.body, "ok");

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(received[0]
            .headers
            .keys()
            .all(|name| name.as_str() != "content-type"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let req = RequestDescriptor::new(HttpMethod::Get, format!("http://{addr}/"));
        let err = Executor::new().unwrap().execute(&req).await.unwrap_err();
        assert!(err.is_network());
    }
}
