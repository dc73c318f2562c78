// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for microdriver
//!
//! Request/response descriptors and the executor that turns one into the
//! other over the network.

mod client;
mod request;
mod response;

pub use client::{Executor, ExecutorConfig};
pub use request::{HttpMethod, RequestDescriptor};
pub use response::ResponseDescriptor;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("microdriver/", env!("CARGO_PKG_VERSION"));

/// Media type sent with a body when the file declares none
pub const DEFAULT_TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
