// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for the bridge
//!
//! Request and response descriptors exchanged with the host web view, and
//! the secondary client used to fetch pages the view would otherwise load
//! itself.

mod client;
mod request;
mod response;

pub use client::{FetchedPage, HttpPageSource, HttpPageSourceConfig, PageSource};
pub use request::ResourceRequest;
pub use response::InterceptedResponse;

/// MIME type of every response the interceptor hands back
pub const MIME_TEXT_HTML: &str = "text/html";

/// Content type assumed when a response carries none
pub const MIME_UNKNOWN: &str = "application/octet-stream";

/// Charset name used when a response declares none
pub const DEFAULT_CHARSET: &str = "UTF-8";
