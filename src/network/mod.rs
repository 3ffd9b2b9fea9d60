// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request interception for the embedded web view
//!
//! Gates each resource load, fetches eligible pages through the secondary
//! client, and decides whether the response takes the injected script.

mod decision;
mod interceptor;
mod url_filter;

pub use decision::{is_html, is_redirect, requires_injection, InterceptDecision};
pub use interceptor::{GateDecision, InterceptAction, ResponseInterceptor};
pub use url_filter::{blocks_navigation, is_likely_valid};
