// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # webview-bridge - response interception for embedded web views
//!
//! The native half of a web view bridge: it sits in the view's resource
//! loading path, fetches top-level pages through its own HTTP client, and
//! splices a start-load script into HTML bodies while they stream.
//!
//! ## Features
//!
//! - Interception gate: main-frame restriction, URL sanity checks, block rules
//! - Redirect-aware fetching: redirects reach the view untouched
//! - Streaming injection: no full-body buffering, any read size
//! - Charset aware: the script is re-encoded in the page's charset
//! - Navigation tracking: load start/finish/error events to an injected sink
//!
//! ## Example
//!
//! ```rust,no_run
//! use webview_bridge::{InterceptorConfig, ResourceRequest, ResponseInterceptor};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let interceptor = ResponseInterceptor::with_config(InterceptorConfig::default())?;
//!
//!     let request = ResourceRequest::main_frame("https://example.com")
//!         .with_script("window.bridgeReady = true");
//!
//!     match interceptor.intercept(&request).into_response() {
//!         Some(response) => println!("serving {} ({})", response.mime_type, response.charset),
//!         None => println!("default handling"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod inject;
pub mod network;
pub mod view;

// Re-exports for convenience

// Configuration
pub use config::{BlockAction, BlockRule, InterceptorConfig};

// Errors
pub use error::{Error, ErrorContext, Result};

// HTTP
pub use http::{FetchedPage, HttpPageSource, InterceptedResponse, PageSource, ResourceRequest};

// Injection
pub use inject::{InjectingReader, InjectionContext};

// Network
pub use network::{
    blocks_navigation, is_likely_valid, requires_injection, GateDecision, InterceptAction,
    InterceptDecision, ResponseInterceptor,
};

// View
pub use view::{EventLog, EventSink, LoadState, NavigationEvent, NavigationTracker};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
