// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response interceptor for the embedded web view
//!
//! Sits in the view's resource loading path. For each request it either
//! leaves the load to the view, answers with an empty placeholder, or fetches
//! the page itself and hands back the body with the start-load script
//! spliced in.

use reqwest::StatusCode;

use super::decision::InterceptDecision;
use super::url_filter::is_likely_valid;
use crate::config::{BlockAction, InterceptorConfig};
use crate::error::Result;
use crate::http::{FetchedPage, HttpPageSource, InterceptedResponse, PageSource, ResourceRequest};
use crate::inject::{InjectingReader, InjectionContext};

/// Outcome of the interception gate, before any network access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Leave the request to the view
    Skip,
    /// Answer with the empty placeholder
    Placeholder,
    /// Fetch the page through the secondary client
    Fetch,
}

/// Action the host should take for a request
#[derive(Debug)]
pub enum InterceptAction {
    /// Use the view's default handling
    Continue,
    /// Request matched a placeholder block rule
    Blocked(InterceptedResponse),
    /// Serve this response instead of loading the resource
    Respond(InterceptedResponse),
}

impl InterceptAction {
    /// Check if the host should fall back to default handling
    pub fn is_continue(&self) -> bool {
        matches!(self, InterceptAction::Continue)
    }

    /// Response to serve, `None` for default handling
    pub fn into_response(self) -> Option<InterceptedResponse> {
        match self {
            InterceptAction::Continue => None,
            InterceptAction::Blocked(resp) | InterceptAction::Respond(resp) => Some(resp),
        }
    }
}

/// Intercepts page loads and injects the start-load script into HTML
pub struct ResponseInterceptor<S = HttpPageSource> {
    config: InterceptorConfig,
    source: S,
}

impl ResponseInterceptor<HttpPageSource> {
    /// Create an interceptor with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(InterceptorConfig::default())
    }

    /// Create an interceptor backed by a reqwest client
    pub fn with_config(config: InterceptorConfig) -> Result<Self> {
        let source = HttpPageSource::with_config(config.page_source_config())?;
        Self::with_source(config, source)
    }
}

impl<S: PageSource> ResponseInterceptor<S> {
    /// Create an interceptor over any page source
    pub fn with_source(config: InterceptorConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, source })
    }

    /// Get configuration
    pub fn config(&self) -> &InterceptorConfig {
        &self.config
    }

    /// Get the page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Decide what to do with a request without touching the network
    ///
    /// Block rules are checked first so that sub-resource loads of blocked
    /// endpoints are caught too.
    pub fn gate(&self, request: &ResourceRequest) -> GateDecision {
        if let Some(rule) = self.config.match_rule(&request.url) {
            tracing::debug!(url = %request.url, pattern = %rule.pattern, "Block rule matched");
            return match rule.action {
                BlockAction::Placeholder => GateDecision::Placeholder,
                BlockAction::Passthrough => GateDecision::Skip,
            };
        }

        if self.config.main_frame_only && !request.is_main_frame {
            return GateDecision::Skip;
        }

        if !is_likely_valid(&request.url) {
            tracing::debug!(url = %request.url, "URL not interceptable");
            return GateDecision::Skip;
        }

        GateDecision::Fetch
    }

    /// Check if the interceptor would take over a request
    pub fn should_intercept(&self, request: &ResourceRequest) -> bool {
        self.gate(request) != GateDecision::Skip
    }

    /// Run the full pipeline for one request
    ///
    /// Never fails: every error path hands the request back to the view.
    pub fn intercept(&self, request: &ResourceRequest) -> InterceptAction {
        match self.gate(request) {
            GateDecision::Skip => InterceptAction::Continue,
            GateDecision::Placeholder => {
                InterceptAction::Blocked(InterceptedResponse::placeholder())
            }
            GateDecision::Fetch => match self.source.fetch(&request.url) {
                Ok(page) => self.transform(request, page),
                Err(e) => {
                    tracing::warn!(url = %request.url, error = %e, "Fetch failed, not intercepting");
                    InterceptAction::Continue
                }
            },
        }
    }

    /// Turn a fetched page into the response the view gets
    fn transform(&self, request: &ResourceRequest, page: FetchedPage) -> InterceptAction {
        let decision = InterceptDecision::new(request, &page);
        if !decision.requires_injection() {
            tracing::debug!(
                url = %decision.url,
                status = page.status_code(),
                content_type = %decision.content_type,
                redirect = decision.is_redirect,
                "Response does not take injection"
            );
            return InterceptAction::Continue;
        }

        let ctx = InjectionContext::for_content_type(request.script(), &decision.content_type)
            .anchor(self.config.anchor.as_str());
        let charset = ctx.charset_name();
        let status = page.status_code();

        let body: Box<dyn std::io::Read + Send> = if page.status == StatusCode::OK {
            tracing::debug!(url = %decision.url, charset = %charset, "Injecting start-load script");
            Box::new(InjectingReader::new(page.body, &ctx))
        } else {
            page.body
        };

        InterceptAction::Respond(InterceptedResponse::html(charset, status, body))
    }
}
