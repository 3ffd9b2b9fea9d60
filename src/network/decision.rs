// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-request injection decision

use reqwest::header::{HeaderMap, CONTENT_TYPE, LOCATION};
use reqwest::StatusCode;
use serde::Serialize;

use crate::http::{FetchedPage, ResourceRequest, MIME_TEXT_HTML, MIME_UNKNOWN};

/// Check if a status/header pair describes a redirect
pub fn is_redirect(status: StatusCode, headers: &HeaderMap) -> bool {
    status.is_redirection() && headers.contains_key(LOCATION)
}

/// Check if a content type is HTML, ignoring parameters and case
pub fn is_html(content_type: &str) -> bool {
    content_type
        .get(..MIME_TEXT_HTML.len())
        .map(|essence| essence.eq_ignore_ascii_case(MIME_TEXT_HTML))
        .unwrap_or(false)
}

/// Check if a response should carry the injected script
///
/// Redirects never do. Everything else does iff it is HTML.
pub fn requires_injection(status: StatusCode, headers: &HeaderMap) -> bool {
    if is_redirect(status, headers) {
        return false;
    }

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(MIME_UNKNOWN);

    is_html(content_type)
}

/// Facts the interceptor decides on, computed once per fetched request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterceptDecision {
    pub url: String,
    pub is_main_frame: bool,
    pub is_redirect: bool,
    pub content_type: String,
}

impl InterceptDecision {
    /// Build the decision for a request and its upstream response
    pub fn new(request: &ResourceRequest, page: &FetchedPage) -> Self {
        Self {
            url: request.url.clone(),
            is_main_frame: request.is_main_frame,
            is_redirect: is_redirect(page.status, &page.headers),
            content_type: page.content_type().to_string(),
        }
    }

    /// Check if the response should carry the injected script
    pub fn requires_injection(&self) -> bool {
        !self.is_redirect && is_html(&self.content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers_with(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_html_requires_injection() {
        let h = headers_with(&[("content-type", "text/html; charset=UTF-8")]);
        assert!(requires_injection(StatusCode::OK, &h));
        assert!(requires_injection(StatusCode::NOT_FOUND, &h));

        let h = headers_with(&[("content-type", "Text/HTML")]);
        assert!(requires_injection(StatusCode::OK, &h));
    }

    #[test]
    fn test_non_html() {
        let h = headers_with(&[("content-type", "application/json")]);
        assert!(!requires_injection(StatusCode::OK, &h));

        assert!(!requires_injection(StatusCode::OK, &HeaderMap::new()));
        assert!(!is_html("text/htm"));
    }

    #[test]
    fn test_redirects_never_inject() {
        for status in [301, 302, 303, 307, 308] {
            let h = headers_with(&[
                ("content-type", "text/html"),
                ("location", "https://example.com/next"),
            ]);
            let status = StatusCode::from_u16(status).unwrap();
            assert!(!requires_injection(status, &h));
        }
    }

    #[test]
    fn test_3xx_without_location() {
        let h = headers_with(&[("content-type", "text/html")]);
        assert!(requires_injection(StatusCode::NOT_MODIFIED, &h));
    }

    #[test]
    fn test_decision() {
        let req = ResourceRequest::main_frame("https://example.com");
        let page = FetchedPage::new(
            StatusCode::FOUND,
            headers_with(&[("location", "/login")]),
            Box::new(std::io::empty()),
        );
        let decision = InterceptDecision::new(&req, &page);
        assert!(decision.is_redirect);
        assert_eq!(decision.content_type, "application/octet-stream");
        assert!(!decision.requires_injection());
    }
}
