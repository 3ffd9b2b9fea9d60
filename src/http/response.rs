// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Outbound response descriptor

use std::fmt;
use std::io::Read;

use super::{DEFAULT_CHARSET, MIME_TEXT_HTML};

/// Response handed back to the web view in place of its own network load
pub struct InterceptedResponse {
    /// MIME type reported to the view
    pub mime_type: String,
    /// Charset name reported to the view
    pub charset: String,
    /// HTTP status of the upstream fetch, if there was one
    pub status: Option<u16>,
    /// Body stream. `None` means an empty placeholder body.
    pub body: Option<Box<dyn Read + Send>>,
}

impl InterceptedResponse {
    /// Create an HTML response over a body stream
    pub fn html(charset: impl Into<String>, status: u16, body: Box<dyn Read + Send>) -> Self {
        Self {
            mime_type: MIME_TEXT_HTML.to_string(),
            charset: charset.into(),
            status: Some(status),
            body: Some(body),
        }
    }

    /// Empty HTML response used for blocked endpoints
    pub fn placeholder() -> Self {
        Self {
            mime_type: MIME_TEXT_HTML.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
            status: None,
            body: None,
        }
    }

    /// Check if this response has no body
    pub fn is_placeholder(&self) -> bool {
        self.body.is_none()
    }

    /// Drain the body into memory
    pub fn into_bytes(self) -> std::io::Result<Vec<u8>> {
        let mut out = Vec::new();
        if let Some(mut body) = self.body {
            body.read_to_end(&mut out)?;
        }
        Ok(out)
    }
}

impl fmt::Debug for InterceptedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptedResponse")
            .field("mime_type", &self.mime_type)
            .field("charset", &self.charset)
            .field("status", &self.status)
            .field("body", &self.body.as_ref().map(|_| "<stream>"))
            .finish()
    }
}
