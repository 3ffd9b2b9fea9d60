// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Script payloads and the per-request injection context

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

use super::charset::{encode_text, resolve_charset};

/// Anchor after which scripts are injected unless configured otherwise
pub const DEFAULT_ANCHOR: &str = "<head>";

/// Wrap a script in a `<script>` element
pub fn script_tag(script: &str) -> String {
    format!("<script>{}</script>", script)
}

/// Wrap a script in an immediately invoked function for post-load evaluation
pub fn wrap_in_iife(script: &str) -> String {
    format!("(function() {{\n{};\n}})();", script)
}

/// Everything needed to transform one response body
#[derive(Debug, Clone)]
pub struct InjectionContext {
    script: Option<String>,
    encoding: &'static Encoding,
    /// Charset name reported to the view
    charset: String,
    anchor: String,
}

impl InjectionContext {
    /// Create a context for `script` in the given charset
    pub fn new(script: Option<&str>, encoding: &'static Encoding) -> Self {
        Self {
            script: script.filter(|s| !s.is_empty()).map(str::to_string),
            encoding,
            charset: encoding.name().to_string(),
            anchor: DEFAULT_ANCHOR.to_string(),
        }
    }

    /// Create a context whose charset comes from a content type header
    ///
    /// The reported charset name keeps the header's spelling.
    pub fn for_content_type(script: Option<&str>, content_type: &str) -> Self {
        let (encoding, charset) = resolve_charset(content_type);
        Self {
            charset: charset.to_string(),
            ..Self::new(script, encoding)
        }
    }

    /// Use a different anchor
    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// Check if there is anything to inject
    pub fn is_empty(&self) -> bool {
        self.script.is_none() || self.anchor.is_empty()
    }

    /// Charset the body is encoded in
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Charset name reported with the response
    pub fn charset_name(&self) -> &str {
        &self.charset
    }

    /// Width of one code unit in the body, in bytes
    ///
    /// The anchor may only match on a code unit boundary.
    pub fn code_unit_len(&self) -> usize {
        if self.encoding == UTF_16LE || self.encoding == UTF_16BE {
            2
        } else {
            1
        }
    }

    /// Anchor bytes in the response charset
    pub fn anchor_bytes(&self) -> Vec<u8> {
        encode_text(self.encoding, &self.anchor)
    }

    /// `<script>` element bytes in the response charset
    pub fn payload_bytes(&self) -> Vec<u8> {
        match self.script {
            Some(ref script) => encode_text(self.encoding, &script_tag(script)),
            None => Vec::new(),
        }
    }
}

impl Default for InjectionContext {
    fn default() -> Self {
        Self::new(None, UTF_8)
    }
}
