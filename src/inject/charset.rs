// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Charset resolution for intercepted responses

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use lazy_static::lazy_static;
use regex::Regex;

use crate::http::DEFAULT_CHARSET;

lazy_static! {
    static ref CHARSET_PARAM: Regex =
        Regex::new(r#"(?i);\s*charset\s*=\s*"?([^";\s]+)"?"#).unwrap();
}

/// Extract the raw `charset` parameter from a content type
pub fn charset_label(content_type: &str) -> Option<&str> {
    CHARSET_PARAM
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Resolve the charset of a response, defaulting to UTF-8
///
/// Returns the encoding together with the name reported back to the view:
/// the label exactly as the header spelled it, or `UTF-8` when the header
/// has none or names a charset that cannot be encoded (unknown labels and
/// the ISO-2022 family that WHATWG maps to "replacement").
pub fn resolve_charset(content_type: &str) -> (&'static Encoding, &str) {
    match charset_label(content_type) {
        None => (UTF_8, DEFAULT_CHARSET),
        Some(label) => match Encoding::for_label_no_replacement(label.as_bytes()) {
            Some(encoding) => (encoding, label),
            None => {
                tracing::warn!(charset = %label, "Unsupported charset, falling back to UTF-8");
                (UTF_8, DEFAULT_CHARSET)
            }
        },
    }
}

/// Encode text in the given charset
///
/// `encoding_rs` only decodes UTF-16, so both byte orders are encoded here.
/// Characters the charset cannot represent become numeric character
/// references, which is what the page's HTML parser expects anyway.
pub fn encode_text(encoding: &'static Encoding, text: &str) -> Vec<u8> {
    if encoding == UTF_16LE {
        text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    } else if encoding == UTF_16BE {
        text.encode_utf16().flat_map(u16::to_be_bytes).collect()
    } else {
        let (bytes, _, _) = encoding.encode(text);
        bytes.into_owned()
    }
}
