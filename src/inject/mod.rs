// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Script injection into HTML response bodies
//!
//! Charset handling, the `<script>` payload, and the streaming reader that
//! splices it in after the anchor.

mod charset;
mod script;
mod stream;

pub use charset::{charset_label, encode_text, resolve_charset};
pub use script::{script_tag, wrap_in_iife, InjectionContext, DEFAULT_ANCHOR};
pub use stream::InjectingReader;
