// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Cheap URL sanity checks run before anything touches the network

const WEB_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Check if a URL is worth fetching
///
/// Rejects blank strings, anything without an `http://` or `https://` prefix
/// (scheme-less `www.` hosts included), and strings containing `|`.
pub fn is_likely_valid(url: &str) -> bool {
    if url.trim().is_empty() || url.contains('|') {
        return false;
    }

    WEB_SCHEMES.iter().any(|scheme| {
        url.get(..scheme.len())
            .map(|prefix| prefix.eq_ignore_ascii_case(scheme))
            .unwrap_or(false)
    })
}

/// Check if the view should refuse to navigate to `url`
pub fn blocks_navigation(url: &str) -> bool {
    !is_likely_valid(url)
}
