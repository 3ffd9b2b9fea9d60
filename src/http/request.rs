// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Inbound resource request descriptor

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

/// A resource load the host web view is about to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequest {
    /// Requested URL, exactly as the view reported it
    pub url: String,
    /// Whether the request is for the top-level document
    pub is_main_frame: bool,
    /// Script to splice into the page before it starts loading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injected_script: Option<String>,
}

impl ResourceRequest {
    /// Create a main frame request
    pub fn main_frame(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            is_main_frame: true,
            injected_script: None,
        }
    }

    /// Create a sub-resource request (image, script, iframe...)
    pub fn sub_resource(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            is_main_frame: false,
            injected_script: None,
        }
    }

    /// Set the script injected on start load
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.injected_script = Some(script.into());
        self
    }

    /// Script to inject, if one is set and non-empty
    pub fn script(&self) -> Option<&str> {
        self.injected_script.as_deref().filter(|s| !s.is_empty())
    }

    /// Parse the URL
    pub fn parsed_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.url)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_script_is_none() {
        let req = ResourceRequest::main_frame("https://example.com").with_script("");
        assert!(req.script().is_none());

        let req = req.with_script("console.log(1)");
        assert_eq!(req.script(), Some("console.log(1)"));
    }

    #[test]
    fn test_deserialize_from_host() {
        let req: ResourceRequest =
            serde_json::from_str(r#"{"url":"https://example.com/","isMainFrame":false}"#).unwrap();
        assert!(!req.is_main_frame);
        assert!(req.injected_script.is_none());
        assert_eq!(req.parsed_url().unwrap().host_str(), Some("example.com"));
    }
}
