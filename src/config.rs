// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interceptor configuration

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorContext, Result};
use crate::http::HttpPageSourceConfig;
use crate::inject::DEFAULT_ANCHOR;

/// What to do with a request whose URL matches a block rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockAction {
    /// Answer with an empty HTML response, never touching the network
    Placeholder,
    /// Leave the request to the view's default handling
    Passthrough,
}

/// URL substring mapped to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRule {
    /// Substring matched against the full URL
    pub pattern: String,
    /// Action when the pattern matches
    pub action: BlockAction,
}

impl BlockRule {
    /// Create a placeholder rule
    pub fn placeholder(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            action: BlockAction::Placeholder,
        }
    }

    /// Create a passthrough rule
    pub fn passthrough(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            action: BlockAction::Passthrough,
        }
    }

    /// Check if the rule matches a URL
    pub fn matches(&self, url: &str) -> bool {
        url.contains(&self.pattern)
    }
}

/// Analytics endpoints blocked out of the box
pub fn default_block_rules() -> Vec<BlockRule> {
    vec![
        BlockRule::placeholder("mixpanel"),
        BlockRule::placeholder("cdn.segment.com"),
    ]
}

/// Response interceptor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterceptorConfig {
    /// Only intercept top-level document loads
    pub main_frame_only: bool,
    /// Literal after which the script is injected
    pub anchor: String,
    /// User agent for the secondary client
    pub user_agent: String,
    /// Fetch timeout in milliseconds
    pub timeout_ms: Option<u64>,
    /// Block list, first match wins
    pub block_rules: Vec<BlockRule>,
}

impl Default for InterceptorConfig {
    fn default() -> Self {
        Self {
            main_frame_only: true,
            anchor: DEFAULT_ANCHOR.to_string(),
            user_agent: String::new(),
            timeout_ms: None,
            block_rules: default_block_rules(),
        }
    }
}

impl InterceptorConfig {
    /// Create a new interceptor config
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict interception to the main frame
    pub fn main_frame_only(mut self, only: bool) -> Self {
        self.main_frame_only = only;
        self
    }

    /// Set anchor
    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Add a block rule
    pub fn block(mut self, rule: BlockRule) -> Self {
        self.block_rules.push(rule);
        self
    }

    /// Drop every block rule, including the defaults
    pub fn clear_block_rules(mut self) -> Self {
        self.block_rules.clear();
        self
    }

    /// Fetch timeout, if one is set
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// First block rule matching `url`
    pub fn match_rule(&self, url: &str) -> Option<&BlockRule> {
        self.block_rules.iter().find(|r| r.matches(url))
    }

    /// Settings for the secondary HTTP client
    pub fn page_source_config(&self) -> HttpPageSourceConfig {
        HttpPageSourceConfig {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout_duration(),
            ..Default::default()
        }
    }

    /// Check the configuration for values the interceptor cannot use
    pub fn validate(&self) -> Result<()> {
        if self.anchor.is_empty() {
            return Err(Error::config("anchor must not be empty"));
        }
        if let Some(rule) = self.block_rules.iter().find(|r| r.pattern.is_empty()) {
            return Err(Error::config(format!(
                "block rule with {:?} action has an empty pattern",
                rule.action
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .context(&format!("reading {}", path.display()))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = InterceptorConfig::default();
        assert!(config.main_frame_only);
        assert_eq!(config.anchor, "<head>");
        assert!(config.user_agent.is_empty());
        assert!(config.validate().is_ok());
        assert_eq!(
            config.match_rule("https://cdn.segment.com/analytics.js").map(|r| r.action),
            Some(BlockAction::Placeholder)
        );
        assert!(config.match_rule("https://example.com").is_none());
    }

    #[test]
    fn test_builder() {
        let config = InterceptorConfig::new()
            .main_frame_only(false)
            .anchor("<body>")
            .timeout(Duration::from_secs(5))
            .clear_block_rules()
            .block(BlockRule::passthrough("ads."));

        assert!(!config.main_frame_only);
        assert_eq!(config.timeout_duration(), Some(Duration::from_secs(5)));
        assert_eq!(config.block_rules.len(), 1);
        assert_eq!(config.page_source_config().timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_timeout_saturates() {
        let config = InterceptorConfig::new().timeout(Duration::MAX);
        assert_eq!(config.timeout_ms, Some(u64::MAX));
    }

    #[test]
    fn test_from_json_partial() {
        let config = InterceptorConfig::from_json(
            r#"{"anchor":"<body>","block_rules":[{"pattern":"tracker","action":"passthrough"}]}"#,
        )
        .unwrap();
        assert_eq!(config.anchor, "<body>");
        assert!(config.main_frame_only);
        assert_eq!(config.block_rules, vec![BlockRule::passthrough("tracker")]);
    }

    #[test]
    fn test_validate_rejects_empty_anchor() {
        assert!(matches!(
            InterceptorConfig::from_json(r#"{"anchor":""}"#),
            Err(Error::Config(_))
        ));
        assert!(InterceptorConfig::new()
            .block(BlockRule::placeholder(""))
            .validate()
            .is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"main_frame_only":false,"timeout_ms":2500}}"#).unwrap();

        let config = InterceptorConfig::from_file(file.path()).unwrap();
        assert!(!config.main_frame_only);
        assert_eq!(config.timeout_duration(), Some(Duration::from_millis(2500)));
        assert_eq!(config.block_rules, default_block_rules());
    }

    #[test]
    fn test_from_missing_file() {
        let err = InterceptorConfig::from_file("/nonexistent/bridge.json").unwrap_err();
        assert!(err.to_string().starts_with("reading /nonexistent/bridge.json"));
    }
}
