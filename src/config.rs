use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::NavError;

/// Configuration for extracting a documentation site's navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Page to start from
    pub start_url: String,

    /// Accessible label of the sidebar section the site keeps its document
    /// navigation in (e.g. "Docs sidebar")
    pub nav_label: String,

    /// Whether expansion may follow destinations on other domains
    #[serde(default)]
    pub allow_external: bool,

    /// Regex patterns for destinations to follow
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for destinations to skip
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upper bound on pages fetched while expanding collapsed sections
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

/// Default value for user_agent
fn default_user_agent() -> String {
    concat!("sitenav/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Default value for max_pages
fn default_max_pages() -> usize {
    200
}

impl SiteConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str, nav_label: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            nav_label: nav_label.to_string(),
            allow_external: false,
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            user_agent: default_user_agent(),
            max_pages: default_max_pages(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, NavError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let config: SiteConfig = serde_json::from_str(
            r#"{"start_url": "https://pnpm.io/motivation", "nav_label": "Docs sidebar"}"#,
        )
        .unwrap();

        assert_eq!(config.start_url, "https://pnpm.io/motivation");
        assert_eq!(config.nav_label, "Docs sidebar");
        assert!(!config.allow_external);
        assert!(config.include_patterns.is_empty());
        assert_eq!(config.max_pages, 200);
        assert!(config.user_agent.starts_with("sitenav/"));
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let result: Result<SiteConfig, _> =
            serde_json::from_str(r#"{"start_url": "https://pnpm.io/"}"#);
        assert!(result.is_err());
    }
}
