// Re-export modules
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod nav;
pub mod toc;

// Re-export commonly used types for convenience
pub use error::NavError;
pub use nav::{ExpansionState, LinkRecord, NavigationSection, PageNav};
pub use toc::Toc;

use std::path::Path;

use reqwest::Client;

use crate::config::SiteConfig;

/// Entry point for reading a documentation site's navigation.
///
/// Wraps one HTTP client and one configuration; pages are fetched, parsed
/// and extracted on demand, with no state shared between extractions.
pub struct Site {
    config: SiteConfig,
    client: Client,
}

impl Site {
    /// Create a site rooted at the given page, reading the section with the
    /// given accessible label.
    pub fn new(start_url: &str, nav_label: &str) -> Self {
        Self::with_config(SiteConfig::new(start_url, nav_label))
    }

    /// Create a site from a full configuration.
    pub fn with_config(config: SiteConfig) -> Self {
        let client = fetch::build_client(&config.user_agent);
        Self { config, client }
    }

    /// Create a site from a JSON configuration file.
    pub fn with_config_file<P: AsRef<Path>>(path: P) -> Result<Self, NavError> {
        Ok(Self::with_config(SiteConfig::from_file(path)?))
    }

    /// Allow the expansion walk to follow destinations on other domains.
    pub fn with_allow_external(mut self, allow: bool) -> Self {
        self.config.allow_external = allow;
        self
    }

    /// Cap the number of pages the expansion walk may fetch.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    /// Fetch one page and extract its navigation sections.
    pub async fn page(&self, url: &str) -> Result<PageNav, NavError> {
        let html = fetch::fetch_html(&self.client, url).await?;
        extract::extract_page(url, &html)
    }

    /// Fetch and extract the configured start page.
    pub async fn start_page(&self) -> Result<PageNav, NavError> {
        self.page(&self.config.start_url).await
    }

    /// Assemble the table of contents by following collapsed entries of the
    /// configured section, one page at a time.
    pub async fn toc(&self) -> Result<Toc, NavError> {
        toc::build(&self.client, &self.config).await
    }
}
