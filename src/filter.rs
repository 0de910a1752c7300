use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Asset destinations that are never documentation pages
const DEFAULT_EXCLUDES: &str = r"\.(jpg|jpeg|png|gif|css|js|ico|svg|woff|woff2|ttf|eot|pdf)$";

/// Rules deciding which sidebar destinations are worth fetching when
/// expanding collapsed sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Whether destinations on other domains may be followed
    #[serde(default)]
    pub allow_external: bool,

    /// Domain the walk is confined to (ignored when allow_external is set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_domain: Option<String>,

    /// Path prefix the destination must live under, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_path_prefix: Option<String>,

    /// Regex patterns a destination must match (empty: everything matches)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns that reject a destination; these win over includes
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            allow_external: false,
            required_domain: None,
            required_path_prefix: None,
            include_patterns: Vec::new(),
            exclude_patterns: vec![DEFAULT_EXCLUDES.to_string()],
        }
    }
}

/// Compiled destination filter for the expansion walk.
#[derive(Debug)]
pub struct UrlFilter {
    config: FilterConfig,
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl UrlFilter {
    /// Compile a filter from configuration.
    pub fn new(config: FilterConfig) -> Result<Self, regex::Error> {
        let include_regexes = compile(&config.include_patterns)?;
        let exclude_regexes = compile(&config.exclude_patterns)?;

        Ok(Self {
            config,
            include_regexes,
            exclude_regexes,
        })
    }

    /// Build the filter for a site rooted at `root`: confined to the root's
    /// domain unless external destinations are allowed, with the default
    /// asset excludes ahead of any user patterns.
    pub fn for_site(
        root: &Url,
        allow_external: bool,
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
    ) -> Result<Self, regex::Error> {
        let mut excludes = vec![DEFAULT_EXCLUDES.to_string()];
        excludes.extend(exclude_patterns);

        Self::new(FilterConfig {
            allow_external,
            required_domain: if allow_external {
                None
            } else {
                root.domain().map(str::to_string)
            },
            required_path_prefix: None,
            include_patterns,
            exclude_patterns: excludes,
        })
    }

    /// Decide whether a resolved destination should be fetched.
    pub fn should_follow(&self, url: &Url) -> bool {
        if !self.in_domain_scope(url) {
            ::log::debug!("Rejecting {} (outside domain scope)", url);
            return false;
        }

        if let Some(prefix) = &self.config.required_path_prefix {
            if !url.path().starts_with(prefix.as_str()) {
                ::log::debug!("Rejecting {} (outside path scope)", url);
                return false;
            }
        }

        let url_str = url.as_str();
        if self.exclude_regexes.iter().any(|re| re.is_match(url_str)) {
            ::log::debug!("Rejecting {} (exclude pattern)", url);
            return false;
        }

        if !self.include_regexes.is_empty()
            && !self.include_regexes.iter().any(|re| re.is_match(url_str))
        {
            ::log::debug!("Rejecting {} (no include pattern matched)", url);
            return false;
        }

        true
    }

    /// Normalized form used for visited-set bookkeeping: the same page
    /// reached with and without a fragment is one page.
    pub fn normalize(&self, url: &Url) -> Url {
        let mut normalized = url.clone();
        normalized.set_fragment(None);
        normalized
    }

    fn in_domain_scope(&self, url: &Url) -> bool {
        if self.config.allow_external {
            return true;
        }

        match (&self.config.required_domain, url.domain()) {
            (Some(required), Some(domain)) => domain == required,
            // A required domain but none in the URL, or no scope at all
            (Some(_), None) => false,
            (None, _) => false,
        }
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>, regex::Error> {
    patterns.iter().map(|pattern| Regex::new(pattern)).collect()
}
