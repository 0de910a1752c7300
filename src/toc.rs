use std::collections::{HashSet, VecDeque};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::SiteConfig;
use crate::error::NavError;
use crate::extract;
use crate::fetch;
use crate::filter::UrlFilter;
use crate::nav::{ExpansionState, LinkRecord, NavigationSection};

/// Table of contents assembled by following a sidebar's collapsed entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toc {
    /// Accessible label of the sidebar the entries came from
    pub label: String,

    /// Merged entries in first-seen order
    pub entries: Vec<LinkRecord>,
}

/// Builds the table of contents for a configured site.
///
/// Fetches the start page, reads the named sidebar section (its absence
/// there is a contract violation), then follows collapsed toggle entries one
/// page at a time, re-reading the same section on each followed page and
/// merging what it reveals. Expansions are independent of each other, so
/// order is unimportant, but they are issued sequentially. Any fetch or
/// parse failure propagates; there is no partial result.
pub async fn build(client: &Client, config: &SiteConfig) -> Result<Toc, NavError> {
    let start = Url::parse(&config.start_url).map_err(|source| NavError::Url {
        url: config.start_url.clone(),
        source,
    })?;
    let filter = UrlFilter::for_site(
        &start,
        config.allow_external,
        config.include_patterns.clone(),
        config.exclude_patterns.clone(),
    )?;

    ::log::info!(
        "Building TOC for {} from section {:?}",
        config.start_url,
        config.nav_label
    );

    let mut visited: HashSet<Url> = HashSet::new();
    let mut queue: VecDeque<Url> = VecDeque::from([start]);
    let mut seen: HashSet<LinkRecord> = HashSet::new();
    let mut entries: Vec<LinkRecord> = Vec::new();
    let mut fetched = 0usize;
    let mut first_page = true;

    while let Some(page_url) = queue.pop_front() {
        if !visited.insert(filter.normalize(&page_url)) {
            continue;
        }
        if fetched >= config.max_pages {
            ::log::warn!(
                "Page budget of {} reached, stopping expansion early",
                config.max_pages
            );
            break;
        }
        fetched += 1;

        let html = fetch::fetch_html(client, page_url.as_str()).await?;
        let page = extract::extract_page(page_url.as_str(), &html)?;

        let section = if first_page {
            first_page = false;
            // Only the starting page is contractual
            page.require_section(&config.nav_label)?
        } else {
            match page.find_section(&config.nav_label) {
                Some(section) => section,
                None => {
                    ::log::warn!(
                        "Section {:?} not present on {}, skipping",
                        config.nav_label,
                        page_url
                    );
                    continue;
                }
            }
        };

        merge_section(section, &page_url, &filter, &mut seen, &mut entries, &mut queue);
        ::log::debug!("{} entries merged after {}", entries.len(), page_url);
    }

    ::log::info!(
        "TOC complete: {} entries from {} pages",
        entries.len(),
        fetched
    );

    Ok(Toc {
        label: config.nav_label.clone(),
        entries,
    })
}

/// Merges one page's reading of the section into the TOC and queues the
/// destinations of its collapsed toggles.
///
/// Extraction itself never dedups, but the same sidebar repeats on every
/// followed page, so the cross-page merge keeps one entry per
/// (text, href, expansion) identity, in first-seen order.
fn merge_section(
    section: &NavigationSection,
    page_url: &Url,
    filter: &UrlFilter,
    seen: &mut HashSet<LinkRecord>,
    entries: &mut Vec<LinkRecord>,
    queue: &mut VecDeque<Url>,
) {
    for link in &section.links {
        if seen.insert(link.clone()) {
            entries.push(link.clone());
        }

        if link.expansion != ExpansionState::Collapsed {
            continue;
        }
        let Some(href) = &link.href else {
            continue;
        };

        match page_url.join(href) {
            Ok(resolved) => {
                if filter.should_follow(&resolved) {
                    queue.push_back(filter.normalize(&resolved));
                }
            }
            Err(e) => {
                ::log::debug!("Could not resolve {:?} against {}: {}", href, page_url, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(text: &str, href: Option<&str>, expansion: ExpansionState) -> LinkRecord {
        LinkRecord {
            text: text.to_string(),
            href: href.map(str::to_string),
            expansion,
        }
    }

    fn merge_fixture(
        sections: &[NavigationSection],
        page_url: &str,
    ) -> (Vec<LinkRecord>, VecDeque<Url>) {
        let page_url = Url::parse(page_url).unwrap();
        let filter = UrlFilter::for_site(&page_url, false, Vec::new(), Vec::new()).unwrap();

        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        let mut queue = VecDeque::new();
        for section in sections {
            merge_section(section, &page_url, &filter, &mut seen, &mut entries, &mut queue);
        }
        (entries, queue)
    }

    #[test]
    fn test_merge_dedups_across_pages_in_first_seen_order() {
        let first = NavigationSection {
            label: Some("Docs sidebar".to_string()),
            links: vec![
                link("Motivation", Some("/motivation"), ExpansionState::NotApplicable),
                link("Usage", Some("/pnpm-cli"), ExpansionState::Collapsed),
            ],
        };
        // The followed page repeats the sidebar with the toggle now open
        let second = NavigationSection {
            label: Some("Docs sidebar".to_string()),
            links: vec![
                link("Motivation", Some("/motivation"), ExpansionState::NotApplicable),
                link("Usage", Some("/pnpm-cli"), ExpansionState::Expanded),
                link("Filtering", Some("/filtering"), ExpansionState::NotApplicable),
            ],
        };

        let (entries, _) = merge_fixture(&[first, second], "https://pnpm.io/motivation");
        let texts: Vec<&str> = entries.iter().map(|l| l.text.as_str()).collect();

        // "Usage" appears twice: collapsed and expanded are different
        // sightings, and only the exact repeat of "Motivation" collapses
        assert_eq!(texts, vec!["Motivation", "Usage", "Usage", "Filtering"]);
    }

    #[test]
    fn test_merge_queues_only_collapsed_destinations() {
        let section = NavigationSection {
            label: Some("Docs sidebar".to_string()),
            links: vec![
                link("Motivation", Some("/motivation"), ExpansionState::NotApplicable),
                link("Usage", Some("/pnpm-cli"), ExpansionState::Collapsed),
                link("Open", Some("/open"), ExpansionState::Expanded),
                link("No destination", None, ExpansionState::Collapsed),
            ],
        };

        let (_, queue) = merge_fixture(&[section], "https://pnpm.io/motivation");
        let queued: Vec<&str> = queue.iter().map(Url::as_str).collect();
        assert_eq!(queued, vec!["https://pnpm.io/pnpm-cli"]);
    }

    #[test]
    fn test_merge_respects_filter_for_external_destinations() {
        let section = NavigationSection {
            label: Some("Docs sidebar".to_string()),
            links: vec![link(
                "Sponsor",
                Some("https://opencollective.com/pnpm"),
                ExpansionState::Collapsed,
            )],
        };

        let (entries, queue) = merge_fixture(&[section], "https://pnpm.io/motivation");
        // Recorded in the TOC, but never followed
        assert_eq!(entries.len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_merge_normalizes_fragment_destinations() {
        let section = NavigationSection {
            label: Some("Docs sidebar".to_string()),
            links: vec![link(
                "Deep link",
                Some("/motivation#saving-disk-space"),
                ExpansionState::Collapsed,
            )],
        };

        let (_, queue) = merge_fixture(&[section], "https://pnpm.io/installation");
        let queued: Vec<&str> = queue.iter().map(Url::as_str).collect();
        assert_eq!(queued, vec!["https://pnpm.io/motivation"]);
    }
}
