pub mod text;


use scraper::{Html, Selector};

use crate::error::NavError;
use crate::nav::{ExpansionState, LinkRecord, NavigationSection, PageNav};

/// Extracts every navigation section from one page of HTML.
///
/// A navigation landmark is a `nav` element, or any element carrying
/// `role="navigation"`, that contains at least one anchor. Sections come
/// back in document order, and within each section the anchors come back in
/// document order. Nothing is deduplicated: the same href may legitimately
/// appear several times on one page.
pub fn extract_navigation(html: &str) -> Result<Vec<NavigationSection>, NavError> {
    let doc = parse_document(html)?;
    Ok(collect_sections(&doc))
}

/// Extracts navigation sections plus the page title for a fetched page.
pub fn extract_page(url: &str, html: &str) -> Result<PageNav, NavError> {
    let doc = parse_document(html)?;

    Ok(PageNav {
        url: url.to_string(),
        title: page_title(&doc),
        sections: collect_sections(&doc),
    })
}

/// Parses the retrieved text as an HTML document.
///
/// The parser recovers from malformed markup, so the only input it cannot
/// form a tree from is an empty one; that fails here instead of flowing on
/// to a silently empty result.
fn parse_document(html: &str) -> Result<Html, NavError> {
    if html.trim().is_empty() {
        return Err(NavError::Parse("empty document".to_string()));
    }
    Ok(Html::parse_document(html))
}

fn collect_sections(doc: &Html) -> Vec<NavigationSection> {
    // A single selector list keeps matches in document order, and an element
    // matching both forms is reported once.
    let landmark_selector = Selector::parse("nav, [role=\"navigation\"]").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let mut sections = Vec::new();
    for landmark in doc.select(&landmark_selector) {
        let links: Vec<LinkRecord> = landmark
            .select(&anchor_selector)
            .map(|anchor| LinkRecord {
                text: text::flatten(anchor),
                href: anchor.value().attr("href").map(str::to_string),
                expansion: ExpansionState::from_attr(anchor.value().attr("aria-expanded")),
            })
            .collect();

        // A landmark without anchors is not a navigation section
        if links.is_empty() {
            continue;
        }

        sections.push(NavigationSection {
            label: landmark.value().attr("aria-label").map(str::to_string),
            links,
        });
    }

    ::log::debug!("Extracted {} navigation sections", sections.len());
    if let Some(first) = sections.first() {
        ::log::debug!(
            "First section {:?} has {} links",
            first.label,
            first.links.len()
        );
    }

    sections
}

fn page_title(doc: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").unwrap();
    doc.select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}
