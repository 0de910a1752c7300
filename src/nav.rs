use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Whether an anchor acts as a disclosure toggle for a collapsible submenu,
/// and if so whether that submenu is currently shown.
///
/// A toggle that is closed (`Collapsed`) and an anchor that is not a toggle
/// at all (`NotApplicable`) are different states and are kept distinct
/// everywhere, including serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpansionState {
    /// The anchor toggles a submenu that is currently shown.
    Expanded,
    /// The anchor toggles a submenu that is currently hidden.
    Collapsed,
    /// The anchor is not a disclosure toggle.
    NotApplicable,
}

impl ExpansionState {
    /// Maps the literal value of the `aria-expanded` attribute.
    ///
    /// `"true"` and `"false"` are the only literals the attribute is
    /// expected to carry; anything else is reported and treated as a
    /// non-toggle.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("true") => ExpansionState::Expanded,
            Some("false") => ExpansionState::Collapsed,
            None => ExpansionState::NotApplicable,
            Some(other) => {
                ::log::warn!(
                    "Unexpected aria-expanded value {:?}, treating anchor as a non-toggle",
                    other
                );
                ExpansionState::NotApplicable
            }
        }
    }
}

/// One anchor found inside a navigation landmark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Flattened visible text of the anchor and its descendants.
    pub text: String,

    /// The literal destination attribute value, verbatim (no normalization),
    /// if the anchor has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Disclosure-toggle state of the anchor.
    pub expansion: ExpansionState,
}

/// A navigation landmark and the anchors it contains, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSection {
    /// Accessible label of the landmark, if it carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Anchors inside the landmark, in document order. The same href may
    /// legitimately appear more than once.
    pub links: Vec<LinkRecord>,
}

impl NavigationSection {
    /// Iterate over links in a given expansion state.
    pub fn with_state(&self, state: ExpansionState) -> impl Iterator<Item = &LinkRecord> {
        self.links.iter().filter(move |link| link.expansion == state)
    }

    /// Links that are currently-closed disclosure toggles.
    pub fn collapsed(&self) -> impl Iterator<Item = &LinkRecord> {
        self.with_state(ExpansionState::Collapsed)
    }
}

/// Extraction result for one fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNav {
    /// URL the page was fetched from.
    pub url: String,

    /// Page title, if the document has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Navigation sections of the page, in document order.
    pub sections: Vec<NavigationSection>,
}

impl PageNav {
    /// Look up a section by accessible label.
    pub fn find_section(&self, label: &str) -> Option<&NavigationSection> {
        self.sections
            .iter()
            .find(|section| section.label.as_deref() == Some(label))
    }

    /// Look up a section by accessible label, failing loudly if absent.
    pub fn require_section(&self, label: &str) -> Result<&NavigationSection, NavError> {
        self.find_section(label)
            .ok_or_else(|| NavError::MissingSection(label.to_string()))
    }
}
