// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search session.
//!
//! Everything the matcher reads (index, pages, sections) and everything it
//! produces (match items, display segments, result groups) lives here. The
//! input side mirrors the JSON the static site generator writes, so the field
//! names are camelCase on the wire and missing optional fields decode as empty.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Index**: iteration order is the order pages appeared in the source JSON.
//!   Group ties are broken by first encounter, so a `HashMap` here would make
//!   result order depend on the hasher seed. Don't.
//!
//! - **DisplaySegment::Strong**: always carries the original-case text of one
//!   whole occurrence. Highlights are never split across segments.
//!
//! - **ResultGroup**: `contents` is never empty. Groups only exist because
//!   something matched.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::scoring::group_score;

/// Key of a custom field (category, tag, ...). Labels are looked up by it.
pub type FieldIndex = u32;

/// Label shown for groups whose breadcrumb came out empty.
pub const UNTITLED_GROUP: &str = "Documentation";

// =============================================================================
// INPUT: what the site generator hands us
// =============================================================================

/// A heading and the body paragraphs beneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub header: String,
    /// Anchor id; `None` for sections without a linkable heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Plain-text paragraphs, in page order.
    #[serde(default)]
    pub contents: Vec<String>,
}

impl Section {
    /// Navigable anchor for this section on the page at `path`.
    pub fn anchor(&self, path: &str) -> String {
        match &self.slug {
            Some(slug) => format!("{}#{}", path, slug),
            None => path.to_string(),
        }
    }
}

/// One document in the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
    #[serde(default)]
    pub title: String,
    /// Frontmatter-derived fields keyed by field index, e.g. 0 = category, 1 = tag.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_fields: BTreeMap<FieldIndex, Vec<String>>,
    #[serde(default)]
    pub contents: Vec<Section>,
}

/// Document path → page entry, in source order.
///
/// Behaves like a JavaScript object: inserting an existing key replaces the
/// value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    pages: Vec<(String, PageEntry)>,
    positions: HashMap<String, usize>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, page: PageEntry) {
        let path = path.into();
        match self.positions.get(&path) {
            Some(&pos) => self.pages[pos].1 = page,
            None => {
                self.positions.insert(path.clone(), self.pages.len());
                self.pages.push((path, page));
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&PageEntry> {
        self.positions.get(path).map(|&pos| &self.pages[pos].1)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.positions.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageEntry)> {
        self.pages.iter().map(|(path, page)| (path.as_str(), page))
    }
}

impl<P: Into<String>> FromIterator<(P, PageEntry)> for Index {
    fn from_iter<I: IntoIterator<Item = (P, PageEntry)>>(iter: I) -> Self {
        let mut index = Index::new();
        for (path, page) in iter {
            index.insert(path, page);
        }
        index
    }
}

impl Serialize for Index {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pages.len()))?;
        for (path, page) in &self.pages {
            map.serialize_entry(path, page)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Index {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IndexVisitor;

        impl<'de> Visitor<'de> for IndexVisitor {
            type Value = Index;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from document path to page entry")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Index, M::Error> {
                let mut index = Index::new();
                while let Some((path, page)) = access.next_entry::<String, PageEntry>()? {
                    index.insert(path, page);
                }
                Ok(index)
            }
        }

        deserializer.deserialize_map(IndexVisitor)
    }
}

// =============================================================================
// OUTPUT: what a query produces
// =============================================================================

/// Where a match landed.
///
/// Declaration order follows the weight order (title heaviest), so the derived
/// `Ord` sorts the most important kinds first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Title,
    Heading,
    Custom,
    Content,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Title => "title",
            MatchKind::Heading => "heading",
            MatchKind::Custom => "custom",
            MatchKind::Content => "content",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One piece of a rendered excerpt.
///
/// On the wire a plain fragment is a bare string and a highlight is the pair
/// `["strong", text]`, which is what the browser renderer expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplaySegment {
    Text(String),
    Strong(String),
}

impl DisplaySegment {
    pub fn text(&self) -> &str {
        match self {
            DisplaySegment::Text(s) | DisplaySegment::Strong(s) => s,
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, DisplaySegment::Strong(_))
    }

    /// Length in Unicode scalar values, the unit of the excerpt budget.
    pub fn char_len(&self) -> usize {
        self.text().chars().count()
    }
}

const STRONG_TAG: &str = "strong";

impl Serialize for DisplaySegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DisplaySegment::Text(text) => serializer.serialize_str(text),
            DisplaySegment::Strong(text) => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(STRONG_TAG)?;
                pair.serialize_element(text)?;
                pair.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for DisplaySegment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Tagged(String, String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(text) => Ok(DisplaySegment::Text(text)),
            Repr::Tagged(tag, text) if tag == STRONG_TAG => Ok(DisplaySegment::Strong(text)),
            Repr::Tagged(tag, _) => Err(de::Error::custom(format!(
                "unknown display tag '{}', expected '{}'",
                tag, STRONG_TAG
            ))),
        }
    }
}

/// A single hit inside a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchItem {
    #[serde(rename = "type")]
    pub kind: MatchKind,
    /// Page path, plus `#slug` for heading and content hits.
    pub path: String,
    /// Enclosing section header (content hits only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Custom field index (custom hits only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<FieldIndex>,
    pub display: Vec<DisplaySegment>,
}

impl MatchItem {
    pub fn title(path: impl Into<String>, display: Vec<DisplaySegment>) -> Self {
        Self {
            kind: MatchKind::Title,
            path: path.into(),
            header: None,
            index: None,
            display,
        }
    }

    pub fn heading(path: impl Into<String>, display: Vec<DisplaySegment>) -> Self {
        Self {
            kind: MatchKind::Heading,
            path: path.into(),
            header: None,
            index: None,
            display,
        }
    }

    pub fn content(
        path: impl Into<String>,
        header: impl Into<String>,
        display: Vec<DisplaySegment>,
    ) -> Self {
        Self {
            kind: MatchKind::Content,
            path: path.into(),
            header: Some(header.into()),
            index: None,
            display,
        }
    }

    pub fn custom(path: impl Into<String>, index: FieldIndex, display: Vec<DisplaySegment>) -> Self {
        Self {
            kind: MatchKind::Custom,
            path: path.into(),
            header: None,
            index: Some(index),
            display,
        }
    }

    /// The excerpt with highlight markers dropped.
    pub fn plain_text(&self) -> String {
        self.display.iter().map(DisplaySegment::text).collect()
    }
}

/// All hits for one breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultGroup {
    /// `"Parent > Title"`, the bare title, or empty.
    pub title: String,
    pub contents: Vec<MatchItem>,
}

impl ResultGroup {
    pub fn score(&self) -> u32 {
        group_score(&self.contents)
    }

    /// Title to show, falling back to [`UNTITLED_GROUP`] for empty breadcrumbs.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_GROUP
        } else {
            &self.title
        }
    }
}
