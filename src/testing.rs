//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{DisplaySegment, MatchItem, MatchKind, PageEntry, ResultGroup, Section};
use crate::widget::NavigationSink;

/// Create a page with a title and sections, no custom fields.
pub fn make_page(title: &str, sections: Vec<Section>) -> PageEntry {
    PageEntry {
        title: title.to_string(),
        custom_fields: Default::default(),
        contents: sections,
    }
}

/// Create a section from a header, optional slug and paragraphs.
pub fn make_section(header: &str, slug: Option<&str>, paragraphs: &[&str]) -> Section {
    Section {
        header: header.to_string(),
        slug: slug.map(str::to_string),
        contents: paragraphs.iter().map(|p| p.to_string()).collect(),
    }
}

/// Create a match item whose excerpt is a single highlight.
pub fn make_item(kind: MatchKind, path: &str) -> MatchItem {
    MatchItem {
        kind,
        path: path.to_string(),
        header: None,
        index: None,
        display: vec![DisplaySegment::Strong(path.to_string())],
    }
}

/// Create a group of `size` content items under `/{title}/`.
pub fn make_group(title: &str, size: usize) -> ResultGroup {
    ResultGroup {
        title: title.to_string(),
        contents: (0..size)
            .map(|i| make_item(MatchKind::Content, &format!("/{}/#{}", title, i)))
            .collect(),
    }
}

/// Create groups with the given sizes, titled `g0`, `g1`, ...
pub fn make_groups(sizes: &[usize]) -> Vec<ResultGroup> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| make_group(&format!("g{}", i), size))
        .collect()
}

/// Navigation sink that records every path it's sent to.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub paths: Vec<String>,
}

impl NavigationSink for RecordingSink {
    fn navigate(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }
}
