// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Group building: where the rubber meets the road.
//!
//! Everything culminates here. For every page we try the title, then each
//! custom field value, then each section header and paragraph, and we file
//! every hit under the page's breadcrumb. Once every page is visited the
//! buckets are ranked by score.
//!
//! ```text
//! Index ──▶ for each page ──▶ match_excerpt(field, query) ──▶ bucket[breadcrumb]
//!                                                                   │
//!                                         rank_groups (score desc) ◀┘
//! ```
//!
//! Pages that share a breadcrumb share a bucket. That's rare (two pages with
//! the same title under the same parent) but it's what the site generator's
//! own widget does, so we keep it.

pub mod breadcrumb;

use std::collections::HashMap;

use crate::contracts::{check_excerpt, check_groups_ranked};
use crate::excerpt::match_excerpt;
use crate::scoring::ranking::rank_groups;
use crate::types::{Index, MatchItem, ResultGroup};

pub use breadcrumb::{breadcrumb, parent_path, BREADCRUMB_SEPARATOR};

/// Find every hit of `query` in `index` and return ranked result groups.
///
/// An empty query, an empty index or a query that matches nothing all yield
/// an empty list.
///
/// # Example
///
/// ```
/// use docsift::{build_groups, Index, MatchKind, PageEntry, Section};
///
/// let mut index = Index::new();
/// index.insert("/a/", PageEntry {
///     title: "Setup Guide".to_string(),
///     custom_fields: Default::default(),
///     contents: vec![Section {
///         header: "Install".to_string(),
///         slug: Some("install".to_string()),
///         contents: vec!["Run the installer and follow prompts.".to_string()],
///     }],
/// });
///
/// let groups = build_groups("install", &index);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].title, "Setup Guide");
/// assert_eq!(groups[0].score(), 21);
/// assert_eq!(groups[0].contents[0].kind, MatchKind::Heading);
/// assert_eq!(groups[0].contents[1].path, "/a/#install");
/// ```
pub fn build_groups(query: &str, index: &Index) -> Vec<ResultGroup> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut buckets = Buckets::default();

    for (path, page) in index.iter() {
        let crumb = breadcrumb(path, page, index);

        if let Some(display) = match_excerpt(&page.title, query) {
            buckets.push(&crumb, MatchItem::title(path, display));
        }

        for (&field, values) in &page.custom_fields {
            for value in values {
                if let Some(display) = match_excerpt(value, query) {
                    buckets.push(&crumb, MatchItem::custom(path, field, display));
                }
            }
        }

        for section in &page.contents {
            let anchor = section.anchor(path);

            if let Some(display) = match_excerpt(&section.header, query) {
                buckets.push(&crumb, MatchItem::heading(anchor.as_str(), display));
            }

            for paragraph in &section.contents {
                if let Some(display) = match_excerpt(paragraph, query) {
                    buckets.push(
                        &crumb,
                        MatchItem::content(anchor.as_str(), section.header.as_str(), display),
                    );
                }
            }
        }
    }

    let mut groups = buckets.into_groups();
    rank_groups(&mut groups);

    if cfg!(debug_assertions) {
        for item in groups.iter().flat_map(|group| &group.contents) {
            check_excerpt(&item.display, query);
        }
    }
    check_groups_ranked(&groups);

    groups
}

/// Breadcrumb-keyed buckets that remember first-encounter order.
#[derive(Default)]
struct Buckets {
    groups: Vec<ResultGroup>,
    positions: HashMap<String, usize>,
}

impl Buckets {
    fn push(&mut self, crumb: &str, item: MatchItem) {
        match self.positions.get(crumb) {
            Some(&pos) => self.groups[pos].contents.push(item),
            None => {
                self.positions.insert(crumb.to_string(), self.groups.len());
                self.groups.push(ResultGroup {
                    title: crumb.to_string(),
                    contents: vec![item],
                });
            }
        }
    }

    fn into_groups(self) -> Vec<ResultGroup> {
        self.groups
    }
}
