// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Breadcrumb titles: "Parent > Page".
//!
//! The parent of a page is its path with the last segment removed, keeping the
//! trailing slash so it lines up with how directory index pages are keyed:
//!
//! | Path                 | Parent       |
//! |----------------------|--------------|
//! | `/guide/install.html`| `/guide/`    |
//! | `/guide/advanced/`   | `/guide/`    |
//! | `/guide/`            | `/`          |
//! | `/`                  | (none)       |

use crate::types::{Index, PageEntry};

pub const BREADCRUMB_SEPARATOR: &str = " > ";

/// Path of the page one level up, or `None` for the root (or a path with no slash).
pub fn parent_path(path: &str) -> Option<&str> {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    let cut = trimmed.rfind('/')?;
    Some(&path[..=cut])
}

/// Group title for `page` at `path`.
///
/// Prefixed with the parent page's title when the parent is in the index and
/// has one. Can be empty for untitled pages without a titled parent.
pub fn breadcrumb(path: &str, page: &PageEntry, index: &Index) -> String {
    let parent_title = parent_path(path)
        .filter(|parent| *parent != path)
        .and_then(|parent| index.get(parent))
        .map(|parent| parent.title.as_str())
        .unwrap_or("");

    if parent_title.is_empty() {
        page.title.clone()
    } else {
        format!("{}{}{}", parent_title, BREADCRUMB_SEPARATOR, page.title)
    }
}
