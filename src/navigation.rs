// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The keyboard cursor over a grouped result list.
//!
//! The cursor walks items in reading order: down through a group, then on to
//! the first item of the next group, and from the last item of the last group
//! back to the very first. Up is the mirror image.
//!
//! The result list can change under the cursor (a new query lands between two
//! key presses), so every move clamps first. The cursor itself never holds a
//! reference into the results.

use crate::types::{MatchItem, ResultGroup};

/// `(group, item)` position in a result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    group: usize,
    item: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first item.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn position(&self) -> (usize, usize) {
        (self.group, self.item)
    }

    /// Pull the cursor inside `groups`. On an empty list it goes to `(0, 0)`.
    pub fn clamp(&mut self, groups: &[ResultGroup]) {
        let Some(last_group) = groups.len().checked_sub(1) else {
            self.reset();
            return;
        };
        self.group = self.group.min(last_group);
        let last_item = groups[self.group].contents.len().saturating_sub(1);
        self.item = self.item.min(last_item);
    }

    /// Move down one item, wrapping.
    pub fn next(&mut self, groups: &[ResultGroup]) {
        if groups.is_empty() {
            return;
        }
        self.clamp(groups);
        if self.item + 1 < groups[self.group].contents.len() {
            self.item += 1;
        } else {
            self.group = (self.group + 1) % groups.len();
            self.item = 0;
        }
    }

    /// Move up one item, wrapping.
    pub fn prev(&mut self, groups: &[ResultGroup]) {
        if groups.is_empty() {
            return;
        }
        self.clamp(groups);
        if self.item > 0 {
            self.item -= 1;
        } else {
            self.group = self.group.checked_sub(1).unwrap_or(groups.len() - 1);
            self.item = groups[self.group].contents.len().saturating_sub(1);
        }
    }

    /// The item under the cursor, if the cursor is inside `groups`.
    pub fn current<'a>(&self, groups: &'a [ResultGroup]) -> Option<&'a MatchItem> {
        groups.get(self.group)?.contents.get(self.item)
    }
}
