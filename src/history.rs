// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recently selected results.
//!
//! A tiny most-recent-first list: selecting an item puts it at the front,
//! and the sixth selection pushes the oldest one out. Duplicates are kept.
//! Selecting the same page twice shows it twice, same as the widget it
//! replaces.
//!
//! The store never touches storage. Hosts that want history to survive a
//! reload serialize [`HistoryStore::snapshot`] under [`HISTORY_STORAGE_KEY`]
//! and feed it back through [`HistoryStore::restore`].
//!
//! # Invariants
//!
//! - `len() <= HISTORY_CAPACITY`, always, including after `restore`.
//! - `list()[0]` is the most recent selection.

use std::cell::RefCell;
use std::rc::Rc;

use crate::contracts::check_history_bounded;
use crate::types::MatchItem;

/// Entries kept before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 5;

/// Storage key hosts persist snapshots under.
pub const HISTORY_STORAGE_KEY: &str = "search-pro-history-results";

/// The capability a widget needs from a history store.
pub trait History {
    fn add(&mut self, item: MatchItem);
    /// Out-of-range indices are ignored.
    fn remove(&mut self, index: usize);
    fn list(&self) -> Vec<MatchItem>;
    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<MatchItem>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a persisted snapshot, keeping its first
    /// `HISTORY_CAPACITY` entries.
    pub fn restore(mut entries: Vec<MatchItem>) -> Self {
        entries.truncate(HISTORY_CAPACITY);
        Self { entries }
    }

    /// Entries most-recent-first, ready to serialize.
    pub fn snapshot(&self) -> Vec<MatchItem> {
        self.entries.clone()
    }

    pub fn entries(&self) -> &[MatchItem] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MatchItem> {
        self.entries.get(index)
    }
}

impl History for HistoryStore {
    fn add(&mut self, item: MatchItem) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop();
        }
        self.entries.insert(0, item);
        check_history_bounded(self.entries.len());
    }

    fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    fn list(&self) -> Vec<MatchItem> {
        self.snapshot()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One store shared by every widget on the UI thread.
///
/// Clones point at the same store.
#[derive(Debug, Clone, Default)]
pub struct SharedHistory(Rc<RefCell<HistoryStore>>);

impl SharedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_store(store: HistoryStore) -> Self {
        Self(Rc::new(RefCell::new(store)))
    }

    pub fn snapshot(&self) -> Vec<MatchItem> {
        self.0.borrow().snapshot()
    }
}

impl History for SharedHistory {
    fn add(&mut self, item: MatchItem) {
        self.0.borrow_mut().add(item);
    }

    fn remove(&mut self, index: usize) {
        self.0.borrow_mut().remove(index);
    }

    fn list(&self) -> Vec<MatchItem> {
        self.0.borrow().list()
    }

    fn is_empty(&self) -> bool {
        History::is_empty(&*self.0.borrow())
    }
}
