// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query and locale in, ranked groups out, at most once per quiet period.
//!
//! ```text
//! set_query ─┐
//!            ├─► Debouncer ──(poll: due)──► build_groups ──► results, generation += 1
//! set_locale ┘
//! ```
//!
//! Typing "install" fires seven `set_query` calls but only one match, 300 ms
//! after the last key. Consumers compare [`QueryPipeline::generation`] to
//! tell whether a fresh result set has landed since they last looked.
//!
//! Matching itself is synchronous and can't be interrupted; the debounce is
//! what keeps it off the hot path.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::DEFAULT_DEBOUNCE_MS;
use crate::debounce::Debouncer;
use crate::search::build_groups;
use crate::types::{Index, ResultGroup};

#[derive(Debug)]
pub struct QueryPipeline {
    catalog: Arc<Catalog>,
    locale: String,
    /// Cached lookup of `locale` in the catalog. `None` until the next
    /// recompute after a locale change.
    index: Option<Arc<Index>>,
    query: String,
    debouncer: Debouncer<()>,
    results: Vec<ResultGroup>,
    generation: u64,
}

impl QueryPipeline {
    pub fn new(catalog: Arc<Catalog>, locale: impl Into<String>) -> Self {
        Self::with_delay(catalog, locale, Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }

    pub fn with_delay(catalog: Arc<Catalog>, locale: impl Into<String>, delay: Duration) -> Self {
        Self {
            catalog,
            locale: locale.into(),
            index: None,
            query: String::new(),
            debouncer: Debouncer::new(delay),
            results: Vec::new(),
            generation: 0,
        }
    }

    /// Record a new query and restart the quiet period.
    pub fn set_query(&mut self, query: impl Into<String>, now: Duration) {
        self.query = query.into();
        self.debouncer.call((), now);
    }

    /// Switch locale. The index is looked up again on the next recompute.
    pub fn set_locale(&mut self, locale: impl Into<String>, now: Duration) {
        let locale = locale.into();
        if locale != self.locale {
            self.locale = locale;
            self.index = None;
        }
        self.debouncer.call((), now);
    }

    /// Recompute if the quiet period is over. Returns whether new results
    /// were published.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.debouncer.poll(now).is_some() {
            self.recompute();
            true
        } else {
            false
        }
    }

    /// Recompute now if anything is pending, skipping the rest of the wait.
    pub fn flush(&mut self) -> bool {
        if self.debouncer.flush().is_some() {
            self.recompute();
            true
        } else {
            false
        }
    }

    /// Drop the pending recompute and publish an empty result set now.
    pub fn clear(&mut self) {
        self.debouncer.cancel();
        self.query.clear();
        self.publish(Vec::new());
    }

    fn recompute(&mut self) {
        if self.index.is_none() {
            self.index = self.catalog.index(&self.locale);
            if self.index.is_none() {
                tracing::warn!(
                    locale = %self.locale,
                    available = ?self.catalog.locales().collect::<Vec<_>>(),
                    "no index for locale"
                );
            }
        }

        let groups = match &self.index {
            Some(index) if !self.query.is_empty() => build_groups(&self.query, index),
            _ => Vec::new(),
        };
        tracing::debug!(
            query = %self.query,
            locale = %self.locale,
            groups = groups.len(),
            "recomputed results"
        );
        self.publish(groups);
    }

    fn publish(&mut self, groups: Vec<ResultGroup>) {
        self.results = groups;
        self.generation += 1;
    }

    pub fn results(&self) -> &[ResultGroup] {
        &self.results
    }

    /// Bumped on every published result set, even an identical one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// When the host should poll next.
    pub fn deadline(&self) -> Option<Duration> {
        self.debouncer.deadline()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}
