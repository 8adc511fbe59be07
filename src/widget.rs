// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interactive search box, minus the pixels.
//!
//! [`SearchWidget`] owns everything a search popup needs between key presses:
//! the debounced pipeline, the cursor, the label templates and the active
//! locale's strings. History is injected, so several widgets on one page can
//! share a [`SharedHistory`](crate::history::SharedHistory).
//!
//! The host drives it:
//!
//! ```text
//! input event  ──▶ set_query(q, now)
//! timer / rAF  ──▶ poll(now)            (true = new results, redraw)
//! keydown      ──▶ handle_key(key, sink)
//! click        ──▶ select(g, i, sink) / select_history(i, sink)
//! redraw       ──▶ view(), render_item(item)
//! ```
//!
//! Navigation leaves the crate through [`NavigationSink`]; the widget never
//! knows what a router is.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::contracts::check_cursor_in_bounds;
use crate::history::History;
use crate::locale::{resolve_locale, LocaleStrings, Locales, ROOT_LOCALE};
use crate::navigation::Navigator;
use crate::pipeline::QueryPipeline;
use crate::render::{render_item, CustomFieldLabels};
use crate::types::{DisplaySegment, MatchItem, ResultGroup};

/// Where confirmed selections go.
pub trait NavigationSink {
    fn navigate(&mut self, path: &str);
}

impl<F: FnMut(&str)> NavigationSink for F {
    fn navigate(&mut self, path: &str) {
        self(path)
    }
}

/// Keys the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "Enter" => Some(Key::Enter),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// What the popup body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetView<'a> {
    /// No query yet: recent selections, most recent first.
    History(Vec<MatchItem>),
    /// No query and nothing in history.
    EmptyHistory(&'a str),
    Results(&'a [ResultGroup]),
    /// A query that matched nothing.
    EmptyResults(&'a str),
}

pub struct SearchWidget<H: History> {
    pipeline: QueryPipeline,
    navigator: Navigator,
    history: H,
    locales: Locales,
    labels: CustomFieldLabels,
    /// Route the user is on; confirming an item here is a no-op.
    current_path: String,
    open: bool,
}

impl<H: History> SearchWidget<H> {
    pub fn new(catalog: Arc<Catalog>, history: H, config: SearchConfig) -> Self {
        let debounce = config.debounce();
        Self {
            pipeline: QueryPipeline::with_delay(catalog, ROOT_LOCALE, debounce),
            navigator: Navigator::new(),
            history,
            locales: config.locales,
            labels: config.custom_fields,
            current_path: ROOT_LOCALE.to_string(),
            open: false,
        }
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    /// Record a keystroke's worth of query. Results follow on a later `poll`.
    pub fn set_query(&mut self, query: impl Into<String>, now: Duration) {
        self.open = true;
        self.pipeline.set_query(query, now);
    }

    pub fn set_locale(&mut self, locale: impl Into<String>, now: Duration) {
        self.pipeline.set_locale(locale, now);
    }

    /// Tell the widget which page the user is on. Also picks the locale
    /// whose key prefixes the path.
    pub fn set_route(&mut self, path: impl Into<String>, now: Duration) {
        self.current_path = path.into();
        let locale = resolve_locale(&self.current_path, self.pipeline.catalog().locales())
            .map(str::to_string);
        if let Some(locale) = locale {
            if locale != self.pipeline.locale() {
                self.set_locale(locale, now);
            }
        }
    }

    /// Publish results if the quiet period is over. A new result set puts the
    /// cursor back on the first item.
    pub fn poll(&mut self, now: Duration) -> bool {
        let published = self.pipeline.poll(now);
        if published {
            self.navigator.reset();
            check_cursor_in_bounds(&self.navigator, self.pipeline.results());
        }
        published
    }

    /// Like [`SearchWidget::poll`], without waiting out the quiet period.
    pub fn flush(&mut self) -> bool {
        let published = self.pipeline.flush();
        if published {
            self.navigator.reset();
        }
        published
    }

    /// Returns whether the key did anything. Arrows and Enter are ignored
    /// while there are no results; Escape always dismisses.
    pub fn handle_key(&mut self, key: Key, sink: &mut impl NavigationSink) -> bool {
        if key == Key::Escape {
            self.dismiss();
            return true;
        }
        if self.pipeline.results().is_empty() {
            return false;
        }
        match key {
            Key::ArrowUp => self.navigator.prev(self.pipeline.results()),
            Key::ArrowDown => self.navigator.next(self.pipeline.results()),
            Key::Enter => return self.confirm(sink),
            Key::Escape => {}
        }
        true
    }

    /// Go to the item under the cursor, unless it's the page we're on.
    fn confirm(&mut self, sink: &mut impl NavigationSink) -> bool {
        let Some(item) = self.navigator.current(self.pipeline.results()).cloned() else {
            return false;
        };
        if item.path == self.current_path {
            return false;
        }
        self.go(item, sink, true);
        true
    }

    /// Pointer selection of a result. No same-page check: a click on a link
    /// to the current page is still a click.
    pub fn select(&mut self, group: usize, item: usize, sink: &mut impl NavigationSink) -> bool {
        let Some(item) = self
            .pipeline
            .results()
            .get(group)
            .and_then(|g| g.contents.get(item))
            .cloned()
        else {
            return false;
        };
        self.go(item, sink, true);
        true
    }

    /// Pointer selection of a history entry.
    pub fn select_history(&mut self, index: usize, sink: &mut impl NavigationSink) -> bool {
        let Some(item) = self.history.list().into_iter().nth(index) else {
            return false;
        };
        self.go(item, sink, false);
        true
    }

    pub fn remove_history(&mut self, index: usize) {
        self.history.remove(index);
    }

    fn go(&mut self, item: MatchItem, sink: &mut impl NavigationSink, remember: bool) {
        tracing::debug!(path = %item.path, kind = %item.kind, "navigating to result");
        sink.navigate(&item.path);
        if remember {
            self.history.add(item);
        }
        self.dismiss();
    }

    /// Reset the cursor, clear the query, close.
    pub fn dismiss(&mut self) {
        self.navigator.reset();
        self.pipeline.clear();
        self.open = false;
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    pub fn view(&self) -> WidgetView<'_> {
        let strings = self.strings();
        if self.pipeline.query().is_empty() {
            let entries = self.history.list();
            if entries.is_empty() {
                WidgetView::EmptyHistory(&strings.empty_history)
            } else {
                WidgetView::History(entries)
            }
        } else if self.pipeline.results().is_empty() {
            WidgetView::EmptyResults(&strings.empty_result)
        } else {
            WidgetView::Results(self.pipeline.results())
        }
    }

    /// The "empty" styling flag: with no query it tracks history, otherwise
    /// results.
    pub fn is_empty(&self) -> bool {
        if self.pipeline.query().is_empty() {
            self.history.is_empty()
        } else {
            self.pipeline.results().is_empty()
        }
    }

    /// Display segments for `item`, with custom-field labels applied.
    pub fn render_item(&self, item: &MatchItem) -> Vec<DisplaySegment> {
        render_item(item, &self.labels, self.pipeline.locale())
    }

    pub fn strings(&self) -> &LocaleStrings {
        self.locales.get(self.pipeline.locale())
    }

    pub fn results(&self) -> &[ResultGroup] {
        self.pipeline.results()
    }

    pub fn active_item(&self) -> Option<&MatchItem> {
        self.navigator.current(self.pipeline.results())
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.navigator.position()
    }

    pub fn query(&self) -> &str {
        self.pipeline.query()
    }

    pub fn locale(&self) -> &str {
        self.pipeline.locale()
    }

    pub fn generation(&self) -> u64 {
        self.pipeline.generation()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.pipeline.deadline()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn history(&self) -> &H {
        &self.history
    }
}
