// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random interaction sequences against the widget.
//!
//! Typing, arrow keys, clicks on stale indices, history removal and locale
//! switches in any order. The cursor must always land on a real item and
//! history must never outgrow its cap.

#![no_main]

use arbitrary::Arbitrary;
use docsift::{
    Catalog, History, Key, SearchConfig, SearchWidget, SharedHistory, HISTORY_CAPACITY,
};
use libfuzzer_sys::fuzz_target;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

const SITE: &str = r#"{
    "/": {
        "/": {"title": "Home", "contents": [{"header": "", "contents": ["Welcome to the docs."]}]},
        "/guide/": {"title": "Guide", "customFields": {"0": ["Guide"]},
            "contents": [{"header": "Getting Started", "slug": "start", "contents": ["Install the CLI."]}]},
        "/guide/install.html": {"title": "Installation", "customFields": {"1": ["setup"]},
            "contents": [{"header": "Install with npm", "slug": "npm", "contents": ["npm install docsift"]}]}
    },
    "/zh/": {
        "/zh/": {"title": "首页", "contents": [{"header": "安装", "slug": "install", "contents": ["运行安装程序。"]}]}
    }
}"#;

#[derive(Arbitrary, Debug)]
enum Action {
    Type(String),
    Key(u8),
    Select(u8, u8),
    SelectHistory(u8),
    RemoveHistory(u8),
    Route(bool),
    Tick(u16),
}

fuzz_target!(|actions: Vec<Action>| {
    static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();
    let catalog = CATALOG.get_or_init(|| Arc::new(Catalog::from_json(SITE).expect("site parses")));

    let mut widget = SearchWidget::new(Arc::clone(catalog), SharedHistory::new(), SearchConfig::default());
    let mut sink = |_: &str| {};
    let mut now = Duration::ZERO;

    for action in actions.into_iter().take(200) {
        match action {
            Action::Type(query) => widget.set_query(query.chars().take(32).collect::<String>(), now),
            Action::Key(k) => {
                let key = [Key::ArrowUp, Key::ArrowDown, Key::Enter, Key::Escape][k as usize % 4];
                widget.handle_key(key, &mut sink);
            }
            Action::Select(g, i) => {
                widget.select(g as usize, i as usize, &mut sink);
            }
            Action::SelectHistory(i) => {
                widget.select_history(i as usize, &mut sink);
            }
            Action::RemoveHistory(i) => widget.remove_history(i as usize),
            Action::Route(zh) => widget.set_route(if zh { "/zh/" } else { "/guide/" }, now),
            Action::Tick(ms) => {
                now += Duration::from_millis(ms as u64);
                widget.poll(now);
            }
        }

        // INVARIANT 1: cursor is on an item whenever there are results
        if !widget.results().is_empty() {
            assert!(widget.active_item().is_some(), "cursor {:?} off the list", widget.cursor());
        }

        // INVARIANT 2: history stays bounded
        assert!(widget.history().list().len() <= HISTORY_CAPACITY);
    }
});
