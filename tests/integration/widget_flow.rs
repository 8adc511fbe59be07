//! The search widget from keystroke to navigation on the fixture site.

use super::common::{fixture_catalog, ms, RecordingSink};
use docsift::{
    DisplaySegment, History, Key, MatchKind, SearchConfig, SearchWidget, SharedHistory,
    WidgetView, HISTORY_CAPACITY,
};

fn widget() -> SearchWidget<SharedHistory> {
    SearchWidget::new(fixture_catalog(), SharedHistory::new(), SearchConfig::default())
}

/// Type `query` and let the quiet period run out.
fn search(widget: &mut SearchWidget<SharedHistory>, query: &str) {
    widget.set_query(query, ms(0));
    assert!(widget.poll(ms(300)));
}

fn active_path(widget: &SearchWidget<SharedHistory>) -> Option<String> {
    widget.active_item().map(|item| item.path.clone())
}

// ============================================================================
// VIEWS
// ============================================================================

#[test]
fn test_fresh_widget_shows_empty_history() {
    let widget = widget();
    assert_eq!(widget.view(), WidgetView::EmptyHistory("Empty Search History"));
    assert!(widget.is_empty());
    assert!(!widget.is_open());
}

#[test]
fn test_results_appear_after_quiet_period() {
    let mut widget = widget();
    widget.set_query("install", ms(0));
    assert!(widget.is_open());
    assert!(!widget.poll(ms(299)));
    // Query typed, nothing computed yet.
    assert_eq!(widget.view(), WidgetView::EmptyResults("No results found"));

    assert!(widget.poll(ms(300)));
    let WidgetView::Results(groups) = widget.view() else {
        panic!("expected results");
    };
    assert_eq!(groups.len(), 4);
    assert!(!widget.is_empty());
}

#[test]
fn test_no_match_shows_empty_results() {
    let mut widget = widget();
    search(&mut widget, "kubernetes");
    assert_eq!(widget.view(), WidgetView::EmptyResults("No results found"));
    assert!(widget.is_empty());
}

// ============================================================================
// KEYBOARD
// ============================================================================

#[test]
fn test_arrow_down_then_enter_navigates() {
    let mut widget = widget();
    let mut sink = RecordingSink::default();
    search(&mut widget, "install");
    assert_eq!(active_path(&widget).as_deref(), Some("/guide/install.html"));

    assert!(widget.handle_key(Key::ArrowDown, &mut sink));
    assert_eq!(widget.cursor(), (0, 1));
    assert!(widget.handle_key(Key::Enter, &mut sink));

    assert_eq!(sink.paths, vec!["/guide/install.html#requirements"]);
    assert_eq!(widget.query(), "");
    assert!(!widget.is_open());
    assert_eq!(widget.cursor(), (0, 0));

    let WidgetView::History(entries) = widget.view() else {
        panic!("expected history");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, MatchKind::Content);
}

#[test]
fn test_arrow_up_from_top_wraps_to_last_item() {
    let mut widget = widget();
    let mut sink = RecordingSink::default();
    search(&mut widget, "install");
    widget.handle_key(Key::ArrowUp, &mut sink);
    assert_eq!(widget.cursor(), (3, 0));
    assert_eq!(active_path(&widget).as_deref(), Some("/guide/config.html#options"));
    assert!(sink.paths.is_empty());
}

#[test]
fn test_enter_on_current_page_does_nothing() {
    let mut widget = widget();
    let mut sink = RecordingSink::default();
    widget.set_route("/guide/install.html", ms(0));
    search(&mut widget, "install");

    assert!(!widget.handle_key(Key::Enter, &mut sink));
    assert!(sink.paths.is_empty());
    assert!(widget.is_open());
    assert_eq!(widget.query(), "install");
    assert!(widget.history().is_empty());
}

#[test]
fn test_keys_without_results() {
    let mut widget = widget();
    let mut sink = RecordingSink::default();
    assert!(!widget.handle_key(Key::ArrowDown, &mut sink));
    assert!(!widget.handle_key(Key::Enter, &mut sink));
    assert!(sink.paths.is_empty());

    widget.set_query("install", ms(0));
    assert!(widget.handle_key(Key::Escape, &mut sink));
    assert!(!widget.is_open());
    // The pending recompute was dropped with the query.
    assert_eq!(widget.deadline(), None);
    assert!(!widget.poll(ms(1_000)));
}

#[test]
fn test_new_results_reset_cursor() {
    let mut widget = widget();
    let mut sink = RecordingSink::default();
    search(&mut widget, "install");
    widget.handle_key(Key::ArrowDown, &mut sink);
    widget.handle_key(Key::ArrowDown, &mut sink);
    assert_eq!(widget.cursor(), (0, 2));

    widget.set_query("guide", ms(1_000));
    assert!(widget.poll(ms(1_300)));
    assert_eq!(widget.cursor(), (0, 0));
    assert_eq!(active_path(&widget).as_deref(), Some("/guide/"));
}

// ============================================================================
// POINTER AND HISTORY
// ============================================================================

#[test]
fn test_click_selects_without_same_page_check() {
    let mut widget = widget();
    let mut sink = RecordingSink::default();
    widget.set_route("/faq/", ms(0));
    search(&mut widget, "install");

    assert!(widget.select(1, 0, &mut sink));
    assert_eq!(sink.paths, vec!["/faq/#install-fail"]);
    assert_eq!(widget.history().snapshot().len(), 1);
    assert!(!widget.select(9, 0, &mut sink));
}

#[test]
fn test_history_keeps_five_most_recent() {
    let mut widget = widget();
    let mut sink = RecordingSink::default();
    for i in 0..(HISTORY_CAPACITY + 2) {
        search(&mut widget, "install");
        widget.select(0, i % 5, &mut sink);
    }
    let entries = widget.history().snapshot();
    assert_eq!(entries.len(), HISTORY_CAPACITY);
    // last pick was item 6 % 5 = 1
    assert_eq!(entries[0].path, "/guide/install.html#requirements");
    assert_eq!(sink.paths.len(), HISTORY_CAPACITY + 2);
}

#[test]
fn test_history_selection_does_not_readd() {
    let mut widget = widget();
    let mut sink = RecordingSink::default();
    search(&mut widget, "faq");
    widget.select(0, 0, &mut sink);
    search(&mut widget, "config");
    widget.select(0, 0, &mut sink);

    assert!(widget.select_history(1, &mut sink));
    assert_eq!(sink.paths.last().map(String::as_str), Some("/faq/"));
    let paths: Vec<_> = widget.history().snapshot().into_iter().map(|e| e.path).collect();
    assert_eq!(paths, vec!["/guide/config.html", "/faq/"]);

    widget.remove_history(0);
    assert_eq!(widget.history().snapshot().len(), 1);
    assert!(!widget.select_history(5, &mut sink));
}

#[test]
fn test_widgets_share_history() {
    let shared = SharedHistory::new();
    let mut header = SearchWidget::new(fixture_catalog(), shared.clone(), SearchConfig::default());
    let sidebar = SearchWidget::new(fixture_catalog(), shared.clone(), SearchConfig::default());
    let mut sink = RecordingSink::default();

    header.set_query("faq", ms(0));
    header.flush();
    header.select(0, 0, &mut sink);

    assert!(!sidebar.is_empty());
    let WidgetView::History(entries) = sidebar.view() else {
        panic!("expected history");
    };
    assert_eq!(entries[0].path, "/faq/");
    assert_eq!(shared.list().len(), 1);
}

// ============================================================================
// LOCALES AND LABELS
// ============================================================================

#[test]
fn test_route_picks_locale_and_strings() {
    let mut widget = widget();
    widget.set_route("/zh/guide/", ms(0));
    assert_eq!(widget.locale(), "/zh/");
    assert_eq!(widget.strings().empty_history, "无搜索历史");

    search(&mut widget, "指南");
    let custom = widget
        .results()
        .iter()
        .flat_map(|g| &g.contents)
        .find(|item| item.kind == MatchKind::Custom)
        .cloned()
        .expect("category hit");
    assert_eq!(
        widget.render_item(&custom),
        vec![
            DisplaySegment::Text("分类：".to_string()),
            DisplaySegment::Strong("指南".to_string()),
        ]
    );
}

#[test]
fn test_tag_label_in_english() {
    let mut widget = widget();
    search(&mut widget, "cli");
    let custom = widget
        .results()
        .iter()
        .flat_map(|g| &g.contents)
        .find(|item| item.kind == MatchKind::Custom)
        .cloned()
        .expect("tag hit");
    assert_eq!(
        widget.render_item(&custom),
        vec![
            DisplaySegment::Text("Tag: ".to_string()),
            DisplaySegment::Strong("cli".to_string()),
        ]
    );
}

#[test]
fn test_configured_debounce() {
    let config = SearchConfig {
        debounce_ms: 50,
        ..SearchConfig::default()
    };
    let mut widget = SearchWidget::new(fixture_catalog(), SharedHistory::new(), config);
    widget.set_query("guide", ms(0));
    assert_eq!(widget.deadline(), Some(ms(50)));
    assert!(widget.poll(ms(50)));
}
