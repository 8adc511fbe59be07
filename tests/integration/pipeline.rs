//! The debounced query pipeline against the fixture catalog.

use super::common::{fixture_catalog, ms, titles};
use docsift::QueryPipeline;

#[test]
fn test_typing_burst_recomputes_once() {
    let mut pipeline = QueryPipeline::new(fixture_catalog(), "/");
    pipeline.set_query("i", ms(0));
    pipeline.set_query("ins", ms(100));
    pipeline.set_query("install", ms(200));

    assert!(!pipeline.poll(ms(299)));
    assert!(!pipeline.poll(ms(499)));
    assert_eq!(pipeline.generation(), 0);

    assert!(pipeline.poll(ms(500)));
    assert_eq!(pipeline.generation(), 1);
    assert_eq!(pipeline.results()[0].title, "Guide > Installation");

    // nothing pending any more
    assert!(!pipeline.poll(ms(10_000)));
    assert_eq!(pipeline.generation(), 1);
}

#[test]
fn test_deadline_tracks_last_keystroke() {
    let mut pipeline = QueryPipeline::new(fixture_catalog(), "/");
    assert_eq!(pipeline.deadline(), None);
    pipeline.set_query("gu", ms(1_000));
    pipeline.set_query("guide", ms(1_250));
    assert_eq!(pipeline.deadline(), Some(ms(1_550)));
    assert!(pipeline.is_pending());
}

#[test]
fn test_locale_switch_uses_other_index() {
    let mut pipeline = QueryPipeline::new(fixture_catalog(), "/");
    pipeline.set_query("安装", ms(0));
    assert!(pipeline.flush());
    assert!(pipeline.results().is_empty());

    pipeline.set_locale("/zh/", ms(10));
    assert!(pipeline.flush());
    assert_eq!(titles(pipeline.results()), vec!["首页 > 指南"]);
}

#[test]
fn test_unknown_locale_yields_no_results() {
    let mut pipeline = QueryPipeline::new(fixture_catalog(), "/fr/");
    pipeline.set_query("install", ms(0));
    assert!(pipeline.flush());
    assert!(pipeline.results().is_empty());
}

#[test]
fn test_clear_drops_pending_and_publishes_empty() {
    let mut pipeline = QueryPipeline::new(fixture_catalog(), "/");
    pipeline.set_query("install", ms(0));
    pipeline.flush();
    let before = pipeline.generation();

    pipeline.set_query("guide", ms(50));
    pipeline.clear();
    assert_eq!(pipeline.query(), "");
    assert!(pipeline.results().is_empty());
    assert_eq!(pipeline.generation(), before + 1);
    assert!(!pipeline.poll(ms(1_000)));
}
