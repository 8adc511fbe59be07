//! Excerpt cutting on realistic documentation prose.
//!
//! The unit tests in `src/excerpt.rs` pin each budget rule on synthetic
//! strings; these check that the rules compose on sentences people write.

use docsift::{match_excerpt, rendered_len, DisplaySegment, EXCERPT_BUDGET};

fn text(s: &str) -> DisplaySegment {
    DisplaySegment::Text(s.to_string())
}

fn strong(s: &str) -> DisplaySegment {
    DisplaySegment::Strong(s.to_string())
}

// ============================================================================
// CONTEXT
// ============================================================================

#[test]
fn test_leading_context_is_trimmed_to_last_twenty_chars() {
    let segments = match_excerpt(
        "This paragraph is rather long before the keyword install appears.",
        "install",
    )
    .unwrap();
    // The kept window starts on a space, hence the double space after the marker.
    assert_eq!(
        segments,
        vec![text("…  before the keyword "), strong("install"), text(" appears.")]
    );
}

#[test]
fn test_short_sentence_ending_in_match() {
    let segments = match_excerpt("You need Node 18 or newer to install.", "install").unwrap();
    assert_eq!(
        segments,
        vec![text("… Node 18 or newer to "), strong("install"), text(".")]
    );
}

#[test]
fn test_two_matches_with_short_gap() {
    let segments =
        match_excerpt("Run npm install docsift to install the package.", "install").unwrap();
    assert_eq!(
        segments,
        vec![
            text("Run npm "),
            strong("install"),
            text(" docsift to "),
            strong("install"),
            text(" the package."),
        ]
    );
}

#[test]
fn test_two_matches_with_long_gap() {
    let segments = match_excerpt(
        "Install first. Then read twenty more words of filler text here before you install again.",
        "install",
    )
    .unwrap();
    assert_eq!(
        segments,
        vec![
            strong("Install"),
            text(" first. Then read tw … ext here before you "),
            strong("install"),
            text(" again."),
        ]
    );
}

// ============================================================================
// CASE FOLDING
// ============================================================================

#[test]
fn test_non_ascii_case_folding_keeps_original_case() {
    let segments = match_excerpt("Über alles, über allem", "ÜBER").unwrap();
    assert_eq!(
        segments,
        vec![strong("Über"), text(" alles, "), strong("über"), text(" allem")]
    );
}

#[test]
fn test_cjk_text_matches() {
    let segments = match_excerpt("运行安装程序并按照提示操作。", "安装").unwrap();
    assert_eq!(
        segments,
        vec![text("运行"), strong("安装"), text("程序并按照提示操作。")]
    );
}

// ============================================================================
// BUDGET
// ============================================================================

#[test]
fn test_dense_matches_stop_at_budget() {
    let haystack = "x".repeat(150);
    let segments = match_excerpt(&haystack, "x").unwrap();
    let highlights = segments.iter().filter(|s| s.is_strong()).count();
    assert_eq!(highlights, EXCERPT_BUDGET);
    assert_eq!(segments.last(), Some(&text(" …")));
    assert_eq!(rendered_len(&segments), EXCERPT_BUDGET + 2);
}

#[test]
fn test_long_tail_is_cut_with_marker() {
    let haystack = format!("Setup {}", "lorem ipsum dolor ".repeat(10));
    let segments = match_excerpt(&haystack, "setup").unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0], strong("Setup"));
    let tail = segments[1].text();
    assert!(tail.starts_with(" lorem ipsum dolor"));
    assert!(tail.ends_with("… "));
    assert_eq!(rendered_len(&segments), EXCERPT_BUDGET + 2);
}

#[test]
fn test_far_second_match_is_reached_through_gap_cut() {
    let haystack = format!("Setup {}setup", "lorem ipsum dolor ".repeat(10));
    let segments = match_excerpt(&haystack, "setup").unwrap();
    assert_eq!(
        segments,
        vec![
            strong("Setup"),
            text(" lorem ipsum dolor l … r lorem ipsum dolor "),
            strong("setup"),
        ]
    );
}

#[test]
fn test_every_excerpt_reproduces_source_when_short() {
    let sentence = "Check your network connection and install again.";
    let segments = match_excerpt(sentence, "network").unwrap();
    let joined: String = segments.iter().map(DisplaySegment::text).collect();
    assert_eq!(joined, sentence);
}
