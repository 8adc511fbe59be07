//! Runtime contracts for the search core.
//!
//! Debug-mode assertions for the properties the rest of the crate promises.
//! They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure detection** in tests and debug builds
//! 3. **Stated once**, here, rather than re-derived at every call site
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract function          | Property                                              |
//! |----------------------------|-------------------------------------------------------|
//! | `check_excerpt`            | highlights match the query; length stays in budget    |
//! | `check_groups_ranked`      | groups sorted by descending score                     |
//! | `check_history_bounded`    | history never exceeds its capacity                    |
//! | `check_cursor_in_bounds`   | the cursor points at an item (or results are empty)   |
//!
//! The scoring hierarchy (title > heading > custom > content) is checked at
//! compile time in `scoring::core`.

use crate::excerpt::{rendered_len, CONTEXT_CHARS, EXCERPT_BUDGET, STOP_ELLIPSIS};
use crate::history::HISTORY_CAPACITY;
use crate::navigation::Navigator;
use crate::types::{DisplaySegment, ResultGroup};

/// Width of the leading `"… "` marker.
const LEADING_MARKER: usize = 2;

fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

// ============================================================================
// EXCERPT CONTRACTS
// ============================================================================

/// Check an excerpt produced for `query`.
///
/// - every `Strong` segment, folded, contains the folded query;
/// - no `Text` segment is empty;
/// - when the folded query fits the budget alongside a full leading context,
///   the rendered length is at most `EXCERPT_BUDGET + 2`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_excerpt(segments: &[DisplaySegment], query: &str) {
    let needle = fold(query);
    for segment in segments {
        match segment {
            DisplaySegment::Strong(text) => debug_assert!(
                fold(text).contains(&needle),
                "Contract violation: highlight '{}' does not match query '{}'",
                text,
                query
            ),
            DisplaySegment::Text(text) => debug_assert!(
                !text.is_empty(),
                "Contract violation: empty plain segment in excerpt"
            ),
        }
    }

    let needle_len = needle.chars().count();
    if needle_len + CONTEXT_CHARS + LEADING_MARKER <= EXCERPT_BUDGET {
        let len = rendered_len(segments);
        let cap = EXCERPT_BUDGET + STOP_ELLIPSIS.chars().count();
        debug_assert!(
            len <= cap,
            "Contract violation: excerpt length {} > {} for query '{}'",
            len,
            cap,
            query
        );
    }
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that groups are sorted by descending score.
#[inline]
pub fn check_groups_ranked(groups: &[ResultGroup]) {
    for (i, pair) in groups.windows(2).enumerate() {
        debug_assert!(
            pair[0].score() >= pair[1].score(),
            "Contract violation: groups[{}] score {} < groups[{}] score {}",
            i,
            pair[0].score(),
            i + 1,
            pair[1].score()
        );
    }
}

// ============================================================================
// INTERACTION CONTRACTS
// ============================================================================

/// Check that the history store respects its capacity.
#[inline]
pub fn check_history_bounded(len: usize) {
    debug_assert!(
        len <= HISTORY_CAPACITY,
        "Contract violation: history length {} > capacity {}",
        len,
        HISTORY_CAPACITY
    );
}

/// Check that the cursor points at an item, unless there are none.
#[inline]
pub fn check_cursor_in_bounds(navigator: &Navigator, groups: &[ResultGroup]) {
    let has_items = groups.iter().any(|group| !group.contents.is_empty());
    debug_assert!(
        !has_items || navigator.current(groups).is_some(),
        "Contract violation: cursor {:?} outside results of {} groups",
        navigator.position(),
        groups.len()
    );
}
