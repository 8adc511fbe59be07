// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighted excerpts: find the query in a field and cut a readable snippet.
//!
//! A search result row has room for about a hundred characters. The matcher
//! walks every non-overlapping occurrence of the query left to right and
//! spends that budget like this:
//!
//! ```text
//!  "… " + last 20 chars    [Match]   first 20 " … " last 20   [Match]   tail…
//!  └── leading context ──┘          └──── gap context ──────┘          └─ rest of budget
//! ```
//!
//! - Leading context longer than 20 characters keeps only its last 20.
//! - Gaps longer than 40 characters keep 20 on each side of an ellipsis.
//! - Highlights are atomic. If the next gap plus highlight doesn't fit, we stop
//!   and append `" …"` rather than emit half a match.
//! - Whatever budget is left goes to the text after the last match.
//!
//! Lengths are counted in Unicode scalar values, markers included. The first
//! match is always emitted, so a query longer than the budget still produces a
//! (long) excerpt. Everything else stays within `EXCERPT_BUDGET + 2`.
//!
//! Matching is case-insensitive via Unicode lowercase folding. Folding can
//! change length (`İ` lowercases to two scalars), so we match on the folded
//! text and map positions back to the original characters. Highlights always
//! carry the original casing.

use crate::types::DisplaySegment;

/// Soft cap on rendered characters per excerpt.
pub const EXCERPT_BUDGET: usize = 100;

/// Characters of context kept on each side of an elided span.
pub const CONTEXT_CHARS: usize = 20;

/// Gaps between matches longer than this get cut in the middle.
pub const GAP_LIMIT: usize = 2 * CONTEXT_CHARS;

const LEADING_ELLIPSIS: &str = "… ";
const GAP_ELLIPSIS: &str = " … ";
const TAIL_ELLIPSIS: &str = "… ";
/// Appended when the budget runs out before the text does.
pub const STOP_ELLIPSIS: &str = " …";

/// Find `query` in `text` and build a highlighted excerpt.
///
/// Returns `None` when the query doesn't occur (case-insensitively), or when
/// the query is empty.
///
/// # Example
///
/// ```
/// use docsift::{match_excerpt, DisplaySegment};
///
/// let segments = match_excerpt("Run the Installer", "install").unwrap();
/// assert_eq!(
///     segments,
///     vec![
///         DisplaySegment::Text("Run the ".to_string()),
///         DisplaySegment::Strong("Install".to_string()),
///         DisplaySegment::Text("er".to_string()),
///     ]
/// );
/// ```
pub fn match_excerpt(text: &str, query: &str) -> Option<Vec<DisplaySegment>> {
    let chars: Vec<char> = text.chars().collect();
    let occurrences = find_occurrences(&chars, query);
    if occurrences.is_empty() {
        return None;
    }

    let mut excerpt = Excerpt::default();
    let mut cursor = 0;
    let mut exhausted = false;

    for (i, &(start, end)) in occurrences.iter().enumerate() {
        let before = &chars[cursor..start];
        let context = if i == 0 {
            leading_context(before)
        } else {
            gap_context(before)
        };

        // Highlights are never split: stop before one that would overrun.
        let cost = context.chars().count() + (end - start);
        if i > 0 && excerpt.len + cost > EXCERPT_BUDGET {
            excerpt.push_text(STOP_ELLIPSIS.to_string());
            exhausted = true;
            break;
        }

        excerpt.push_text(context);
        excerpt.push_strong(chars[start..end].iter().collect());
        cursor = end;

        if excerpt.len >= EXCERPT_BUDGET {
            if cursor < chars.len() {
                excerpt.push_text(STOP_ELLIPSIS.to_string());
            }
            exhausted = true;
            break;
        }
    }

    if !exhausted {
        let tail = &chars[cursor..];
        let room = EXCERPT_BUDGET - excerpt.len;
        if tail.len() > room {
            let cut: String = tail[..room].iter().collect();
            excerpt.push_text(format!("{}{}", cut, TAIL_ELLIPSIS));
        } else {
            excerpt.push_text(tail.iter().collect());
        }
    }

    Some(excerpt.segments)
}

/// Char ranges `[start, end)` of every non-overlapping case-insensitive
/// occurrence of `query` in `chars`, left to right.
fn find_occurrences(chars: &[char], query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // Folded haystack plus, for each folded char, the original char it came from.
    let mut folded = Vec::with_capacity(chars.len());
    let mut origin = Vec::with_capacity(chars.len());
    for (i, c) in chars.iter().enumerate() {
        for lower in c.to_lowercase() {
            folded.push(lower);
            origin.push(i);
        }
    }

    let mut found = Vec::new();
    let mut pos = 0;
    let mut last_end = 0;
    while pos + needle.len() <= folded.len() {
        if folded[pos..pos + needle.len()] == needle[..] {
            let start = origin[pos];
            let end = origin[pos + needle.len() - 1] + 1;
            // A match ending inside an expanded char can't share it with the next one.
            if start >= last_end {
                found.push((start, end));
                last_end = end;
            }
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    found
}

fn leading_context(before: &[char]) -> String {
    if before.len() > CONTEXT_CHARS {
        let kept: String = before[before.len() - CONTEXT_CHARS..].iter().collect();
        format!("{}{}", LEADING_ELLIPSIS, kept)
    } else {
        before.iter().collect()
    }
}

fn gap_context(gap: &[char]) -> String {
    if gap.len() > GAP_LIMIT {
        let head: String = gap[..CONTEXT_CHARS].iter().collect();
        let tail: String = gap[gap.len() - CONTEXT_CHARS..].iter().collect();
        format!("{}{}{}", head, GAP_ELLIPSIS, tail)
    } else {
        gap.iter().collect()
    }
}

/// Segment accumulator that tracks the rendered length.
#[derive(Default)]
struct Excerpt {
    segments: Vec<DisplaySegment>,
    len: usize,
}

impl Excerpt {
    fn push_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        self.len += text.chars().count();
        self.segments.push(DisplaySegment::Text(text));
    }

    fn push_strong(&mut self, text: String) {
        self.len += text.chars().count();
        self.segments.push(DisplaySegment::Strong(text));
    }
}

/// Total rendered length of an excerpt, markers included.
pub fn rendered_len(segments: &[DisplaySegment]) -> usize {
    segments.iter().map(DisplaySegment::char_len).sum()
}
