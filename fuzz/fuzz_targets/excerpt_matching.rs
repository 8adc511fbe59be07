// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpt matching under adversarial text.
//!
//! Case folding is where the bodies are buried: `İ` lowercases to two
//! scalars, `ẞ` to one, and combining marks ride along with their base. The
//! matcher works on folded text and maps positions back, so any off-by-one in
//! that mapping shows up here as a panic or a highlight that isn't the query.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use docsift::{match_excerpt, rendered_len, EXCERPT_BUDGET};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    query: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    // Cap lengths to keep iterations fast
    let text: String = input.text.chars().take(2_000).collect();
    let query: String = input.query.chars().take(64).collect();

    let Some(segments) = match_excerpt(&text, &query) else {
        return;
    };

    // INVARIANT 1: a match means at least one highlight
    assert!(segments.iter().any(|s| s.is_strong()), "excerpt without highlight");

    // INVARIANT 2: every highlight folds to something containing the folded query
    let needle: String = query.chars().flat_map(char::to_lowercase).collect();
    for segment in segments.iter().filter(|s| s.is_strong()) {
        let folded: String = segment.text().chars().flat_map(char::to_lowercase).collect();
        assert!(
            folded.contains(&needle),
            "highlight {:?} does not contain query {:?}",
            segment.text(),
            query
        );
    }

    // INVARIANT 3: short queries stay within budget plus the stop marker
    if needle.chars().count() + 22 <= EXCERPT_BUDGET {
        assert!(
            rendered_len(&segments) <= EXCERPT_BUDGET + 2,
            "excerpt of {} chars for query {:?}",
            rendered_len(&segments),
            query
        );
    }
});
