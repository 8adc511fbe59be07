// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The weights behind group ranking.
//!
//! | Kind    | Weight | Why this value |
//! |---------|--------|----------------|
//! | Title   | 50     | One title hit beats up to 49 body hits |
//! | Heading | 20     | A section named after the query is nearly as good |
//! | Custom  | 10     | Category/tag hits: relevant but coarse |
//! | Content | 1      | Baseline, only adds up in bulk |
//!
//! Group score is the plain sum over its items. Changing these changes result
//! order for every site using the widget, so the compile-time check below keeps
//! at least the hierarchy honest.

use crate::types::{MatchItem, MatchKind};

pub const TITLE_WEIGHT: u32 = 50;
pub const HEADING_WEIGHT: u32 = 20;
pub const CUSTOM_WEIGHT: u32 = 10;
pub const CONTENT_WEIGHT: u32 = 1;

// INVARIANT: title > heading > custom > content
const _: () = {
    assert!(TITLE_WEIGHT > HEADING_WEIGHT);
    assert!(HEADING_WEIGHT > CUSTOM_WEIGHT);
    assert!(CUSTOM_WEIGHT > CONTENT_WEIGHT);
};

/// Weight contributed by a single hit of this kind.
pub fn kind_weight(kind: MatchKind) -> u32 {
    match kind {
        MatchKind::Title => TITLE_WEIGHT,
        MatchKind::Heading => HEADING_WEIGHT,
        MatchKind::Custom => CUSTOM_WEIGHT,
        MatchKind::Content => CONTENT_WEIGHT,
    }
}

/// Relevance of a group: sum of its items' weights.
pub fn group_score(items: &[MatchItem]) -> u32 {
    items.iter().map(|item| kind_weight(item.kind)).sum()
}
