// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Group ranking: descending score, ties in first-encounter order.
//!
//! Ties are left to the sort's stability rather than broken by title or path.
//! Pages are visited in index order, which is the site's own navigation order,
//! and that's a better tiebreaker than the alphabet.

use crate::types::ResultGroup;
use std::cmp::Reverse;

/// Sort groups in place by descending score. Stable.
pub fn rank_groups(groups: &mut [ResultGroup]) {
    // Scores are sums over items; compute each once rather than per comparison.
    groups.sort_by_cached_key(|group| Reverse(group.score()));
}
