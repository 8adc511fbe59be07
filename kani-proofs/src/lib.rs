// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for docsift's cursor and history arithmetic.
//!
//! This standalone crate extracts the index math behind keyboard navigation
//! and the bounded history list, and proves it over every input Kani can
//! construct. Groups are modeled by their sizes only; the items themselves
//! don't matter to the arithmetic.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **In bounds**: `next`/`prev` from any clamped position land on a real item
//! 2. **Inverse**: `prev(next(p)) == p` and `next(prev(p)) == p`
//! 3. **Bounded history**: adding never grows the list past `HISTORY_CAPACITY`

/// Most recent selections kept.
pub const HISTORY_CAPACITY: usize = 5;

// ============================================================================
// CURSOR (mirrors src/navigation.rs)
// ============================================================================

/// Cursor position: (group, item).
pub type Position = (usize, usize);

/// Pull `pos` inside the groups. Empty lists clamp to `(0, 0)`.
pub fn clamp(sizes: &[usize], pos: Position) -> Position {
    let Some(last_group) = sizes.len().checked_sub(1) else {
        return (0, 0);
    };
    let group = pos.0.min(last_group);
    let item = pos.1.min(sizes[group].saturating_sub(1));
    (group, item)
}

/// Move down one item, wrapping.
pub fn next(sizes: &[usize], pos: Position) -> Position {
    if sizes.is_empty() {
        return pos;
    }
    let (group, item) = clamp(sizes, pos);
    if item + 1 < sizes[group] {
        (group, item + 1)
    } else {
        ((group + 1) % sizes.len(), 0)
    }
}

/// Move up one item, wrapping.
pub fn prev(sizes: &[usize], pos: Position) -> Position {
    if sizes.is_empty() {
        return pos;
    }
    let (group, item) = clamp(sizes, pos);
    if item > 0 {
        (group, item - 1)
    } else {
        let group = group.checked_sub(1).unwrap_or(sizes.len() - 1);
        (group, sizes[group].saturating_sub(1))
    }
}

pub fn in_bounds(sizes: &[usize], pos: Position) -> bool {
    pos.0 < sizes.len() && pos.1 < sizes[pos.0]
}

// ============================================================================
// HISTORY (mirrors src/history.rs)
// ============================================================================

/// Length of the history list after one `add`.
pub fn len_after_add(len: usize) -> usize {
    if len == HISTORY_CAPACITY {
        len
    } else {
        len + 1
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Up to four non-empty groups of up to four items each.
    fn any_sizes() -> ([usize; 4], usize) {
        let count: usize = kani::any_where(|&n| n >= 1 && n <= 4);
        let mut sizes = [1usize; 4];
        for size in sizes.iter_mut().take(count) {
            *size = kani::any_where(|&n: &usize| n >= 1 && n <= 4);
        }
        (sizes, count)
    }

    /// Any position inside the groups.
    fn any_position(sizes: &[usize]) -> Position {
        let group: usize = kani::any_where(|&g| g < sizes.len());
        let item: usize = kani::any_where(|&i| i < sizes[group]);
        (group, item)
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_next_stays_in_bounds() {
        let (sizes, count) = any_sizes();
        let sizes = &sizes[..count];
        let pos = any_position(sizes);
        kani::assert(in_bounds(sizes, next(sizes, pos)), "next left the list");
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_prev_stays_in_bounds() {
        let (sizes, count) = any_sizes();
        let sizes = &sizes[..count];
        let pos = any_position(sizes);
        kani::assert(in_bounds(sizes, prev(sizes, pos)), "prev left the list");
    }

    /// Stale cursors (results shrank under them) are pulled back in.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_stale_cursor_is_clamped() {
        let (sizes, count) = any_sizes();
        let sizes = &sizes[..count];
        let pos: Position = (kani::any_where(|&g| g < 16), kani::any_where(|&i| i < 16));
        kani::assert(in_bounds(sizes, clamp(sizes, pos)), "clamp left the list");
        kani::assert(in_bounds(sizes, next(sizes, pos)), "next from stale cursor");
        kani::assert(in_bounds(sizes, prev(sizes, pos)), "prev from stale cursor");
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_next_prev_inverse() {
        let (sizes, count) = any_sizes();
        let sizes = &sizes[..count];
        let pos = any_position(sizes);
        kani::assert(prev(sizes, next(sizes, pos)) == pos, "prev undoes next");
        kani::assert(next(sizes, prev(sizes, pos)) == pos, "next undoes prev");
    }

    #[kani::proof]
    fn verify_history_bounded() {
        let len: usize = kani::any_where(|&n| n <= HISTORY_CAPACITY);
        let after = len_after_add(len);
        kani::assert(after <= HISTORY_CAPACITY, "history grew past capacity");
        kani::assert(after >= 1, "add must leave at least one entry");
    }
}
