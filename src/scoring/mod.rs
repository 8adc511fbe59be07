// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how result groups get their numbers and their order.
//!
//! Every hit adds a fixed weight to its group depending on where it landed.
//! There's no position bonus and no term frequency. A page whose title matches
//! outranks a page that mentions the query in ten paragraphs, and that's the
//! whole point.

mod core;
pub mod ranking;

pub use self::core::*;
