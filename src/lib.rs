//! Client-side search for statically generated documentation sites.
//!
//! A site build ships one compressed blob holding every page's title, custom
//! fields (category, tags) and sections. This crate decodes it, matches a query
//! against all of it case-insensitively, cuts highlighted excerpts, groups hits
//! per page and ranks the groups. Around that sits the interactive part of a
//! search popup: a debounced query pipeline, a keyboard cursor and a short
//! history of recent selections.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ catalog.rs  │──▶│  search/     │──▶│  scoring/    │──▶│ ResultGroup  │
//! │ (blob →     │   │ (build_groups│   │ (weights,    │   │   (ranked)   │
//! │  Index)     │   │  breadcrumb) │   │  rank)       │   │              │
//! └─────────────┘   └──────┬───────┘   └──────────────┘   └──────┬───────┘
//!                          │ excerpt.rs                          │
//!                          ▼                                     ▼
//!                   ┌──────────────┐                      ┌──────────────┐
//!                   │ pipeline.rs  │◀──── debounce.rs     │  widget.rs   │
//!                   │ (query →     │─────────────────────▶│ (keys, view, │
//!                   │  results)    │                      │  history)    │
//!                   └──────────────┘                      └──────────────┘
//! ```
//!
//! # Ranking
//!
//! | Hit kind | Weight |
//! |----------|--------|
//! | title    | 50     |
//! | heading  | 20     |
//! | custom   | 10     |
//! | content  | 1      |
//!
//! A group's score is the sum of its hits' weights; groups sort descending,
//! ties in index order.
//!
//! # Usage
//!
//! ```
//! use docsift::{build_groups, Catalog};
//!
//! let catalog = Catalog::from_json(r#"{"/": {"/a/": {"title": "Setup Guide", "contents": []}}}"#)?;
//! let index = catalog.require("/")?;
//! let groups = build_groups("setup", &index);
//! assert_eq!(groups[0].title, "Setup Guide");
//! # Ok::<(), docsift::Error>(())
//! ```

// Module declarations
pub mod catalog;
pub mod config;
pub mod contracts;
pub mod debounce;
mod error;
pub mod excerpt;
pub mod history;
pub mod locale;
pub mod navigation;
pub mod pipeline;
pub mod render;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
pub mod widget;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use catalog::{Catalog, LocaleStats};
pub use config::SearchConfig;
pub use debounce::{Debouncer, MonotonicClock};
pub use error::{Error, Result};
pub use excerpt::{match_excerpt, rendered_len, EXCERPT_BUDGET};
pub use history::{History, HistoryStore, SharedHistory, HISTORY_CAPACITY, HISTORY_STORAGE_KEY};
pub use locale::{resolve_locale, LocaleStrings, Locales};
pub use navigation::Navigator;
pub use pipeline::QueryPipeline;
pub use render::{render_item, to_html, to_plain, CustomFieldLabels, LabelTemplate};
pub use scoring::{group_score, kind_weight};
pub use search::{breadcrumb, build_groups, parent_path};
pub use types::{
    DisplaySegment, FieldIndex, Index, MatchItem, MatchKind, PageEntry, ResultGroup, Section,
    UNTITLED_GROUP,
};
pub use widget::{Key, NavigationSink, SearchWidget, WidgetView};
