// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning match items into something a user reads.
//!
//! Custom-field matches carry just the excerpt of a field value, e.g. `guide`.
//! On its own that tells the reader nothing, so each field index has a label
//! template like `"Category: $content"`. The excerpt replaces the first
//! `$content` and the text around it is wrapped on as plain segments.
//!
//! Templates are either one string for every locale, or a per-locale map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::locale::ROOT_LOCALE;
use crate::types::{DisplaySegment, FieldIndex, MatchItem, MatchKind};

/// Placeholder that the excerpt replaces.
pub const CONTENT_PLACEHOLDER: &str = "$content";

/// A label template for one custom field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelTemplate {
    Single(String),
    PerLocale(BTreeMap<String, String>),
}

impl LabelTemplate {
    /// The template text for `locale`, falling back to the root locale.
    pub fn for_locale(&self, locale: &str) -> Option<&str> {
        match self {
            LabelTemplate::Single(template) => Some(template),
            LabelTemplate::PerLocale(map) => map
                .get(locale)
                .or_else(|| map.get(ROOT_LOCALE))
                .map(String::as_str),
        }
    }
}

impl From<&str> for LabelTemplate {
    fn from(template: &str) -> Self {
        LabelTemplate::Single(template.to_string())
    }
}

/// Field index → label template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomFieldLabels(BTreeMap<FieldIndex, LabelTemplate>);

impl CustomFieldLabels {
    /// No labels: every custom match renders as its bare excerpt.
    pub fn none() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, index: FieldIndex, template: impl Into<LabelTemplate>) {
        self.0.insert(index, template.into());
    }

    /// The template text for a field, `"$content"` when nothing is set.
    pub fn template(&self, index: FieldIndex, locale: &str) -> &str {
        self.0
            .get(&index)
            .and_then(|template| template.for_locale(locale))
            .unwrap_or(CONTENT_PLACEHOLDER)
    }
}

impl Default for CustomFieldLabels {
    /// Field 0 is the page category, field 1 its tags.
    fn default() -> Self {
        let per_locale = |en: &str, zh: &str| {
            LabelTemplate::PerLocale(BTreeMap::from([
                (ROOT_LOCALE.to_string(), en.to_string()),
                ("/zh/".to_string(), zh.to_string()),
            ]))
        };
        let mut labels = Self::none();
        labels.insert(0, per_locale("Category: $content", "分类：$content"));
        labels.insert(1, per_locale("Tag: $content", "标签：$content"));
        labels
    }
}

/// Wrap `excerpt` in `template`.
///
/// The first `$content` is replaced by the excerpt and any later ones are
/// dropped. A template without `$content` is treated as a prefix.
pub fn apply_template(template: &str, excerpt: &[DisplaySegment]) -> Vec<DisplaySegment> {
    let (before, after) = template
        .split_once(CONTENT_PLACEHOLDER)
        .unwrap_or((template, ""));
    let after = after.replace(CONTENT_PLACEHOLDER, "");

    let mut segments = Vec::with_capacity(excerpt.len() + 2);
    if !before.is_empty() {
        segments.push(DisplaySegment::Text(before.to_string()));
    }
    segments.extend_from_slice(excerpt);
    if !after.is_empty() {
        segments.push(DisplaySegment::Text(after.to_string()));
    }
    segments
}

/// The segments to show for an item in `locale`.
pub fn render_item(item: &MatchItem, labels: &CustomFieldLabels, locale: &str) -> Vec<DisplaySegment> {
    match (item.kind, item.index) {
        (MatchKind::Custom, Some(index)) => {
            apply_template(labels.template(index, locale), &item.display)
        }
        _ => item.display.clone(),
    }
}

/// Concatenated text, highlights unmarked.
pub fn to_plain(segments: &[DisplaySegment]) -> String {
    segments.iter().map(DisplaySegment::text).collect()
}

/// HTML with highlights in `<strong>` and everything escaped.
pub fn to_html(segments: &[DisplaySegment]) -> String {
    let mut html = String::new();
    for segment in segments {
        match segment {
            DisplaySegment::Text(text) => escape_into(&mut html, text),
            DisplaySegment::Strong(text) => {
                html.push_str("<strong>");
                escape_into(&mut html, text);
                html.push_str("</strong>");
            }
        }
    }
    html
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}
