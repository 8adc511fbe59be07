// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! UI strings per locale, and picking a locale from the current route.
//!
//! Locale keys are route prefixes (`"/"`, `"/zh/"`). The root locale `"/"`
//! is the fallback for everything: a missing table, or a route that no
//! other key prefixes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fallback locale key.
pub const ROOT_LOCALE: &str = "/";

/// Every user-visible string the widget shows.
///
/// Missing fields in a config table take the English string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocaleStrings {
    pub cancel: String,
    pub placeholder: String,
    pub search: String,
    pub select: String,
    pub navigate: String,
    pub exit: String,
    pub history: String,
    pub empty_history: String,
    pub empty_result: String,
    pub loading: String,
}

impl LocaleStrings {
    pub fn english() -> Self {
        Self {
            cancel: "Cancel".into(),
            placeholder: "Search".into(),
            search: "Search".into(),
            select: "to select".into(),
            navigate: "to navigate".into(),
            exit: "to exit".into(),
            history: "Search History".into(),
            empty_history: "Empty Search History".into(),
            empty_result: "No results found".into(),
            loading: "Loading search indexes...".into(),
        }
    }

    pub fn chinese() -> Self {
        Self {
            cancel: "取消".into(),
            placeholder: "搜索".into(),
            search: "搜索".into(),
            select: "选择".into(),
            navigate: "切换".into(),
            exit: "关闭".into(),
            history: "搜索历史".into(),
            empty_history: "无搜索历史".into(),
            empty_result: "没有找到结果".into(),
            loading: "正在加载搜索索引...".into(),
        }
    }
}

impl Default for LocaleStrings {
    fn default() -> Self {
        Self::english()
    }
}

/// Locale key → strings, with `"/"` as the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locales(BTreeMap<String, LocaleStrings>);

impl Locales {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Add or replace one locale's table.
    pub fn insert(&mut self, locale: impl Into<String>, strings: LocaleStrings) {
        self.0.insert(locale.into(), strings);
    }

    /// Strings for `locale`, else the root table, else English.
    pub fn get(&self, locale: &str) -> &LocaleStrings {
        static ENGLISH: std::sync::OnceLock<LocaleStrings> = std::sync::OnceLock::new();
        self.0
            .get(locale)
            .or_else(|| self.0.get(ROOT_LOCALE))
            .unwrap_or_else(|| ENGLISH.get_or_init(LocaleStrings::english))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Overlay `other` on top of `self`, table by table.
    pub fn merge(&mut self, other: Locales) {
        self.0.extend(other.0);
    }
}

impl Default for Locales {
    /// The built-in English (`/`) and Chinese (`/zh/`) tables.
    fn default() -> Self {
        let mut locales = Self::empty();
        locales.insert(ROOT_LOCALE, LocaleStrings::english());
        locales.insert("/zh/", LocaleStrings::chinese());
        locales
    }
}

/// The longest key that is a prefix of `route_path`.
///
/// `None` only if no key matches at all, which can't happen once `"/"` is
/// among the keys and the path is absolute.
pub fn resolve_locale<'a>(
    route_path: &str,
    keys: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    keys.into_iter()
        .filter(|key| route_path.starts_with(key))
        .max_by_key(|key| key.len())
}
