// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog: one index per locale, shipped as a compressed text blob.
//!
//! The site build writes every locale's index into a single JSON object,
//! `{ "/": {...}, "/zh/": {...} }`, compresses it and inlines it into the
//! page bundle as a base64 string. Here is the other end of that pipe.
//!
//! # Blob format
//!
//! ```text
//! blob = base64_standard( brotli( utf8_json( { locale: { path: PageEntry } } ) ) )
//! ```
//!
//! Decoding happens once per session; after that the catalog is read-only and
//! shared behind `Arc`s, so switching locales never re-decodes anything.

use std::collections::BTreeMap;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::locale::resolve_locale;
use crate::types::Index;

/// Brotli buffer size for both directions.
const BROTLI_BUFFER: usize = 4096;
/// Brotli quality (0-11). The blob is built once and downloaded many times.
const BROTLI_QUALITY: u32 = 11;
/// Brotli window size (log2).
const BROTLI_LG_WINDOW: u32 = 22;

/// Locale key → decoded index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: BTreeMap<String, Arc<Index>>,
}

/// Size summary of one locale's index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleStats {
    pub locale: String,
    pub pages: usize,
    pub sections: usize,
    pub paragraphs: usize,
    pub custom_values: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the index for `locale`.
    pub fn insert(&mut self, locale: impl Into<String>, index: Index) {
        self.locales.insert(locale.into(), Arc::new(index));
    }

    /// The index for an exact locale key.
    pub fn index(&self, locale: &str) -> Option<Arc<Index>> {
        self.locales.get(locale).cloned()
    }

    /// Locale keys, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// The locale whose key is the longest prefix of `route_path`.
    pub fn locale_for_route(&self, route_path: &str) -> Option<&str> {
        resolve_locale(route_path, self.locales())
    }

    /// Like [`Catalog::index`], but an unknown locale is an error naming the
    /// ones that do exist.
    pub fn require(&self, locale: &str) -> Result<Arc<Index>> {
        self.index(locale).ok_or_else(|| Error::UnknownLocale {
            locale: locale.to_string(),
            available: self.locales().collect::<Vec<_>>().join(", "),
        })
    }

    // =========================================================================
    // DECODING
    // =========================================================================

    /// Parse a raw (uncompressed) JSON catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let locales: BTreeMap<String, Index> = serde_json::from_str(json)?;
        let catalog = Self::from_map(locales);
        tracing::info!(
            locales = catalog.locales.len(),
            pages = catalog.page_count(),
            "decoded catalog"
        );
        Ok(catalog)
    }

    /// Decode a base64 + brotli blob.
    pub fn from_blob(blob: &str) -> Result<Self> {
        let compressed = BASE64.decode(blob.trim())?;
        let mut json = String::new();
        brotli::Decompressor::new(compressed.as_slice(), BROTLI_BUFFER)
            .read_to_string(&mut json)
            .map_err(Error::Decompress)?;
        tracing::debug!(
            blob_bytes = blob.len(),
            json_bytes = json.len(),
            "decompressed index blob"
        );
        Self::from_json(&json)
    }

    /// Load a catalog file, either a blob or raw JSON.
    ///
    /// Raw JSON is detected by its leading `{`, which can't start a base64 string.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        if text.trim_start().starts_with('{') {
            Self::from_json(&text)
        } else {
            Self::from_blob(&text)
        }
    }

    fn from_map(locales: BTreeMap<String, Index>) -> Self {
        Self {
            locales: locales
                .into_iter()
                .map(|(locale, index)| (locale, Arc::new(index)))
                .collect(),
        }
    }

    // =========================================================================
    // ENCODING
    // =========================================================================

    /// Serialize to raw JSON, preserving each index's page order.
    pub fn to_json(&self) -> Result<String> {
        let view: BTreeMap<&str, &Index> = self
            .locales
            .iter()
            .map(|(locale, index)| (locale.as_str(), index.as_ref()))
            .collect();
        Ok(serde_json::to_string(&view)?)
    }

    /// Encode as a base64 + brotli blob.
    pub fn to_blob(&self) -> Result<String> {
        let json = self.to_json()?;
        let mut compressed = Vec::new();
        {
            let mut encoder = brotli::CompressorWriter::new(
                &mut compressed,
                BROTLI_BUFFER,
                BROTLI_QUALITY,
                BROTLI_LG_WINDOW,
            );
            encoder.write_all(json.as_bytes()).map_err(Error::Compress)?;
        }
        Ok(BASE64.encode(compressed))
    }

    // =========================================================================
    // INSPECTION
    // =========================================================================

    fn page_count(&self) -> usize {
        self.locales.values().map(|index| index.len()).sum()
    }

    /// Per-locale size summary, sorted by locale key.
    pub fn stats(&self) -> Vec<LocaleStats> {
        self.locales
            .iter()
            .map(|(locale, index)| {
                let mut stats = LocaleStats {
                    locale: locale.clone(),
                    pages: index.len(),
                    sections: 0,
                    paragraphs: 0,
                    custom_values: 0,
                };
                for (_, page) in index.iter() {
                    stats.sections += page.contents.len();
                    stats.paragraphs += page.contents.iter().map(|s| s.contents.len()).sum::<usize>();
                    stats.custom_values += page.custom_fields.values().map(Vec::len).sum::<usize>();
                }
                stats
            })
            .collect()
    }
}
