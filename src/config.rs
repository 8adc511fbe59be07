// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration.
//!
//! Everything has a default, so an empty `{}` file is a valid config. Locale
//! tables in a config are laid over the built-in ones rather than replacing
//! the whole set, so adding `"/fr/"` keeps English and Chinese around.
//!
//! ```json
//! {
//!   "debounceMs": 150,
//!   "locales": { "/fr/": { "cancel": "Annuler", "emptyResult": "Aucun résultat" } },
//!   "customFields": { "0": "Catégorie : $content" }
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locale::Locales;
use crate::render::CustomFieldLabels;

/// Quiet period between the last keystroke and the recompute.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub locales: Locales,
    pub custom_fields: CustomFieldLabels,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            locales: Locales::default(),
            custom_fields: CustomFieldLabels::default(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<SearchConfig>(json).map(SearchConfig::layered)
    }

    /// Lay the deserialized locale tables over the built-in ones.
    ///
    /// Plain `Deserialize` only sees what the host wrote; every entry point
    /// that reads host config goes through here afterwards.
    pub fn layered(mut self) -> Self {
        let mut locales = Locales::default();
        locales.merge(std::mem::replace(&mut self.locales, Locales::empty()));
        self.locales = locales;
        self
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_json(&json).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), debounce_ms = config.debounce_ms, "loaded config");
        Ok(config)
    }
}
