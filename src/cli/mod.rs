// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Four subcommands: `search` runs one query against an index file, `inspect`
//! summarizes what's inside it, `pack` turns raw JSON into the compressed
//! blob a site ships, and `repl` drives the interactive widget from stdin so
//! you can poke at key handling and history without a browser.
//!
//! Index files can be either the blob or raw JSON; the loader sniffs which.

pub mod commands;
pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Client-side documentation search: query, inspect and pack index blobs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index file and display ranked groups
    Search {
        /// Index blob or raw JSON catalog
        file: PathBuf,

        /// Search query
        query: String,

        /// Locale key to search in
        #[arg(long, default_value = "/")]
        locale: String,

        /// Maximum number of groups to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print groups as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Config file (label templates, locale strings)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Summarize the locales and pages in an index file
    Inspect {
        /// Index blob or raw JSON catalog
        file: PathBuf,
    },

    /// Compress a JSON catalog into a base64 blob
    Pack {
        /// Raw JSON catalog (a blob is accepted too, and re-packed)
        input: PathBuf,

        /// Where to write the blob
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Drive the interactive widget from stdin
    ///
    /// Plain lines set the query. Commands start with ':' -
    /// :up :down :enter :esc :select G I :history :open N :rm N :locale L :route P :quit
    Repl {
        /// Index blob or raw JSON catalog
        file: PathBuf,

        /// Locale key to start in
        #[arg(long, default_value = "/")]
        locale: String,

        /// Config file (debounce, label templates, locale strings)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
