// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::commands::{run_inspect, run_pack, run_repl, run_search};
use cli::{Cli, Commands};

/// Log to stderr, filtered by `DOCSIFT_LOG` (or `RUST_LOG`), warnings by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DOCSIFT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
    if let Err(e) = result {
        eprintln!("Failed to initialize tracing: {}", e);
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            file,
            query,
            locale,
            limit,
            json,
            config,
        } => run_search(&file, &query, &locale, limit, json, config.as_deref()),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Pack { input, output } => run_pack(&input, &output),
        Commands::Repl {
            file,
            locale,
            config,
        } => run_repl(&file, &locale, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
