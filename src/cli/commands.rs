// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What each subcommand actually does.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use docsift::{
    build_groups, render_item, Catalog, Error, Key, MatchKind, Result, ResultGroup, SearchConfig,
    SearchWidget, SharedHistory, WidgetView,
};

use super::display::*;

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_path(path),
        None => Ok(SearchConfig::default()),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

pub fn run_search(
    file: &Path,
    query: &str,
    locale: &str,
    limit: usize,
    json: bool,
    config: Option<&Path>,
) -> Result<()> {
    let config = load_config(config)?;
    let catalog = Catalog::from_path(file)?;
    let index = catalog.require(locale)?;

    let mut groups = build_groups(query, &index);
    let total = groups.len();
    groups.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if groups.is_empty() {
        println!("{}", dim(&config.locales.get(locale).empty_result));
        return Ok(());
    }

    for group in &groups {
        print_group(group, &config, locale);
    }
    println!(
        "{}",
        dim(&format!("{} of {} groups for '{}' in {}", groups.len(), total, query, locale))
    );
    Ok(())
}

fn print_group(group: &ResultGroup, config: &SearchConfig, locale: &str) {
    section_top(&format!("{}  {}", group.display_title(), score_value(group.score())));
    for item in &group.contents {
        let excerpt = highlight(&render_item(item, &config.custom_fields, locale));
        match (&item.kind, &item.header) {
            (MatchKind::Content, Some(header)) => {
                row(&format!(" {} {} {}", kind_badge(item.kind), dim(header), dim(&item.path)));
                row(&format!("         {}", excerpt));
            }
            _ => row(&format!(" {} {}  {}", kind_badge(item.kind), excerpt, dim(&item.path))),
        }
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT / PACK
// ═══════════════════════════════════════════════════════════════════════════

pub fn run_inspect(file: &Path) -> Result<()> {
    let raw = fs::metadata(file).map_err(|e| Error::io(file, e))?.len() as usize;
    let catalog = Catalog::from_path(file)?;
    let json_len = catalog.to_json()?.len();

    section_top(&file.display().to_string());
    row(&format!(" file size    {}", format_size(raw)));
    row(&format!(" json size    {}", format_size(json_len)));
    for stats in catalog.stats() {
        row(&format!(
            " {:<12} {} pages, {} sections, {} paragraphs, {} custom values",
            themed(CYAN, &[BOLD], &stats.locale),
            stats.pages,
            stats.sections,
            stats.paragraphs,
            stats.custom_values
        ));
    }
    section_bot();
    Ok(())
}

pub fn run_pack(input: &Path, output: &Path) -> Result<()> {
    let catalog = Catalog::from_path(input)?;
    let json_len = catalog.to_json()?.len();
    let blob = catalog.to_blob()?;
    fs::write(output, &blob).map_err(|e| Error::io(output, e))?;

    tracing::info!(input = %input.display(), output = %output.display(), "packed catalog");
    println!(
        "✓ {} → {} ({} → {}, saved {})",
        input.display(),
        output.display(),
        format_size(json_len),
        format_size(blob.len()),
        savings_colored(json_len, blob.len())
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// REPL
// ═══════════════════════════════════════════════════════════════════════════

/// One parsed repl line.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Query(String),
    Key(Key),
    Select(usize, usize),
    History,
    OpenHistory(usize),
    RemoveHistory(usize),
    Locale(String),
    Route(String),
    Quit,
    Unknown(String),
}

fn parse_repl_line(line: &str) -> ReplCommand {
    let Some(command) = line.strip_prefix(':') else {
        return ReplCommand::Query(line.to_string());
    };
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let mut number = || parts.next().and_then(|n| n.parse::<usize>().ok());

    match name {
        "up" => ReplCommand::Key(Key::ArrowUp),
        "down" => ReplCommand::Key(Key::ArrowDown),
        "enter" => ReplCommand::Key(Key::Enter),
        "esc" => ReplCommand::Key(Key::Escape),
        "select" => match (number(), number()) {
            (Some(group), Some(item)) => ReplCommand::Select(group, item),
            _ => ReplCommand::Unknown(line.to_string()),
        },
        "history" => ReplCommand::History,
        "open" => number().map_or(ReplCommand::Unknown(line.to_string()), ReplCommand::OpenHistory),
        "rm" => number().map_or(ReplCommand::Unknown(line.to_string()), ReplCommand::RemoveHistory),
        "locale" | "route" => match command.trim_start()[name.len()..].trim() {
            "" => ReplCommand::Unknown(line.to_string()),
            arg if name == "locale" => ReplCommand::Locale(arg.to_string()),
            arg => ReplCommand::Route(arg.to_string()),
        },
        "quit" | "q" => ReplCommand::Quit,
        _ => ReplCommand::Unknown(line.to_string()),
    }
}

pub fn run_repl(file: &Path, locale: &str, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let catalog = Arc::new(Catalog::from_path(file)?);
    let clock = docsift::MonotonicClock::new();
    let mut widget = SearchWidget::new(catalog, SharedHistory::new(), config);
    widget.set_locale(locale, clock.now());
    widget.flush();

    let mut navigate = |path: &str| println!("{} {}", themed(GREEN, &[BOLD], "→"), path);

    println!("{}", dim(&format!("{} (:quit to exit)", widget.strings().placeholder)));
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| Error::io("<stdin>", e))?;
        let now = clock.now();

        match parse_repl_line(line.trim_end()) {
            ReplCommand::Query(query) => {
                widget.set_query(query, now);
                // No event loop here: skip the quiet period.
                widget.flush();
            }
            ReplCommand::Key(key) => {
                widget.handle_key(key, &mut navigate);
            }
            ReplCommand::Select(group, item) => {
                widget.select(group, item, &mut navigate);
            }
            ReplCommand::History => {}
            ReplCommand::OpenHistory(index) => {
                widget.select_history(index, &mut navigate);
            }
            ReplCommand::RemoveHistory(index) => widget.remove_history(index),
            ReplCommand::Locale(locale) => {
                widget.set_locale(locale, now);
                widget.flush();
            }
            ReplCommand::Route(path) => {
                widget.set_route(path, now);
                widget.flush();
            }
            ReplCommand::Quit => break,
            ReplCommand::Unknown(line) => {
                eprintln!("unknown command: {}", line);
                continue;
            }
        }
        print_view(&widget);
        io::stdout().flush().map_err(|e| Error::io("<stdout>", e))?;
    }
    Ok(())
}

fn print_view(widget: &SearchWidget<SharedHistory>) {
    let strings = widget.strings();
    match widget.view() {
        WidgetView::History(entries) => {
            section_top(&strings.history);
            for (i, entry) in entries.iter().enumerate() {
                row(&format!(" {} {} {}", dim(&i.to_string()), highlight(&widget.render_item(entry)), dim(&entry.path)));
            }
            section_bot();
        }
        WidgetView::EmptyHistory(label) | WidgetView::EmptyResults(label) => println!("{}", dim(label)),
        WidgetView::Results(groups) => {
            let (active_group, active_item) = widget.cursor();
            for (g, group) in groups.iter().enumerate() {
                section_top(&format!("{}  {}", group.display_title(), score_value(group.score())));
                for (i, item) in group.contents.iter().enumerate() {
                    let marker = if (g, i) == (active_group, active_item) { "▶" } else { " " };
                    row(&format!(
                        "{}{} {}  {}",
                        marker,
                        kind_badge(item.kind),
                        highlight(&widget.render_item(item)),
                        dim(&item.path)
                    ));
                }
                section_bot();
            }
        }
    }
}
