// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the docsift CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `DOCSIFT_THEME`
//! first (for explicit control), then `COLORFGBG` (set by some terminals), then
//! defaults to dark because most developers live there.
//!
//! Highlights render bold yellow, the same way the popup renders `<strong>`.
//! Respects `NO_COLOR` for the purists and non-TTY detection for pipelines; with
//! colors off, highlights fall back to `[brackets]` so they stay visible.
//!
//! # Theme detection order
//!
//! 1. `DOCSIFT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use docsift::{DisplaySegment, MatchKind};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DOCSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);     // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);       // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
///
/// Over-long content isn't cut (excerpts can't be cut safely mid-escape);
/// the right border just moves.
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = GRAY();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Render display segments with highlights emphasized.
pub fn highlight(segments: &[DisplaySegment]) -> String {
    let colors = use_colors();
    let mut out = String::new();
    for segment in segments {
        match segment {
            DisplaySegment::Text(text) => out.push_str(text),
            DisplaySegment::Strong(text) if colors => {
                out.push_str(&format!("{}{}{}{}", BOLD, YELLOW(), text, RESET));
            }
            DisplaySegment::Strong(text) => {
                out.push('[');
                out.push_str(text);
                out.push(']');
            }
        }
    }
    out
}

/// Color-coded, fixed-width match kind label
pub fn kind_badge(kind: MatchKind) -> String {
    let label = format!("{:<7}", kind.as_str());
    let color = match kind {
        MatchKind::Title => BRIGHT_GREEN,
        MatchKind::Heading => BLUE,
        MatchKind::Custom => MAGENTA,
        MatchKind::Content => GRAY,
    };
    themed(color, &[], &label)
}

/// Color-coded group score
pub fn score_value(score: u32) -> String {
    let color = if score >= 50 {
        BRIGHT_GREEN
    } else if score >= 20 {
        GREEN
    } else if score >= 10 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[BOLD], &format!("{:>4}", score))
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Format savings percentage with color
pub fn savings_colored(raw: usize, compressed: usize) -> String {
    if raw == 0 {
        return themed(GRAY, &[], "N/A");
    }
    let saved_pct = (1.0 - compressed as f64 / raw as f64) * 100.0;
    if saved_pct > 0.0 {
        themed(GREEN, &[BOLD], &format!("{:.0}%", saved_pct))
    } else {
        themed(RED, &[BOLD], &format!("{:+.0}%", saved_pct))
    }
}

/// Dimmed secondary text
pub fn dim(text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", DIM, text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
