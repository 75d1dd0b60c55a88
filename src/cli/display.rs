// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the bytebuf CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `BYTEBUF_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped entirely under `NO_COLOR` or when stdout is not a TTY.
//!
//! Hex dumps color each byte by class (NUL, printable ASCII, whitespace,
//! other control, high) so structure shows at a glance.

use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Bytes per hex dump row
pub const DUMP_WIDTH: usize = 16;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("BYTEBUF_THEME") {
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
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);       // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

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
theme_color!(BRIGHT_CYAN);

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
pub fn row(content: &str) {
    let border = border_color();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border_color();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = border_color();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border_color(), "─".repeat(BOX_WIDTH), reset());
}

/// Print a centered bold title between double rules.
pub fn title(text: &str) {
    let border = if use_colors() { BLUE() } else { String::new() };
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!("{}╔{}╗{}", border, "═".repeat(BOX_WIDTH), reset());
    println!(
        "{}║{}{}{}{}{}║{}",
        border,
        reset(),
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad),
        border,
        reset()
    );
    println!("{}╚{}╝{}", border, "═".repeat(BOX_WIDTH), reset());
}

fn border_color() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Broad category of a byte, for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    Null,
    Printable,
    Whitespace,
    Control,
    High,
}

pub fn byte_class(b: u8) -> ByteClass {
    match b {
        0 => ByteClass::Null,
        b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c => ByteClass::Whitespace,
        0x21..=0x7e => ByteClass::Printable,
        0x01..=0x1f | 0x7f => ByteClass::Control,
        _ => ByteClass::High,
    }
}

fn class_color(class: ByteClass) -> fn() -> String {
    match class {
        ByteClass::Null => GRAY,
        ByteClass::Printable => CYAN,
        ByteClass::Whitespace => GREEN,
        ByteClass::Control => MAGENTA,
        ByteClass::High => YELLOW,
    }
}

/// One hex dump line: offset, hex pairs, and an ASCII gutter.
///
/// `00000010  68 65 6c 6c 6f 0a                                |hello.|`
pub fn dump_row(offset: usize, chunk: &[u8]) -> String {
    let mut hex_part = String::new();
    let mut ascii_part = String::new();
    for (i, &b) in chunk.iter().enumerate() {
        if i == DUMP_WIDTH / 2 {
            hex_part.push(' ');
        }
        let color = class_color(byte_class(b));
        hex_part.push_str(&themed(color, &[], &format!("{:02x}", b)));
        hex_part.push(' ');
        let shown = if byte_class(b) == ByteClass::Printable || b == b' ' {
            b as char
        } else {
            '.'
        };
        ascii_part.push_str(&themed(color, &[], &shown.to_string()));
    }
    let hex_width = DUMP_WIDTH * 3 + 1;
    format!(
        " {}  {}|{}|",
        themed(GRAY, &[DIM], &format!("{:08x}", offset)),
        pad_right(&hex_part, hex_width),
        ascii_part
    )
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
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

/// "yes"/"no" colored green/red.
pub fn flag(value: bool) -> String {
    if value {
        themed(GREEN, &[BOLD], "yes")
    } else {
        themed(RED, &[], "no")
    }
}

/// `label` padded into a fixed column followed by `value`.
pub fn field(label: &str, value: &str) -> String {
    format!("  {}{}", pad_right(&themed(GRAY, &[], label), 22), value)
}
