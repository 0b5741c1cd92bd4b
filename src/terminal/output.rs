//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, raw mode reset.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active styling.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ──────────────────────────────┐
pub fn box_top<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let title_part = format!("─ {title} ");
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    writeln!(out, "┌{}{}┐", title_part, "─".repeat(remaining))
}

/// │ content                              │
pub fn box_line<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    writeln!(out, "│ {}{} │", content, " ".repeat(padding))
}

/// ├──────────────────────────────────────┤
pub fn box_rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// └──────────────────────────────────────┘
pub fn box_bottom<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Whether `content` fits on one box line without overflowing the frame.
pub fn fits_box(content: &str) -> bool {
    console_width(content) <= INNER_WIDTH
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
