//! Centralized user-facing messages.

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Plain status line on stdout, suppressed in quiet mode.
pub fn info(msg: &str) {
    if !quiet::enabled() {
        println!("{msg}");
    }
}

pub fn password_saved(path: &str) {
    info(&format!("Password saved to {path}"));
}

pub fn save_failed(err: &dyn std::fmt::Display) {
    error(&format!("Failed to save password to file: {err}"));
}

pub fn clipboard_copied() {
    info("*** -COPIED TO CLIPBOARD- ***");
}

pub fn generation_failed(err: &dyn std::fmt::Display) {
    error(&format!("Error: {err}"));
}
