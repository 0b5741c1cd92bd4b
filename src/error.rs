//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::pass::CharClass;

/// Failures that abort a single password generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// No eligible characters after filtering.
    #[error("No characters available to generate password. Please adjust your preferences.")]
    EmptyPool,

    /// A selected class lost every character to the ambiguous filter.
    #[error("No {0} characters remain after excluding ambiguous characters.")]
    ClassExhausted(CharClass),

    /// The requested length cannot hold one character of every selected class.
    #[error("Password length too short for the selected character types.")]
    LengthTooShort { length: usize, required: usize },

    /// The working buffer for `length` characters could not be allocated.
    #[error("Password length {length} is too large.")]
    LengthTooLong { length: usize },
}

/// Appending a password to the output file failed. Never fatal.
#[derive(Debug, Error)]
#[error("{}: {source}", .path.display())]
pub struct PersistError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed")]
    Closed,

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Flag combinations that cannot produce a password.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("at least one character type must stay enabled")]
    NoClasses,

    #[error("length {length} is below the minimum of {min}")]
    LengthTooShort { length: usize, min: usize },

    #[error("length {length} is above the maximum of {max}")]
    LengthTooLong { length: usize, max: usize },
}

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);
