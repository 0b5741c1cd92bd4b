//! User preferences and persisted defaults.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::pass::Selection;
use crate::store::DEFAULT_FILE;

/// Shortest length either front end accepts.
pub const MIN_LENGTH: usize = 6;

/// Longest length either front end accepts.
pub const MAX_LENGTH: usize = 4096;

/// One validated generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub selection: Selection,
    pub length: usize,
    pub save: bool,
}

/// Defaults for flag mode, stored as JSON under the user config dir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub punctuation: bool,
    pub exclude_ambiguous: bool,
    pub output_file: String,
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        file::load(&file::path())
    }

    /// Write to the user config dir, returning where it went.
    pub fn save(&self) -> Result<PathBuf, SettingsError> {
        let path = file::path();
        file::save(&path, self)?;
        Ok(path)
    }

    /// Remove the stored file. Missing is not an error.
    pub fn reset() -> Result<PathBuf, SettingsError> {
        let path = file::path();
        file::remove(&path)?;
        Ok(path)
    }

    pub fn selection(&self) -> Selection {
        Selection {
            upper: self.upper,
            lower: self.lower,
            digits: self.digits,
            punctuation: self.punctuation,
            exclude_ambiguous: self.exclude_ambiguous,
        }
    }

    pub fn output_path(&self) -> &Path {
        Path::new(&self.output_file)
    }
}

impl Default for Settings {
    fn default() -> Self {
        let sel = Selection::default();
        Self {
            length: 16,
            upper: sel.upper,
            lower: sel.lower,
            digits: sel.digits,
            punctuation: sel.punctuation,
            exclude_ambiguous: sel.exclude_ambiguous,
            output_file: DEFAULT_FILE.to_string(),
        }
    }
}
