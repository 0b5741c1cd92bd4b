use std::path::PathBuf;

use clap::Parser;

use crate::error::UsageError;
use crate::pass::Selection;
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Preferences, Settings};

/// Generate a password from selected character classes.
///
/// With no generation flags, asks for preferences interactively.
#[derive(Debug, Default, Parser)]
#[command(name = "passmint", version, about)]
pub struct CliFlags {
    /// Password length (6 to 4096)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out punctuation
    #[arg(long)]
    pub no_punct: bool,

    /// Drop look-alike characters (O 0 l 1 I | ` ' " \)
    #[arg(short = 'x', long)]
    pub exclude_ambiguous: bool,

    /// Append the password to the output file
    #[arg(short, long)]
    pub save: bool,

    /// Output file for saved passwords (implies --save)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Copy the password to the clipboard
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Print only the password
    #[arg(short, long)]
    pub quiet: bool,

    /// Store these flags as the defaults for later runs
    #[arg(long, conflicts_with = "reset_defaults")]
    pub save_defaults: bool,

    /// Forget stored defaults
    #[arg(long)]
    pub reset_defaults: bool,

    /// Ask for preferences even when flags are given
    #[arg(short, long)]
    pub interactive: bool,
}

impl CliFlags {
    /// Any flag that shapes the password switches to non-interactive mode.
    pub fn has_generation_args(&self) -> bool {
        self.length.is_some()
            || self.no_upper
            || self.no_lower
            || self.no_digits
            || self.no_punct
            || self.exclude_ambiguous
            || self.save
            || self.output.is_some()
            || self.save_defaults
            || self.reset_defaults
    }

    /// Layer the flags over `settings`.
    pub fn resolve(&self, settings: &Settings) -> Result<Preferences, UsageError> {
        let length = self.length.unwrap_or(settings.length);
        if length < MIN_LENGTH {
            return Err(UsageError::LengthTooShort {
                length,
                min: MIN_LENGTH,
            });
        }
        if length > MAX_LENGTH {
            return Err(UsageError::LengthTooLong {
                length,
                max: MAX_LENGTH,
            });
        }

        let defaults = settings.selection();
        let selection = Selection {
            upper: defaults.upper && !self.no_upper,
            lower: defaults.lower && !self.no_lower,
            digits: defaults.digits && !self.no_digits,
            punctuation: defaults.punctuation && !self.no_punct,
            exclude_ambiguous: defaults.exclude_ambiguous || self.exclude_ambiguous,
        };
        if !selection.has_any() {
            return Err(UsageError::NoClasses);
        }

        Ok(Preferences {
            selection,
            length,
            save: self.save || self.output.is_some(),
        })
    }

    pub fn output_file(&self, settings: &Settings) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| settings.output_path().to_path_buf())
    }

    /// Settings that reproduce `prefs` on a later run.
    pub fn as_defaults(&self, prefs: &Preferences, settings: &Settings) -> Settings {
        let sel = prefs.selection;
        Settings {
            length: prefs.length,
            upper: sel.upper,
            lower: sel.lower,
            digits: sel.digits,
            punctuation: sel.punctuation,
            exclude_ambiguous: sel.exclude_ambiguous,
            output_file: self.output_file(settings).display().to_string(),
        }
    }
}
