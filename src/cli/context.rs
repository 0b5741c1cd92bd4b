//! Run context - one generation request plus where its result goes.

use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, warn};
use zeroize::Zeroize;

use super::prompts;
use crate::error::{ClipboardError, GenerateError};
use crate::pass::{self, Alphabets, GeneratedPassword, output};
use crate::settings::Preferences;
use crate::store;

pub struct Context {
    pub prefs: Preferences,
    pub output_file: PathBuf,
    pub clipboard: bool,
}

impl Context {
    pub fn new(prefs: Preferences, output_file: PathBuf, clipboard: bool) -> Self {
        Self {
            prefs,
            output_file,
            clipboard,
        }
    }

    /// Generate, display, then hand off to the optional sinks.
    ///
    /// Only generation errors are returned; sink failures are reported and swallowed.
    pub fn run(&self) -> Result<(), GenerateError> {
        let Preferences {
            selection, length, ..
        } = self.prefs;

        let mut rng = rand::rng();
        let password = pass::generate(Alphabets::STANDARD, &selection, length, &mut rng)?;
        let strength = pass::classify(length, selection.class_count());
        debug!("generated {length} chars, strength {strength}");

        if let Err(e) = output::show(&password, strength) {
            warn!("stdout write failed: {e}");
        }

        if self.prefs.save {
            self.persist(&password);
        }
        if self.clipboard {
            match copy_to_clipboard(&password) {
                Ok(()) => prompts::clipboard_copied(),
                Err(e) => prompts::warn(&e.to_string()),
            }
        }
        Ok(())
    }

    fn persist(&self, password: &GeneratedPassword) {
        match store::append(&self.output_file, password) {
            Ok(()) => prompts::password_saved(&self.output_file.display().to_string()),
            Err(e) => prompts::save_failed(&e.source),
        }
    }
}

fn copy_to_clipboard(password: &GeneratedPassword) -> Result<(), ClipboardError> {
    let mut ctx = ClipboardContext::new().map_err(|e| ClipboardError(e.to_string()))?;
    ctx.set_contents(password.as_str().to_owned())
        .map_err(|e| ClipboardError(e.to_string()))?;

    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
