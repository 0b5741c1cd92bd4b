//! Interactive mode.

mod collect;
mod input;

use std::process::ExitCode;

pub use collect::collect;
pub use input::{Prompt, TerminalPrompt};

use crate::cli::{CliFlags, Context, prompts};
use crate::error::PromptError;
use crate::exits;
use crate::settings::Settings;

/// Ask for preferences, then generate.
pub fn run(flags: &CliFlags, settings: &Settings) -> ExitCode {
    let mut prompt = TerminalPrompt::new();
    let prefs = match collect(&mut prompt) {
        Ok(prefs) => prefs,
        Err(PromptError::Closed) => {
            println!();
            prompts::error("Input closed before preferences were complete.");
            return ExitCode::from(exits::FAILURE);
        }
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            return ExitCode::from(exits::FAILURE);
        }
    };

    let ctx = Context::new(prefs, flags.output_file(settings), flags.board);
    exits::finish(ctx.run())
}
