//! Flag-driven, non-interactive mode.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

pub use context::Context;
pub use flags::CliFlags;

use crate::exits;
use crate::settings::Settings;

pub fn run(flags: &CliFlags, settings: &Settings) -> ExitCode {
    let settings = if flags.reset_defaults {
        match Settings::reset() {
            Ok(path) => prompts::info(&format!("Defaults cleared ({})", path.display())),
            Err(e) => prompts::warn(&format!("Failed to clear defaults: {e}")),
        }
        Settings::default()
    } else {
        settings.clone()
    };

    let prefs = match flags.resolve(&settings) {
        Ok(prefs) => prefs,
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            return ExitCode::from(exits::USAGE);
        }
    };

    if flags.save_defaults {
        match flags.as_defaults(&prefs, &settings).save() {
            Ok(path) => prompts::info(&format!("Defaults saved to {}", path.display())),
            Err(e) => prompts::warn(&format!("Failed to save defaults: {e}")),
        }
    }

    let ctx = Context::new(prefs, flags.output_file(&settings), flags.board);
    exits::finish(ctx.run())
}
