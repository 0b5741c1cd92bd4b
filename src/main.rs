use std::process::ExitCode;

use clap::Parser;

mod cli;
mod error;
mod exits;
mod pass;
mod settings;
mod store;
mod terminal;
mod tui;

use cli::{CliFlags, prompts, quiet};
use settings::Settings;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    exits::install_handlers();
    exits::harden();

    let flags = CliFlags::parse();
    quiet::set(flags.quiet);

    let settings = Settings::load().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {e}"));
        Settings::default()
    });

    if flags.interactive || !flags.has_generation_args() {
        tui::run(&flags, &settings)
    } else {
        cli::run(&flags, &settings)
    }
}
