use std::io::{self, BufRead};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::cli::quiet;
use crate::error::PromptError;
use crate::exits;
use crate::terminal::{RawModeGuard, flush};

/// Where the preference collector reads answers and writes feedback.
pub trait Prompt {
    /// Show `prompt` and read one line of input.
    fn line(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Read an answer to a yes/no question. Defaults to a full line.
    fn answer(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.line(prompt)
    }

    /// Print a message on its own line.
    fn say(&mut self, msg: &str);
}

/// Stdin/stdout prompt. Yes/no questions take a single keypress on a TTY.
pub struct TerminalPrompt {
    keypress: bool,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            keypress: quiet::stdin_is_tty() && quiet::stdout_is_tty(),
        }
    }
}

impl Prompt for TerminalPrompt {
    fn line(&mut self, prompt: &str) -> Result<String, PromptError> {
        print!("{prompt}");
        flush();

        let mut buf = String::new();
        if io::stdin().lock().read_line(&mut buf)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(buf)
    }

    fn answer(&mut self, prompt: &str) -> Result<String, PromptError> {
        if !self.keypress {
            return self.line(prompt);
        }
        print!("{prompt}");
        flush();
        read_key()
    }

    fn say(&mut self, msg: &str) {
        println!("{msg}");
    }
}

/// Read one key in raw mode and echo it.
fn read_key() -> Result<String, PromptError> {
    let guard = RawModeGuard::new()?;

    loop {
        let Event::Key(key) = read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                drop(guard);
                exits::interrupted();
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                drop(guard);
                println!();
                return Err(PromptError::Closed);
            }
            KeyCode::Char(c) => {
                drop(guard);
                println!("{c}");
                return Ok(c.to_string());
            }
            KeyCode::Enter => {
                drop(guard);
                println!();
                return Ok(String::new());
            }
            _ => {}
        }
    }
}
