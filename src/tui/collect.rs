//! Interactive preference collection.

use std::num::IntErrorKind;

use log::debug;

use super::Prompt;
use crate::error::PromptError;
use crate::pass::Selection;
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Preferences};

pub const BANNER: &str = "=== Enhanced Password Generator ===\n";
pub const LENGTH_PROMPT: &str = "Enter the desired password length (minimum 6): ";
pub const NOT_A_NUMBER: &str = "Invalid input. Please enter a valid number.";
pub const TOO_SHORT: &str = "Please enter a length of at least 6 characters for better security.";
pub const TOO_LONG: &str = "Please enter a length of at most 4096 characters.";
pub const NOT_YES_NO: &str = "Please enter Y (yes) or N (no).";
pub const NO_CLASS: &str = "You must select at least one character type. Please try again.\n";

/// Ask until the answers form a valid request. An empty selection starts over.
pub fn collect<P: Prompt + ?Sized>(prompt: &mut P) -> Result<Preferences, PromptError> {
    loop {
        prompt.say(BANNER);
        let length = read_length(prompt)?;

        prompt.say("\nSelect character types to include in the password:");
        let upper = yes_no(prompt, "Include uppercase letters? (Y/N): ")?;
        let lower = yes_no(prompt, "Include lowercase letters? (Y/N): ")?;
        let digits = yes_no(prompt, "Include digits? (Y/N): ")?;
        let punctuation = yes_no(prompt, "Include punctuation symbols? (Y/N): ")?;

        let mut selection = Selection {
            upper,
            lower,
            digits,
            punctuation,
            exclude_ambiguous: false,
        };
        if !selection.has_any() {
            prompt.say(NO_CLASS);
            continue;
        }

        selection.exclude_ambiguous =
            yes_no(prompt, "Exclude ambiguous characters (e.g., O, 0, l, 1)? (Y/N): ")?;
        let save = yes_no(prompt, "Do you want to save the password to a file? (Y/N): ")?;

        debug!(
            "collected preferences: length={length}, classes={}",
            selection.class_count()
        );
        return Ok(Preferences {
            selection,
            length,
            save,
        });
    }
}

fn read_length<P: Prompt + ?Sized>(prompt: &mut P) -> Result<usize, PromptError> {
    loop {
        let input = prompt.line(LENGTH_PROMPT)?;
        match input.trim().parse::<i64>() {
            Ok(n) if n < MIN_LENGTH as i64 => prompt.say(TOO_SHORT),
            Ok(n) => match usize::try_from(n) {
                Ok(length) if length <= MAX_LENGTH => return Ok(length),
                Ok(_) => prompt.say(TOO_LONG),
                Err(_) => prompt.say(NOT_A_NUMBER),
            },
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => prompt.say(TOO_LONG),
            Err(_) => prompt.say(NOT_A_NUMBER),
        }
    }
}

fn yes_no<P: Prompt + ?Sized>(prompt: &mut P, question: &str) -> Result<bool, PromptError> {
    loop {
        let answer = prompt.answer(question)?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => prompt.say(NOT_YES_NO),
        }
    }
}
