//! Append-only password file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use log::debug;
use zeroize::Zeroize;

use crate::error::PersistError;
use crate::pass::GeneratedPassword;

pub const DEFAULT_FILE: &str = "passwords.txt";

/// Append `password` plus a newline to `path`, creating the file if needed.
pub fn append(path: &Path, password: &GeneratedPassword) -> Result<(), PersistError> {
    let wrap = |source| PersistError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(wrap)?;

    let mut line = Vec::with_capacity(password.as_str().len() + 1);
    line.extend_from_slice(password.as_str().as_bytes());
    line.push(b'\n');
    let written = file.write_all(&line).and_then(|_| file.flush());
    line.zeroize();
    written.map_err(wrap)?;

    debug!("appended password to {}", path.display());
    Ok(())
}
