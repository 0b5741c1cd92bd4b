//! Display of a generated password and its strength.

use std::io::{self, Write};

use crate::cli::quiet;
use crate::terminal::{
    BOLD, GREEN, RED, RESET, YELLOW, box_bottom, box_line, box_rule, box_top, fits_box,
};

use super::{GeneratedPassword, Strength};

/// Print the password and its strength label to stdout.
///
/// Quiet mode prints the bare password. A TTY gets the boxed layout unless
/// the password is too long for the frame.
pub fn show(password: &GeneratedPassword, strength: Strength) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if quiet::enabled() {
        writeln!(out, "{}", password.as_str())?;
    } else if quiet::stdout_is_tty() && fits_box(password.as_str()) {
        render_boxed(&mut out, password, strength)?;
    } else {
        render_plain(&mut out, password, strength)?;
    }
    out.flush()
}

pub fn render_plain<W: Write>(
    out: &mut W,
    password: &GeneratedPassword,
    strength: Strength,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Generated Password ===")?;
    writeln!(out, "{}", password.as_str())?;
    writeln!(out, "Password Strength: {strength}")
}

pub fn render_boxed<W: Write>(
    out: &mut W,
    password: &GeneratedPassword,
    strength: Strength,
) -> io::Result<()> {
    let color = match strength {
        Strength::Weak => RED,
        Strength::Moderate => YELLOW,
        Strength::Strong => GREEN,
    };

    writeln!(out)?;
    box_top(out, "Generated Password")?;
    box_line(out, &format!("{BOLD}{}{RESET}", password.as_str()))?;
    box_rule(out)?;
    box_line(out, &format!("Password Strength: {color}{strength}{RESET}"))?;
    box_bottom(out)
}
