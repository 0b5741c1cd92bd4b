//! Exit handling: signal handlers, exit codes, and process hardening.

use std::process::ExitCode;

use crate::cli::prompts;
use crate::error::GenerateError;
use crate::terminal;

pub const FAILURE: u8 = 1;
pub const USAGE: u8 = 2;
pub const INTERRUPTED: i32 = 130;

/// Restore cooked mode and echo using termios directly.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit.
extern "C" fn cleanup_on_exit() {
    if unsafe { libc::isatty(libc::STDIN_FILENO) } == 1 {
        reset_terminal_termios();
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit, atexit restores the terminal.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(INTERRUPTED) }
}

/// Install signal handlers and register atexit cleanup. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn harden() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn harden() {}

/// Ctrl+C seen while reading a key in raw mode.
pub fn interrupted() -> ! {
    terminal::reset_terminal();
    println!();
    std::process::exit(INTERRUPTED)
}

/// Map a generation outcome to the process exit status.
pub fn finish(result: Result<(), GenerateError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::generation_failed(&e);
            ExitCode::from(FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_maps_to_zero() {
        assert_eq!(finish(Ok(())), ExitCode::SUCCESS);
    }

    #[test]
    fn generation_errors_map_to_failure() {
        let err = GenerateError::LengthTooShort {
            length: 3,
            required: 4,
        };
        assert_eq!(finish(Err(err)), ExitCode::from(FAILURE));
        assert_eq!(finish(Err(GenerateError::EmptyPool)), ExitCode::from(FAILURE));
    }
}
