//! Opening the shortened link outside the terminal.
//!
//! The link is handed to the platform opener as a detached child with null
//! stdio. No handle is kept, so the opened page has no channel back to this
//! process.

use std::io;
use std::process::{Command, Stdio};

/// Program and leading arguments used to open a URL on this platform.
pub fn opener_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(windows) {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

pub fn open_link(url: &str) -> io::Result<()> {
    let (program, args) = opener_command();
    Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_child| ())
}
