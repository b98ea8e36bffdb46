//! Puts the terminal into form mode and guarantees it is put back.

use crossterm::cursor::Show;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type FormTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Leaves form mode on drop, or from the panic hook if a panic gets there
/// first. Whichever runs first wins; the other is a no-op.
pub struct TerminalGuard {
    active: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            active: Arc::new(AtomicBool::new(true)),
        };
        // Any failure past this point restores through Drop.
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
        guard.install_panic_hook();
        Ok(guard)
    }

    fn install_panic_hook(&self) {
        let active = Arc::clone(&self.active);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if active.swap(false, Ordering::SeqCst) {
                leave_form_mode();
            }
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active.swap(false, Ordering::SeqCst) {
            leave_form_mode();
        }
    }
}

fn leave_form_mode() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    );
}

pub fn setup_terminal() -> io::Result<(FormTerminal, TerminalGuard)> {
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    Ok((terminal, guard))
}
