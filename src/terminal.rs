//! Raw-mode terminal lifetime for the quiz screens.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Owns the terminal while a quiz runs. The shell gets its normal screen back
/// when the session is left or dropped, whichever comes first.
pub struct TerminalSession {
    terminal: QuizTerminal,
    active: bool,
}

impl TerminalSession {
    /// Switch to raw mode on the alternate screen.
    pub fn enter() -> io::Result<Self> {
        PANIC_HOOK.call_once(install_panic_hook);

        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }

        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = leave_screen();
                return Err(e);
            }
        };

        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub fn terminal(&mut self) -> &mut QuizTerminal {
        &mut self.terminal
    }

    /// Restore the terminal, reporting any failure.
    pub fn leave(mut self) -> io::Result<()> {
        self.active = false;
        leave_screen()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = leave_screen();
        }
    }
}

// Both steps are attempted even if the first one fails.
fn leave_screen() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    raw.and(screen)
}

// A panic skips the event loop's cleanup, so the hook restores the shell first.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = leave_screen();
        previous(info);
    }));
}
