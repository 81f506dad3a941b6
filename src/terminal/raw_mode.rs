//! Full-screen RAII guard.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Set while the alternate screen is up, so exit handlers know to leave it.
static ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn screen_active() -> bool {
    ACTIVE.load(Ordering::Relaxed)
}

/// Raw mode, alternate screen and hidden cursor, undone on drop.
pub struct ScreenGuard {
    active: bool,
}

impl ScreenGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        ACTIVE.store(true, Ordering::SeqCst);
        Ok(Self { active: true })
    }

    /// Restore the terminal (also happens on drop).
    pub fn restore(&mut self) {
        if self.active {
            let mut out = io::stdout();
            let _ = execute!(out, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            let _ = out.flush();
            ACTIVE.store(false, Ordering::SeqCst);
            self.active = false;
        }
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
