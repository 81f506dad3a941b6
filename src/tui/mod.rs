//! Interactive terminal form.

mod input;
mod view;

use std::io;

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{self, Event};
use rand::Rng;
use tracing::{info, warn};

use crate::Result;
use crate::form::{Form, SubmitError};
use crate::terminal::ScreenGuard;
use crate::theme::Palette;

use input::{Action, Focus, map_key};

/// Host hook for blocking notices raised by the form.
pub trait Notice {
    fn notify(&mut self, message: &str);
}

/// Controller state: the form plus what only the screen cares about.
struct App<R> {
    form: Form,
    rng: R,
    focus: Focus,
    notice: Option<String>,
    status: Option<String>,
    done: bool,
}

impl<R> Notice for App<R> {
    fn notify(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}

impl<R: Rng> App<R> {
    fn new(rng: R) -> Self {
        Self {
            form: Form::new(),
            rng,
            focus: Focus::Length,
            notice: None,
            status: None,
            done: false,
        }
    }

    fn handle(&mut self, action: Action) {
        if action != Action::Nothing {
            self.status = None;
        }
        match action {
            Action::Quit => self.done = true,
            Action::Next => self.focus = self.focus.next(),
            Action::Prev => self.focus = self.focus.prev(),
            Action::Toggle(class) => self.form.toggle(class),
            Action::Type(c) => {
                self.form.push_length_char(c);
            }
            Action::Backspace => self.form.pop_length_char(),
            Action::Submit => self.submit(),
            Action::Reset => {
                self.form.reset();
                self.focus = Focus::Length;
            }
            Action::Copy => self.copy(),
            Action::Dismiss => self.notice = None,
            Action::Nothing => {}
        }
    }

    fn submit(&mut self) {
        match self.form.submit(&mut self.rng) {
            Ok(()) => {}
            // Shown inline under the field.
            Err(SubmitError::Length(_)) => self.focus = Focus::Length,
            Err(SubmitError::Pool(e)) => self.notify(&e.to_string()),
        }
    }

    fn copy(&mut self) {
        let Some(password) = self.form.password() else {
            self.status = Some("Nothing to copy yet".into());
            return;
        };
        let status = match copy_to_clipboard(password.as_str()) {
            Ok(()) => "Copied to clipboard".to_string(),
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                e.to_string()
            }
        };
        self.status = Some(status);
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut ctx =
        ClipboardContext::new().map_err(|e| crate::Error::Clipboard(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| crate::Error::Clipboard(e.to_string()))
}

/// Run the form until the user quits.
pub fn run(palette: &Palette) -> Result<()> {
    let mut guard = ScreenGuard::new()?;
    info!("form opened");

    let mut app = App::new(crate::pass::rng());
    let mut out = io::stdout();

    while !app.done {
        let lines = view::layout(&app.form.snapshot(), app.focus, app.status.as_deref(), palette);
        view::draw(&mut out, &lines, app.notice.as_deref(), palette)?;

        // Anything else (resize, focus) just redraws.
        if let Event::Key(key) = event::read()? {
            app.handle(map_key(key, app.focus, app.notice.is_some()));
        }
    }

    guard.restore();
    info!(phase = ?app.form.phase(), "form closed");
    Ok(())
}
