//! Rendering of a form snapshot.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};

use super::input::Focus;
use crate::form::FormView;
use crate::pass::{CharClass, entropy_strength};
use crate::terminal::{box_bottom, box_line_center, box_top};
use crate::theme::Palette;

const WIDTH: usize = 48;
const FIELD_WIDTH: usize = 20;
const NOTICE_WIDTH: usize = 44;

pub const PLACEHOLDER: &str = "Enter length (4-24)";

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bg: None,
            bold: false,
        }
    }

    fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub type Line = Vec<Span>;

fn marker(focused: bool) -> Span {
    Span::plain(if focused { "› " } else { "  " })
}

/// Build the screen from a snapshot.
pub fn layout(
    view: &FormView,
    focus: Focus,
    status: Option<&str>,
    palette: &Palette,
) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let text = palette.text;

    let title = "Password Generator";
    let pad = (WIDTH - title.len()) / 2;
    lines.push(vec![Span::plain(" ".repeat(pad)), Span::plain(title).fg(text).bold()]);
    lines.push(vec![]);

    lines.push(vec![Span::plain("  "), Span::plain("Password Length").fg(text)]);
    let (content, color) = if view.length_input.is_empty() {
        (PLACEHOLDER, palette.placeholder)
    } else {
        (view.length_input.as_str(), text)
    };
    lines.push(vec![
        marker(focus == Focus::Length),
        Span::plain("[").fg(palette.input_border),
        Span::plain(format!(" {:<FIELD_WIDTH$} ", content))
            .fg(color)
            .bg(palette.input_background),
        Span::plain("]").fg(palette.input_border),
    ]);
    match view.error {
        Some(err) => lines.push(vec![Span::plain("  "), Span::plain(err.to_string()).fg(palette.error)]),
        None => lines.push(vec![]),
    }
    lines.push(vec![]);

    for class in CharClass::ALL {
        let mark = if view.options.get(class) { "[x]" } else { "[ ]" };
        lines.push(vec![
            marker(focus == Focus::Class(class)),
            Span::plain(mark).fg(palette.checkbox).bold(),
            Span::plain(" "),
            Span::plain(class.label()).fg(text),
        ]);
    }
    lines.push(vec![]);

    lines.push(vec![
        marker(focus == Focus::Generate),
        button(" Generate ", palette.button, palette.button_text, focus == Focus::Generate),
        Span::plain("    "),
        marker(focus == Focus::Reset),
        button("  Reset  ", palette.reset_button, palette.button_text, focus == Focus::Reset),
    ]);
    lines.push(vec![]);

    if let Some(password) = &view.password {
        lines.push(vec![Span::plain("  "), Span::plain("Generated Password:").fg(text).bold()]);
        lines.push(vec![
            Span::plain("  "),
            Span::plain(password.as_str()).fg(palette.password).bold(),
        ]);
        if let Some(bits) = view.entropy {
            lines.push(vec![
                Span::plain("  "),
                Span::plain(format!("Entropy: {:.1} bits ({})", bits, entropy_strength(bits)))
                    .fg(palette.placeholder),
            ]);
        }
        lines.push(vec![]);
    }

    if let Some(status) = status {
        lines.push(vec![Span::plain("  "), Span::plain(status).fg(palette.placeholder)]);
    }
    lines.push(vec![
        Span::plain("  "),
        Span::plain("Tab move · Space toggle · ^G generate · ^R reset").fg(palette.placeholder),
    ]);
    lines.push(vec![
        Span::plain("  "),
        Span::plain("^Y copy · Esc quit").fg(palette.placeholder),
    ]);

    lines
}

fn button(label: &str, bg: Color, fg: Color, focused: bool) -> Span {
    let span = Span::plain(label).fg(fg).bg(bg);
    if focused { span.bold() } else { span }
}

/// The blocking notice, as box lines.
pub fn notice_box(message: &str) -> Vec<String> {
    vec![
        box_top("Notice", NOTICE_WIDTH),
        box_line_center("", NOTICE_WIDTH),
        box_line_center(message, NOTICE_WIDTH),
        box_line_center("", NOTICE_WIDTH),
        box_line_center("Press any key", NOTICE_WIDTH),
        box_bottom(NOTICE_WIDTH),
    ]
}

pub fn draw<W: Write>(
    out: &mut W,
    lines: &[Line],
    notice: Option<&str>,
    palette: &Palette,
) -> io::Result<()> {
    queue!(
        out,
        SetBackgroundColor(palette.background),
        Clear(ClearType::All)
    )?;

    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(2, row as u16 + 1))?;
        for span in line {
            queue!(
                out,
                SetForegroundColor(span.fg.unwrap_or(palette.text)),
                SetBackgroundColor(span.bg.unwrap_or(palette.background))
            )?;
            if span.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(&span.text), SetAttribute(Attribute::Reset))?;
        }
    }

    if let Some(message) = notice {
        queue!(
            out,
            SetForegroundColor(palette.text),
            SetBackgroundColor(palette.background)
        )?;
        for (i, row) in notice_box(message).iter().enumerate() {
            queue!(out, MoveTo(4, 7 + i as u16), Print(row))?;
        }
    }

    queue!(out, ResetColor)?;
    out.flush()
}
