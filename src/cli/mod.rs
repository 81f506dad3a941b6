//! Command-line entry: flag parsing, help, one-shot generation.

mod flags;
mod help;
mod parse;

use std::process::ExitCode;

use tracing::{info, warn};

pub use flags::CliFlags;
pub use help::print_help;
pub use parse::parse;

use crate::form::Form;
use crate::pass::{self, CharClass};
use crate::settings::Settings;
use crate::terminal::{print_error, print_warning};
use crate::theme::Palette;
use crate::{Error, Result, tui};

/// Dispatch parsed flags: info flags, one-shot generation, or the form.
pub fn run(flags: &CliFlags, settings: &Settings) -> ExitCode {
    if flags.help {
        print_help();
        return ExitCode::SUCCESS;
    }
    if flags.version {
        println!("passform {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let result = if flags.is_one_shot() {
        one_shot(flags)
    } else {
        let appearance = settings.theme.resolve();
        info!(?appearance, "opening form");
        tui::run(Palette::for_appearance(appearance))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Generate a single password from flags and print or copy it.
fn one_shot(flags: &CliFlags) -> Result<()> {
    let password = generate(flags, &mut pass::rng())?;

    if flags.clipboard {
        match tui::copy_to_clipboard(password.as_str()) {
            Ok(()) => {
                print_warning("Copied to clipboard");
                return Ok(());
            }
            Err(e) => {
                warn!(error = %e, "falling back to stdout");
                print_warning(&e.to_string());
            }
        }
    }
    println!("{}", password.as_str());
    Ok(())
}

fn generate<R: rand::Rng>(flags: &CliFlags, rng: &mut R) -> Result<pass::GeneratedPassword> {
    let options = flags.options();
    let mut form = Form::new();
    for class in CharClass::ALL {
        form.set_class(class, options.get(class));
    }
    form.set_length_input(flags.length.as_deref().unwrap_or(""));
    form.submit(rng)?;

    form.password()
        .cloned()
        .ok_or_else(|| Error::Args("no password generated".into()))
}
