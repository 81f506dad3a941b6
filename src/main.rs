use std::env;
use std::process::ExitCode;

use tracing::{info, warn};

mod cli;
mod error;
mod exits;
mod form;
mod logging;
mod pass;
mod settings;
mod terminal;
mod theme;
mod tui;

pub use error::{Error, Result};
use settings::Settings;
use terminal::{print_error, print_warning};

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    // Keep generated passwords out of core dumps
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    let args: Vec<String> = env::args().collect();
    let flags = match cli::parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            print_error(&e.to_string());
            eprintln!("Try 'passform --help'");
            return ExitCode::from(2);
        }
    };

    let (mut settings, problems) = Settings::load();
    if let Some(theme) = flags.theme {
        settings.theme = theme;
    }

    let interactive = !(flags.is_one_shot() || flags.help || flags.version);
    if let Err(e) = logging::init(settings.log_file.as_deref(), interactive) {
        print_warning(&format!("Logging disabled: {}", e));
    }
    for e in problems {
        warn!(error = %e, "settings problem");
        if interactive {
            print_warning(&e.to_string());
        }
    }
    info!(version = env!("CARGO_PKG_VERSION"), theme = ?settings.theme, "starting");

    cli::run(&flags, &settings)
}
