//! Application settings: file, then environment, then flags.

mod file;

use std::path::PathBuf;

use serde::Deserialize;
use crate::theme::ThemeChoice;

pub const THEME_ENV: &str = "PASSFORM_THEME";
pub const LOG_ENV: &str = "PASSFORM_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeChoice,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Load from the settings file and apply environment overrides.
    ///
    /// A broken file or a bad environment value is not fatal: the problems
    /// are returned next to the settings so the caller can report them once
    /// logging is up.
    pub fn load() -> (Self, Vec<crate::Error>) {
        let mut problems = Vec::new();
        let mut settings = match file::load(&file::get_path()) {
            Ok(s) => s,
            Err(e) => {
                problems.push(e);
                Settings::default()
            }
        };
        problems.extend(settings.apply_env(|key| std::env::var(key).ok()));
        (settings, problems)
    }

    /// Apply environment overrides. An unknown value leaves the setting
    /// alone and is handed back.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Option<crate::Error> {
        let mut problem = None;
        if let Some(value) = lookup(THEME_ENV) {
            match ThemeChoice::parse(&value) {
                Some(theme) => self.theme = theme,
                None => {
                    problem = Some(crate::Error::Env {
                        key: THEME_ENV,
                        value,
                    })
                }
            }
        }
        if let Some(path) = lookup(LOG_ENV).filter(|p| !p.trim().is_empty()) {
            self.log_file = Some(PathBuf::from(path));
        }
        problem
    }
}
