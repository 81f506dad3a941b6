//! Settings file loading. The file is only ever read.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Settings;
use crate::Result;

pub fn load(path: &Path) -> Result<Settings> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file");
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };
    let settings = toml::from_str(&text)?;
    debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passform/settings.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::theme::ThemeChoice;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_theme_and_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = \"light\"\nlog_file = \"/var/tmp/pf.log\"\n").unwrap();
        let settings = load(&path).unwrap();
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.log_file, Some(PathBuf::from("/var/tmp/pf.log")));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = \"dark\"\n").unwrap();
        let settings = load(&path).unwrap();
        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = \"purple\"\n").unwrap();
        assert!(matches!(load(&path), Err(Error::Settings(_))));
    }

    #[test]
    fn path_is_under_config() {
        assert!(get_path().ends_with(".config/passform/settings.toml"));
    }
}
