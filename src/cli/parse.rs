use super::CliFlags;
use crate::theme::ThemeChoice;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        // Combined short class flags, e.g. -Ud
        if arg.len() > 2 && arg.starts_with('-') && !arg.starts_with("--") {
            for c in arg[1..].chars() {
                match c {
                    'L' => flags.lower = true,
                    'U' => flags.upper = true,
                    'd' => flags.digits = true,
                    's' => flags.symbols = true,
                    'a' => flags.all = true,
                    'b' => flags.clipboard = true,
                    _ => return Err(ParseError::UnknownArg(arg.to_string())),
                }
            }
            i += 1;
            continue;
        }

        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-b" | "--board" => flags.clipboard = true,
            "-a" | "--all" => flags.all = true,
            "-L" | "--lower" => flags.lower = true,
            "-U" | "--upper" => flags.upper = true,
            "-d" | "--digits" => flags.digits = true,
            "-s" | "--symbols" => flags.symbols = true,
            "--light" => flags.theme = Some(ThemeChoice::Light),
            "--dark" => flags.theme = Some(ThemeChoice::Dark),
            "-l" | "--length" => {
                i += 1;
                match args.get(i) {
                    Some(value) => flags.length = Some(value.clone()),
                    None => return Err(ParseError::MissingValue(arg.to_string())),
                }
            }
            arg => match arg.strip_prefix("--length=") {
                Some(value) => flags.length = Some(value.to_string()),
                None => return Err(ParseError::UnknownArg(arg.to_string())),
            },
        }
        i += 1;
    }

    Ok(flags)
}
