use crate::pass::{CharClass, GenerationOptions};
use crate::theme::ThemeChoice;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub all: bool,
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Raw text; validated by the same rules as the form field.
    pub length: Option<String>,
    pub theme: Option<ThemeChoice>,
}

impl CliFlags {
    /// Generate once and exit instead of opening the form.
    pub fn is_one_shot(&self) -> bool {
        self.length.is_some()
            || self.all
            || self.lower
            || self.upper
            || self.digits
            || self.symbols
            || self.clipboard
    }

    pub fn options(&self) -> GenerationOptions {
        if self.all {
            return GenerationOptions::all();
        }
        let mut options = GenerationOptions::default();
        for (class, on) in [
            (CharClass::Lower, self.lower),
            (CharClass::Upper, self.upper),
            (CharClass::Digits, self.digits),
            (CharClass::Symbols, self.symbols),
        ] {
            options.set(class, on);
        }
        options
    }
}
