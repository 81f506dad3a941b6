//! Character classes and pool building for password generation.

use thiserror::Error;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("Please select at least one checkbox")]
    NoCharacterClassSelected,
}

/// One of the four fixed alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digits,
    Symbols,
}

impl CharClass {
    /// Display order of the form's checkboxes.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lower => "Include Lowercase",
            CharClass::Upper => "Include Uppercase",
            CharClass::Digits => "Include Numbers",
            CharClass::Symbols => "Include Symbols",
        }
    }
}

/// Which character classes are enabled. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl GenerationOptions {
    pub fn all() -> Self {
        Self {
            lower: true,
            upper: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn get(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.lower,
            CharClass::Upper => self.upper,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, on: bool) {
        let flag = match class {
            CharClass::Lower => &mut self.lower,
            CharClass::Upper => &mut self.upper,
            CharClass::Digits => &mut self.digits,
            CharClass::Symbols => &mut self.symbols,
        };
        *flag = on;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.get(class));
    }

    pub fn any(&self) -> bool {
        self.lower || self.upper || self.digits || self.symbols
    }

    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Concatenated alphabets of the enabled classes. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool(Vec<char>);

impl CharacterPool {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

#[cfg(test)]
impl CharacterPool {
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

/// Build the character pool from the enabled classes.
///
/// Alphabets are concatenated in the order upper, lower, digits, symbols.
pub fn build(options: &GenerationOptions) -> Result<CharacterPool, PoolError> {
    const ORDER: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    if options.none() {
        return Err(PoolError::NoCharacterClassSelected);
    }

    let chars: Vec<char> = ORDER
        .iter()
        .filter(|class| options.get(**class))
        .flat_map(|class| class.alphabet().chars())
        .collect();

    Ok(CharacterPool(chars))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_fails() {
        let err = build(&GenerationOptions::default()).unwrap_err();
        assert_eq!(err, PoolError::NoCharacterClassSelected);
        assert_eq!(err.to_string(), "Please select at least one checkbox");
    }

    #[test]
    fn single_classes() {
        for class in CharClass::ALL {
            let mut options = GenerationOptions::default();
            options.set(class, true);
            let pool = build(&options).unwrap();
            assert_eq!(pool.as_slice().iter().collect::<String>(), class.alphabet());
        }
    }

    #[test]
    fn canonical_order() {
        let pool = build(&GenerationOptions::all()).unwrap();
        let expected = format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SYMBOLS}");
        assert_eq!(pool.as_slice().iter().collect::<String>(), expected);
        assert_eq!(pool.len(), 26 + 26 + 10 + 12);
    }

    #[test]
    fn upper_and_digits() {
        let options = GenerationOptions {
            upper: true,
            digits: true,
            ..Default::default()
        };
        let pool = build(&options).unwrap();
        assert_eq!(pool.len(), 36);
        assert!(pool.contains('Q'));
        assert!(pool.contains('7'));
        assert!(!pool.contains('q'));
        assert!(!pool.contains('!'));
    }

    #[test]
    fn toggle_flips() {
        let mut options = GenerationOptions::default();
        assert!(options.none());
        options.toggle(CharClass::Symbols);
        assert!(options.symbols);
        assert!(options.any());
        options.toggle(CharClass::Symbols);
        assert!(options.none());
    }
}
