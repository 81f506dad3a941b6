//! Form state: selected classes, length field, last error, generated password.
//!
//! The form is owned by whoever drives it (the TUI loop) and is only changed
//! through the methods below. Rendering works from a [`FormView`] snapshot.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::pass::{
    self, CharClass, GeneratedPassword, GenerationOptions, LengthError, PasswordLength, PoolError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Length(#[from] LengthError),
    #[error(transparent)]
    Pool(#[from] PoolError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generated,
}

/// Longest run of digits the field accepts from typing.
const MAX_INPUT: usize = 8;

#[derive(Debug, Default)]
pub struct Form {
    options: GenerationOptions,
    length_input: String,
    touched: bool,
    error: Option<LengthError>,
    password: Option<GeneratedPassword>,
    entropy: Option<f64>,
}

/// Immutable snapshot handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub options: GenerationOptions,
    pub length_input: String,
    pub error: Option<LengthError>,
    pub password: Option<GeneratedPassword>,
    pub entropy: Option<f64>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match self.password {
            Some(_) => Phase::Generated,
            None => Phase::Idle,
        }
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.password.as_ref()
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.options.toggle(class);
    }

    pub fn set_class(&mut self, class: CharClass, on: bool) {
        self.options.set(class, on);
    }

    /// Replace the field text as-is. Validation decides what it means.
    pub fn set_length_input(&mut self, raw: &str) {
        self.length_input = raw.to_string();
        self.revalidate();
    }

    /// Append a typed character. Only digits are accepted.
    pub fn push_length_char(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.length_input.len() >= MAX_INPUT {
            return false;
        }
        self.length_input.push(c);
        self.revalidate();
        true
    }

    pub fn pop_length_char(&mut self) {
        if self.length_input.pop().is_some() {
            self.revalidate();
        }
    }

    /// Validate, build the pool and sample a new password.
    ///
    /// On a length error the message is kept for display. On either error the
    /// current password (if any) is left alone.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SubmitError> {
        self.touched = true;

        let length = match PasswordLength::parse(&self.length_input) {
            Ok(len) => len,
            Err(e) => {
                debug!(error = %e, "length rejected");
                self.error = Some(e);
                return Err(e.into());
            }
        };
        self.error = None;

        let pool = pass::charset::build(&self.options).inspect_err(|_| {
            debug!("no character class selected");
        })?;

        let password = pass::sample(&pool, length, rng);
        self.entropy = Some(pass::entropy_bits(pool.len(), password.len()));
        info!(length = password.len(), pool = pool.len(), "password generated");
        self.password = Some(password);
        Ok(())
    }

    /// Clear every flag, the length field, the error and the password.
    pub fn reset(&mut self) {
        *self = Self::default();
        info!("form reset");
    }

    pub fn snapshot(&self) -> FormView {
        FormView {
            options: self.options,
            length_input: self.length_input.clone(),
            error: self.error,
            password: self.password.clone(),
            entropy: self.entropy,
        }
    }

    fn revalidate(&mut self) {
        if self.touched {
            self.error = PasswordLength::parse(&self.length_input).err();
        }
    }
}

#[cfg(test)]
impl Form {
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn error(&self) -> Option<LengthError> {
        self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    fn form_with(classes: &[CharClass], len: &str) -> Form {
        let mut form = Form::new();
        for class in classes {
            form.set_class(*class, true);
        }
        form.set_length_input(len);
        form
    }

    #[test]
    fn starts_idle_and_empty() {
        let form = Form::new();
        assert_eq!(form.phase(), Phase::Idle);
        assert!(form.options().none());
        assert_eq!(form.length_input(), "");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn valid_submit_generates() {
        let mut form = form_with(&[CharClass::Upper, CharClass::Digits], "8");
        form.submit(&mut rng()).unwrap();
        assert_eq!(form.phase(), Phase::Generated);
        let pass = form.password().unwrap().as_str();
        assert_eq!(pass.len(), 8);
        assert!(pass.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn no_classes_raises_notice_without_password() {
        let mut form = form_with(&[], "10");
        let err = form.submit(&mut rng()).unwrap_err();
        assert_eq!(err, SubmitError::Pool(PoolError::NoCharacterClassSelected));
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn length_checked_before_pool() {
        let mut form = form_with(&[], "2");
        let err = form.submit(&mut rng()).unwrap_err();
        assert_eq!(err, SubmitError::Length(LengthError::TooShort));
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn invalid_lengths_show_message_and_stay_idle() {
        let cases = [
            ("abc", "Please enter password length"),
            ("", "Please enter password length"),
            ("3", "Minimum 4 characters"),
            ("25", "Maximum 24 characters"),
        ];
        for (input, message) in cases {
            let mut form = form_with(&[CharClass::Lower], input);
            assert!(form.submit(&mut rng()).is_err());
            assert_eq!(form.phase(), Phase::Idle);
            assert_eq!(form.error().unwrap().to_string(), message);
            assert!(form.options().lower);
        }
    }

    #[test]
    fn invalid_resubmit_keeps_previous_password() {
        let mut form = form_with(&[CharClass::Lower], "6");
        form.submit(&mut rng()).unwrap();
        let before = form.password().cloned();

        form.set_length_input("30");
        assert!(form.submit(&mut rng()).is_err());
        assert_eq!(form.phase(), Phase::Generated);
        assert_eq!(form.password().cloned(), before);
        assert_eq!(form.error(), Some(LengthError::TooLong));
    }

    #[test]
    fn regenerate_replaces_password() {
        let mut form = form_with(&[CharClass::Digits], "4");
        let mut rng = rng();
        form.submit(&mut rng).unwrap();
        form.set_length_input("12");
        form.submit(&mut rng).unwrap();
        assert_eq!(form.password().unwrap().len(), 12);
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = form_with(&CharClass::ALL, "16");
        form.submit(&mut rng()).unwrap();
        form.reset();
        assert_eq!(form.phase(), Phase::Idle);
        assert!(form.password().is_none());
        assert!(form.options().none());
        assert_eq!(form.length_input(), "");
        assert_eq!(form.error(), None);

        // Reset from idle with a pending error.
        form.set_length_input("1");
        let _ = form.submit(&mut rng());
        form.reset();
        assert_eq!(form.error(), None);
    }

    #[test]
    fn edits_revalidate_only_after_submit() {
        let mut form = form_with(&[CharClass::Lower], "");
        form.push_length_char('2');
        assert_eq!(form.error(), None);

        let _ = form.submit(&mut rng());
        assert_eq!(form.error(), Some(LengthError::TooShort));
        form.push_length_char('0');
        assert_eq!(form.error(), None);
        form.push_length_char('0');
        assert_eq!(form.error(), Some(LengthError::TooLong));
        form.pop_length_char();
        form.pop_length_char();
        form.pop_length_char();
        assert_eq!(form.error(), Some(LengthError::Required));

        form.reset();
        form.push_length_char('1');
        assert_eq!(form.error(), None);
    }

    #[test]
    fn padded_lengths_are_accepted() {
        for raw in ["000000000012", "          12", "12          ", "+0000000012"] {
            let mut form = form_with(&[CharClass::Digits], raw);
            form.submit(&mut rng()).unwrap();
            assert_eq!(form.password().unwrap().len(), 12, "{raw:?}");
            assert_eq!(form.length_input(), raw);
        }
    }

    #[test]
    fn long_out_of_range_text_is_too_long() {
        let mut form = form_with(&[CharClass::Digits], "123456789012");
        assert_eq!(
            form.submit(&mut rng()),
            Err(SubmitError::Length(LengthError::TooLong))
        );
    }

    #[test]
    fn length_field_takes_digits_only() {
        let mut form = Form::new();
        assert!(!form.push_length_char('a'));
        assert!(!form.push_length_char('-'));
        assert!(form.push_length_char('1'));
        for _ in 0..20 {
            form.push_length_char('9');
        }
        assert_eq!(form.length_input().len(), MAX_INPUT);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut form = form_with(&[CharClass::Digits], "4");
        assert_eq!(form.snapshot().entropy, None);
        form.submit(&mut rng()).unwrap();
        let view = form.snapshot();
        assert!(view.options.digits);
        assert_eq!(view.length_input, "4");
        assert_eq!(view.password.as_ref(), form.password());
        let bits = view.entropy.unwrap();
        assert!((bits - 4.0 * 10f64.log2()).abs() < 1e-9);

        // Rating belongs to the generated password, not later toggles.
        form.toggle(CharClass::Symbols);
        assert_eq!(form.snapshot().entropy, Some(bits));
    }
}
