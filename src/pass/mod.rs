//! Password generation: length validation, character pool, sampling.

pub mod charset;
mod generate;
mod length;

pub use charset::{CharClass, GenerationOptions, PoolError};
pub use generate::{GeneratedPassword, entropy_bits, entropy_strength, rng, sample};
pub use length::{LengthError, PasswordLength};
