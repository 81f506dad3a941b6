//! Password sampling.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::charset::CharacterPool;
use super::length::PasswordLength;

/// A sampled password. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GeneratedPassword").field(&"***").finish()
    }
}

/// Fast non-cryptographic generator seeded from OS entropy.
pub fn rng() -> SmallRng {
    SmallRng::from_entropy()
}

/// Sample `length` characters uniformly, with replacement, from `pool`.
pub fn sample<R: Rng + ?Sized>(
    pool: &CharacterPool,
    length: PasswordLength,
    rng: &mut R,
) -> GeneratedPassword {
    let chars = pool.as_slice();
    let pass: String = (0..length.get())
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();
    GeneratedPassword(pass)
}

/// Calculate password entropy in bits.
pub fn entropy_bits(pool_len: usize, length: usize) -> f64 {
    if pool_len == 0 {
        return 0.0;
    }
    length as f64 * (pool_len as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
