//! Password generator backed by the operating system's entropy source.
//!
//! Every password is exactly `length` ASCII characters drawn uniformly from
//! the selected [`Charset`].  Uniformity comes from rejection sampling: random
//! bytes at or above the largest multiple of the alphabet size are discarded
//! rather than folded with a modulo, which would bias towards the first
//! characters of the alphabet.
//!
//! The entropy source can fail (e.g. `getrandom` unavailable in a sandbox).
//! That failure is returned as [`GenerationError`] and aborts printing.

use clap::ValueEnum;
use pwdgen_core::PasswordLength;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const PUNCTUATION: &[u8] = b"!#$%&()*+,-./:;<=>?@[]^_{|}~";

/// Random bytes fetched from the entropy source per refill.
const BATCH_SIZE: usize = 64;

/// Error type for password generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The OS entropy source failed to produce random bytes.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] rand::Error),
}

/// Characters a password may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// `a-z`, `A-Z` and `0-9`.
    #[default]
    Alphanumeric,
    /// `a-z` and `A-Z`.
    Letters,
    /// `0-9`.
    Digits,
    /// Alphanumerics plus ASCII punctuation.
    Symbols,
}

impl Charset {
    /// The alphabet for this charset, in a fixed order.
    pub fn alphabet(&self) -> Vec<u8> {
        let parts: &[&[u8]] = match self {
            Charset::Alphanumeric => &[LOWERCASE, UPPERCASE, DIGITS],
            Charset::Letters => &[LOWERCASE, UPPERCASE],
            Charset::Digits => &[DIGITS],
            Charset::Symbols => &[LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION],
        };
        parts.concat()
    }
}

/// Generates fixed-length passwords.
///
/// Generic over the RNG so tests can supply a deterministic or failing one;
/// production code uses [`OsRng`].
pub struct PasswordGenerator<R: RngCore = OsRng> {
    rng: R,
    alphabet: Vec<u8>,
    /// Largest byte value (exclusive) that maps uniformly onto the alphabet.
    accept_below: usize,
    length: PasswordLength,
}

impl PasswordGenerator<OsRng> {
    /// Creates a generator drawing from the OS entropy source.
    pub fn new(length: PasswordLength, charset: Charset) -> Self {
        Self::with_rng(OsRng, length, charset)
    }
}

impl<R: RngCore> PasswordGenerator<R> {
    /// Creates a generator drawing from `rng`.
    pub fn with_rng(rng: R, length: PasswordLength, charset: Charset) -> Self {
        let alphabet = charset.alphabet();
        let accept_below = 256 - (256 % alphabet.len());
        Self {
            rng,
            alphabet,
            accept_below,
            length,
        }
    }

    /// Produces one password.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Entropy`] if the RNG cannot supply bytes.
    pub fn generate(&mut self) -> Result<String, GenerationError> {
        let target = self.length.get();
        let mut password = String::with_capacity(target);
        let mut batch = [0u8; BATCH_SIZE];

        while password.len() < target {
            self.rng.try_fill_bytes(&mut batch)?;
            for &byte in &batch {
                let value = usize::from(byte);
                if value >= self.accept_below {
                    continue;
                }
                password.push(char::from(self.alphabet[value % self.alphabet.len()]));
                if password.len() == target {
                    break;
                }
            }
        }

        Ok(password)
    }
}
