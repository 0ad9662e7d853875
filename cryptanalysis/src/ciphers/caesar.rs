//! Caesar (additive) cipher

use std::fmt;

use serde::Serialize;

use crate::cipher::{CipherFamily, SubstitutionCipher};
use crate::error::{CryptanalysisError, Result};
use crate::utils::{shift_letter, ALPHABET_SIZE};

/// A Caesar shift in `0..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CaesarKey {
    shift: u8,
}

impl CaesarKey {
    /// Creates a key, rejecting shifts outside `0..=25`.
    pub fn new(shift: u8) -> Result<Self> {
        if shift as u32 >= ALPHABET_SIZE {
            return Err(CryptanalysisError::InvalidKey(format!(
                "Caesar shift must be in 0..=25, got {}",
                shift
            )));
        }
        Ok(Self { shift })
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }
}

impl SubstitutionCipher for CaesarKey {
    fn encrypt(&self, text: &str) -> String {
        encrypt(text, self.shift as i32)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(decrypt(text, self.shift as i32))
    }

    fn family(&self) -> CipherFamily {
        CipherFamily::Caesar
    }
}

impl fmt::Display for CaesarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shift={}", self.shift)
    }
}

/// Encrypts text with a Caesar shift.
///
/// # Arguments
///
/// * `content` - The input text to encrypt.
/// * `shift` - The shift; any integer, taken modulo 26.
///
/// # Returns
///
/// A `String` with every ASCII letter shifted, case preserved and all other
/// characters unchanged.
pub fn encrypt(content: &str, shift: i32) -> String {
    content.chars().map(|c| shift_letter(c, shift)).collect()
}

/// Decrypts text with a Caesar shift (encryption with the negated shift).
pub fn decrypt(content: &str, shift: i32) -> String {
    encrypt(content, -shift)
}
