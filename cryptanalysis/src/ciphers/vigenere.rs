//! Vigenère cipher

use std::fmt;

use serde::Serialize;

use crate::cipher::{CipherFamily, SubstitutionCipher};
use crate::error::{CryptanalysisError, Result};
use crate::utils::shift_letter;

/// A non-empty Vigenère key of uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VigenereKey {
    key: String,
}

impl VigenereKey {
    /// Creates a key from the letters of `key`, uppercased; other characters are dropped.
    pub fn new(key: &str) -> Result<Self> {
        let letters: String = key
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if letters.is_empty() {
            return Err(CryptanalysisError::InvalidKey(format!(
                "Vigenere key needs at least one letter, got {:?}",
                key
            )));
        }
        Ok(Self { key: letters })
    }

    /// Builds a key from per-column shifts (`0` is `A`).
    pub fn from_shifts(shifts: &[u8]) -> Result<Self> {
        let key: String = shifts.iter().map(|&s| (b'A' + s % 26) as char).collect();
        Self::new(&key)
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl SubstitutionCipher for VigenereKey {
    fn encrypt(&self, text: &str) -> String {
        encrypt(text, &self.key)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(decrypt(text, &self.key))
    }

    fn family(&self) -> CipherFamily {
        CipherFamily::Vigenere
    }
}

impl fmt::Display for VigenereKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

/// Shift values (0-25) of the alphabetic characters of a key.
fn key_shifts(key: &str) -> Vec<i32> {
    key.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| (c.to_ascii_uppercase() as u8 - b'A') as i32)
        .collect()
}

/// Shifts every letter by the key shift at the current key index.
///
/// The key index only advances on letters.
fn apply(content: &str, key: &str, direction: i32) -> String {
    let shifts: Vec<i32> = key_shifts(key);
    if shifts.is_empty() {
        return content.to_string();
    }

    let mut result: String = String::with_capacity(content.len());
    let mut key_index: usize = 0;

    for c in content.chars() {
        if c.is_ascii_alphabetic() {
            result.push(shift_letter(c, direction * shifts[key_index % shifts.len()]));
            key_index += 1;
        } else {
            result.push(c);
        }
    }

    result
}

/// Encrypts text using the Vigenère cipher algorithm.
///
/// # Arguments
///
/// * `content` - The input text to encrypt.
/// * `key` - The key; non-letters in it are ignored.
///
/// # Returns
///
/// The encrypted text. A key without letters returns `content` unchanged.
pub fn encrypt(content: &str, key: &str) -> String {
    apply(content, key, 1)
}

/// Decrypts text using the Vigenère cipher algorithm.
///
/// A key without letters returns `content` unchanged.
pub fn decrypt(content: &str, key: &str) -> String {
    apply(content, key, -1)
}
