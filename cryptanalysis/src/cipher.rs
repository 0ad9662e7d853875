//! Generic substitution cipher trait and the family-tagged key

use std::fmt;

use serde::Serialize;

use crate::ciphers::{AffineKey, CaesarKey, VigenereKey};
use crate::error::Result;

/// Trait for a keyed letter-substitution cipher
pub trait SubstitutionCipher {
    /// Encrypts a text, copying non-letters through
    fn encrypt(&self, text: &str) -> String;

    /// Decrypts a text, copying non-letters through
    fn decrypt(&self, text: &str) -> Result<String>;

    /// Returns the cipher family of this key
    fn family(&self) -> CipherFamily;
}

/// The cipher families the analyzer knows how to attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CipherFamily {
    Caesar,
    Affine,
    Vigenere,
}

impl CipherFamily {
    /// All families, in the order the analyzer runs them.
    pub const ALL: [CipherFamily; 3] = [CipherFamily::Caesar, CipherFamily::Affine, CipherFamily::Vigenere];
}

impl fmt::Display for CipherFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherFamily::Caesar => write!(f, "Caesar"),
            CipherFamily::Affine => write!(f, "Affine"),
            CipherFamily::Vigenere => write!(f, "Vigenere"),
        }
    }
}

/// A key of any supported family.
///
/// Serializes as `{"vigenere": "SOLEIL"}`, `{"caesar": 3}` or `{"affine": {"a": 5, "b": 8}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKey {
    Caesar(CaesarKey),
    Affine(AffineKey),
    Vigenere(VigenereKey),
}

impl SubstitutionCipher for CipherKey {
    fn encrypt(&self, text: &str) -> String {
        match self {
            CipherKey::Caesar(key) => key.encrypt(text),
            CipherKey::Affine(key) => key.encrypt(text),
            CipherKey::Vigenere(key) => key.encrypt(text),
        }
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        match self {
            CipherKey::Caesar(key) => key.decrypt(text),
            CipherKey::Affine(key) => key.decrypt(text),
            CipherKey::Vigenere(key) => key.decrypt(text),
        }
    }

    fn family(&self) -> CipherFamily {
        match self {
            CipherKey::Caesar(_) => CipherFamily::Caesar,
            CipherKey::Affine(_) => CipherFamily::Affine,
            CipherKey::Vigenere(_) => CipherFamily::Vigenere,
        }
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKey::Caesar(key) => write!(f, "{}", key),
            CipherKey::Affine(key) => write!(f, "{}", key),
            CipherKey::Vigenere(key) => write!(f, "{}", key),
        }
    }
}
