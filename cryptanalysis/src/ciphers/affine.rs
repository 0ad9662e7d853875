//! Affine cipher: `y = (a*x + b) mod 26`

use std::fmt;

use serde::Serialize;

use crate::cipher::{CipherFamily, SubstitutionCipher};
use crate::error::{CryptanalysisError, Result};
use crate::utils::{gcd, map_letter, mod_inverse, ALPHABET_SIZE};

/// An affine key `(a, b)` with `a` coprime to 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AffineKey {
    a: u8,
    b: u8,
}

impl AffineKey {
    /// Creates a key, rejecting `a` without an inverse and `b` outside `0..=25`.
    pub fn new(a: u8, b: u8) -> Result<Self> {
        if a as u32 >= ALPHABET_SIZE || gcd(a as u32, ALPHABET_SIZE) != 1 {
            return Err(CryptanalysisError::NoModularInverse { a: a as u32 });
        }
        if b as u32 >= ALPHABET_SIZE {
            return Err(CryptanalysisError::InvalidKey(format!(
                "affine b must be in 0..=25, got {}",
                b
            )));
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn b(&self) -> u8 {
        self.b
    }
}

impl SubstitutionCipher for AffineKey {
    fn encrypt(&self, text: &str) -> String {
        encrypt(text, self.a as u32, self.b as u32)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        decrypt(text, self.a as u32, self.b as u32)
    }

    fn family(&self) -> CipherFamily {
        CipherFamily::Affine
    }
}

impl fmt::Display for AffineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={}, b={}", self.a, self.b)
    }
}

/// Values of `a` that have an inverse modulo 26, in ascending order.
pub fn valid_multipliers() -> impl Iterator<Item = u32> {
    (1..ALPHABET_SIZE).filter(|&a| gcd(a, ALPHABET_SIZE) == 1)
}

/// Encrypts text with `y = (a*x + b) mod 26`, preserving case and non-letters.
pub fn encrypt(content: &str, a: u32, b: u32) -> String {
    let a: u32 = a % ALPHABET_SIZE;
    let b: u32 = b % ALPHABET_SIZE;

    content.chars().map(|c| map_letter(c, |x| a * x + b)).collect()
}

/// Decrypts text with `x = a⁻¹ * (y - b) mod 26`.
///
/// # Errors
///
/// [`CryptanalysisError::NoModularInverse`] when `a` is not coprime to 26.
pub fn decrypt(content: &str, a: u32, b: u32) -> Result<String> {
    let a_inv: u32 = mod_inverse(a % ALPHABET_SIZE, ALPHABET_SIZE)
        .ok_or(CryptanalysisError::NoModularInverse { a })?;
    let b: u32 = b % ALPHABET_SIZE;

    Ok(content
        .chars()
        .map(|c| map_letter(c, |y| a_inv * (y + ALPHABET_SIZE - b)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // A(0) -> 8 = I, L(11) -> 63 mod 26 = 11 = L
        assert_eq!(encrypt("LA", 5, 8), "LI");
        assert_eq!(decrypt("LI", 5, 8).unwrap(), "LA");
    }

    #[test]
    fn test_round_trip_all_valid_keys() {
        let plaintext = "La securite est importante, n'est-ce pas ?";
        for a in valid_multipliers() {
            for b in 0..26 {
                let ciphertext = encrypt(plaintext, a, b);
                assert_eq!(decrypt(&ciphertext, a, b).unwrap(), plaintext, "a={} b={}", a, b);
            }
        }
    }

    #[test]
    fn test_twelve_valid_multipliers() {
        let multipliers: Vec<u32> = valid_multipliers().collect();
        assert_eq!(multipliers, vec![1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25]);
    }

    #[test]
    fn test_decrypt_without_inverse() {
        assert_eq!(
            decrypt("ABC", 13, 4),
            Err(CryptanalysisError::NoModularInverse { a: 13 })
        );
        assert!(decrypt("ABC", 2, 0).is_err());
    }

    #[test]
    fn test_key_validation() {
        assert!(AffineKey::new(5, 8).is_ok());
        assert!(matches!(AffineKey::new(4, 1), Err(CryptanalysisError::NoModularInverse { a: 4 })));
        assert!(matches!(AffineKey::new(5, 26), Err(CryptanalysisError::InvalidKey(_))));
    }
}
