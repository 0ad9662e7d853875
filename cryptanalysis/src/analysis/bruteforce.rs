//! Exhaustive Caesar and affine search, and the Vigenère pipeline
//!
//! Every trial (a shift, an `(a, b)` pair, a key-length hypothesis) is an
//! independent unit of work run on the rayon pool. Results come back in trial
//! order; ranking is left to the caller.

use log::{debug, info, trace};
use rayon::prelude::*;

use crate::analysis::column::solve_key;
use crate::analysis::key_length::{estimate_key_lengths, MAX_KEY_LENGTH};
use crate::candidate::Candidate;
use crate::cipher::SubstitutionCipher;
use crate::ciphers::{affine, AffineKey, CaesarKey};
use crate::language::Language;
use crate::scoring::Scorer;
use crate::text;

/// Shifts tried by the Caesar brute force. The identity shift is never tried.
pub const CAESAR_SHIFTS: std::ops::RangeInclusive<u8> = 1..=25;

/// Ciphertexts with at most this many characters are not attacked as Vigenère.
pub const VIGENERE_MIN_LENGTH: usize = 10;

/// Number of key-length hypotheses turned into keys.
pub const KEY_LENGTH_HYPOTHESES: usize = 3;

/// Tuning of the Vigenère pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VigenereOptions {
    pub max_key_length: usize,
    pub hypotheses: usize,
    /// Counted in characters of the raw ciphertext, punctuation included.
    pub min_length: usize,
}

impl Default for VigenereOptions {
    fn default() -> Self {
        Self {
            max_key_length: MAX_KEY_LENGTH,
            hypotheses: KEY_LENGTH_HYPOTHESES,
            min_length: VIGENERE_MIN_LENGTH,
        }
    }
}

/// Decrypts with every shift in 1..=25 and scores each plaintext.
///
/// # Returns
///
/// Exactly 25 candidates in shift order, unfiltered.
pub fn crack_caesar(ciphertext: &str, scorer: &Scorer<'_>, language: Option<Language>) -> Vec<Candidate> {
    info!("Testing Caesar hypotheses...");

    CAESAR_SHIFTS
        .into_par_iter()
        .filter_map(|shift| {
            let key = CaesarKey::new(shift).ok()?;
            let plaintext = key.decrypt(ciphertext).ok()?;
            Some(Candidate::Caesar {
                key,
                outcome: scorer.score(plaintext, language),
            })
        })
        .collect()
}

/// Decrypts with every `(a, b)` pair, `a` coprime to 26, and scores each plaintext.
///
/// Pairs without a modular inverse are skipped; with the coprimality filter
/// none are, which leaves 312 candidates in `(a, b)` order.
pub fn crack_affine(ciphertext: &str, scorer: &Scorer<'_>, language: Option<Language>) -> Vec<Candidate> {
    info!("Testing affine hypotheses...");

    let pairs: Vec<(u32, u32)> = affine::valid_multipliers()
        .flat_map(|a| (0..26).map(move |b| (a, b)))
        .collect();

    pairs
        .into_par_iter()
        .filter_map(|(a, b)| {
            let plaintext = match affine::decrypt(ciphertext, a, b) {
                Ok(plaintext) => plaintext,
                Err(e) => {
                    trace!("Skipping affine pair ({}, {}): {}", a, b, e);
                    return None;
                }
            };
            let key = AffineKey::new(a as u8, b as u8).ok()?;
            Some(Candidate::Affine {
                key,
                outcome: scorer.score(plaintext, language),
            })
        })
        .collect()
}

/// Estimates the key length, solves the columns of the best hypotheses and
/// scores the resulting decryptions of the full ciphertext.
///
/// Returns nothing when the ciphertext has at most `options.min_length` characters.
pub fn crack_vigenere(
    ciphertext: &str,
    scorer: &Scorer<'_>,
    language: Option<Language>,
    options: &VigenereOptions,
) -> Vec<Candidate> {
    let length = ciphertext.chars().count();
    if length <= options.min_length {
        debug!(
            "Skipping Vigenere analysis: {} characters (need more than {})",
            length, options.min_length
        );
        return Vec::new();
    }
    let cleaned = text::clean(ciphertext);
    let letters: &str = cleaned.letters();

    info!("Testing Vigenere hypotheses...");

    let mut estimates = estimate_key_lengths(letters, options.max_key_length);
    estimates.truncate(options.hypotheses);

    estimates
        .into_par_iter()
        .filter_map(|estimate| {
            let key = solve_key(letters, estimate.length, scorer.reference()).ok()?;
            let plaintext = key.decrypt(ciphertext).ok()?;
            Some(Candidate::Vigenere {
                key,
                estimate,
                outcome: scorer.score(plaintext, language),
            })
        })
        .collect()
}
