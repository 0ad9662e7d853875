//! Per-column Caesar solving by chi-squared minimization

use log::debug;
use rayon::prelude::*;

use crate::ciphers::VigenereKey;
use crate::error::Result;
use crate::language::FrequencyTable;
use crate::stats::chi_squared_from_counts;
use crate::text::letters_only;
use crate::utils::{count_frequencies, split_into_columns};

/// Finds the Caesar shift of one column using the chi-squared test.
///
/// All 26 shifts are tried; the first shift with the lowest statistic wins,
/// so an empty column yields 0 (`A`).
pub fn solve_column(column: &str, reference: &FrequencyTable) -> u8 {
    let frequencies: [u32; 26] = count_frequencies(column);
    let mut best_shift: u8 = 0;
    let mut best_chi_squared = f64::INFINITY;

    for shift in 0..26usize {
        // Decrypting by `shift` moves ciphertext letter i + shift onto plaintext letter i
        let mut shifted: [u32; 26] = [0; 26];
        for (i, slot) in shifted.iter_mut().enumerate() {
            *slot = frequencies[(i + shift) % 26];
        }

        let chi_squared = chi_squared_from_counts(&shifted, reference);
        if chi_squared < best_chi_squared {
            best_chi_squared = chi_squared;
            best_shift = shift as u8;
        }
    }

    best_shift
}

/// Reconstructs a Vigenère key of `key_length` letters from a ciphertext.
///
/// Each of the interleaved columns of the ciphertext's letters is solved as
/// an independent Caesar cipher.
pub fn solve_key(ciphertext: &str, key_length: usize, reference: &FrequencyTable) -> Result<VigenereKey> {
    let cleaned: String = letters_only(ciphertext);

    let shifts: Vec<u8> = split_into_columns(&cleaned, key_length)
        .par_iter()
        .map(|column| solve_column(column, reference))
        .collect();

    let key = VigenereKey::from_shifts(&shifts)?;
    debug!("Solved key of length {}: {}", key_length, key);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ciphers::{caesar, vigenere};
    use crate::language::Language;
    use crate::test_fixtures::LONG_FRENCH_TEXT;

    #[test]
    fn test_solve_column_recovers_shift() {
        let reference = Language::French.letter_frequencies();
        let column = caesar::encrypt(&letters_only(LONG_FRENCH_TEXT), 11);
        assert_eq!(solve_column(&column, reference), 11);
    }

    #[test]
    fn test_empty_column_is_a() {
        assert_eq!(solve_column("", Language::French.letter_frequencies()), 0);
    }

    #[test]
    fn test_solve_key() {
        let reference = Language::French.letter_frequencies();
        for key in ["CLEF", "SOLEIL", "LIBERTE"] {
            let ciphertext = vigenere::encrypt(LONG_FRENCH_TEXT, key);
            assert_eq!(solve_key(&ciphertext, key.len(), reference).unwrap().as_str(), key);
        }
    }

    #[test]
    fn test_zero_length_is_rejected() {
        assert!(solve_key("ABC", 0, Language::French.letter_frequencies()).is_err());
    }
}
