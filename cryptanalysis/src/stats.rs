//! Letter statistics: Shannon entropy, index of coincidence and chi-squared fit

use std::collections::BTreeMap;

use crate::language::FrequencyTable;
use crate::utils::count_frequencies;

/// Shannon entropy in bits of the character distribution of `text`.
///
/// Characters are uppercased first; nothing else is filtered, so spaces and
/// punctuation count as symbols. Empty text has entropy 0.
pub fn entropy(text: &str) -> f64 {
    // Ordered so the floating-point sum is reproducible
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut length: usize = 0;

    for c in text.chars().flat_map(char::to_uppercase) {
        *counts.entry(c).or_insert(0) += 1;
        length += 1;
    }

    if length == 0 {
        return 0.0;
    }

    let length = length as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / length;
            -p * p.log2()
        })
        .sum::<f64>()
        .max(0.0)
}

/// Calculates the Index of Coincidence (IC) for the given text.
///
/// # Arguments
///
/// * `text` - The input text to analyze; only ASCII letters are counted.
///
/// # Returns
///
/// `Σ c_i(c_i − 1) / (N(N − 1))`, or 0.0 if the text has fewer than 2 letters.
pub fn index_of_coincidence(text: &str) -> f64 {
    let frequencies: [u32; 26] = count_frequencies(text);
    ic_from_counts(&frequencies)
}

/// IC from precomputed letter counts.
pub fn ic_from_counts(frequencies: &[u32; 26]) -> f64 {
    let total: u64 = frequencies.iter().map(|&f| f as u64).sum();

    // Return 0.0 if insufficient data for meaningful IC calculation
    if total < 2 {
        return 0.0;
    }

    let numerator: f64 = frequencies
        .iter()
        .map(|&freq| {
            let freq = freq as u64;
            (freq * freq.saturating_sub(1)) as f64
        })
        .sum();

    let denominator = (total * (total - 1)) as f64;
    numerator / denominator
}

/// Chi-squared statistic of the letters of `text` against a reference table.
///
/// `expected_i = (freq_i / 100) * N`. Lower is a better fit; text without
/// letters returns `f64::INFINITY`. Letters with no expected occurrences are
/// skipped rather than divided by.
pub fn chi_squared(text: &str, reference: &FrequencyTable) -> f64 {
    let frequencies: [u32; 26] = count_frequencies(text);
    chi_squared_from_counts(&frequencies, reference)
}

/// Chi-squared from precomputed letter counts.
pub fn chi_squared_from_counts(frequencies: &[u32; 26], reference: &FrequencyTable) -> f64 {
    let total: u32 = frequencies.iter().sum();
    if total == 0 {
        return f64::INFINITY;
    }

    let text_length = total as f64;
    let mut chi_squared = 0.0;

    for (i, &observed) in frequencies.iter().enumerate() {
        let expected = reference.percent(i) / 100.0 * text_length;

        if expected > 0.0 {
            chi_squared += (observed as f64 - expected).powi(2) / expected;
        }
    }

    chi_squared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    #[test]
    fn test_entropy_boundaries() {
        assert_eq!(entropy("AAAA"), 0.0);
        assert!(entropy("ABCD") > 0.0);
        assert_eq!(entropy(""), 0.0);
    }

    #[test]
    fn test_entropy_is_case_insensitive_and_counts_symbols() {
        assert!((entropy("ABCD") - 2.0).abs() < 1e-12);
        assert_eq!(entropy("aAaA"), 0.0);
        assert!((entropy("A A ") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_is_bit_reproducible() {
        let text = "Oh ghfubswdjh hvw xq vxffhv";
        let reversed: String = text.chars().rev().collect();
        let expected = entropy(text);

        for _ in 0..50 {
            assert_eq!(entropy(text).to_bits(), expected.to_bits());
        }
        // Same symbol counts, same summation order
        assert_eq!(entropy(&reversed).to_bits(), expected.to_bits());
    }

    #[test]
    fn test_ic_boundaries() {
        assert_eq!(index_of_coincidence("AAAA"), 1.0);
        assert_eq!(index_of_coincidence("ABCD"), 0.0);
        assert_eq!(index_of_coincidence("A"), 0.0);
        assert_eq!(index_of_coincidence(""), 0.0);
    }

    #[test]
    fn test_ic_ignores_non_letters() {
        assert_eq!(index_of_coincidence("a-a, A!A"), 1.0);
    }

    #[test]
    fn test_ic_uniform_text_is_low() {
        let uniform = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".repeat(4);
        let ic = index_of_coincidence(&uniform);
        assert!(ic > 0.02 && ic < 0.05, "ic = {}", ic);
    }

    #[test]
    fn test_ic_natural_text_is_high() {
        let text = "Il etait une fois une petite fille qui vivait dans un village pres de la foret. \
                    Quand elle sortait, elle mettait toujours un chaperon rouge que sa grand mere lui avait donne.";
        let ic = index_of_coincidence(text);
        assert!(ic > 0.06, "ic = {}", ic);
    }

    #[test]
    fn test_chi_squared_empty_is_infinite() {
        let table = Language::French.letter_frequencies();
        assert_eq!(chi_squared("", table), f64::INFINITY);
        assert_eq!(chi_squared("123 !", table), f64::INFINITY);
    }

    #[test]
    fn test_chi_squared_prefers_language_like_text() {
        let table = Language::French.letter_frequencies();
        let french = chi_squared("LE PETIT CHAT EST SUR LA TABLE DE LA CUISINE", table);
        let shifted = chi_squared(&crate::ciphers::caesar::encrypt("LE PETIT CHAT EST SUR LA TABLE DE LA CUISINE", 7), table);
        assert!(french < shifted, "{} >= {}", french, shifted);
    }
}
