//! Vigenère key-length estimation (Kasiski examination + IC periodicity)

use std::collections::BTreeMap;

use log::{debug, trace};
use rayon::prelude::*;
use serde::Serialize;

use crate::stats::index_of_coincidence;
use crate::text::letters_only;
use crate::utils::split_into_columns;

/// Longest key length considered by default.
pub const MAX_KEY_LENGTH: usize = 20;

/// Number of estimates returned, best first.
pub const TOP_KEY_LENGTHS: usize = 5;

/// Repeated sequence lengths examined by the Kasiski test.
const KASISKI_SEQUENCE_LENGTHS: std::ops::RangeInclusive<usize> = 3..=5;

/// IC of natural French text; columns of the right period approach it.
const TARGET_IC: f64 = 0.074;

/// IC distance at which the periodicity score reaches 0.
const IC_SCALE: f64 = 0.04;

const KASISKI_WEIGHT: f64 = 0.4;
const IC_WEIGHT: f64 = 0.6;

/// A scored key-length hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyLengthEstimate {
    pub length: usize,
    /// `0.4 * kasiski + 0.6 * ic`, in `[0, 1]`
    pub score: f64,
    /// Mean IC of the `length` interleaved columns
    pub average_ic: f64,
    pub kasiski_votes: usize,
}

/// Repeated `n`-letter sequences of `text` and their start positions.
///
/// Only sequences occurring at least twice are returned.
pub fn repeated_sequences(text: &str, n: usize) -> BTreeMap<&str, Vec<usize>> {
    let mut sequences: BTreeMap<&str, Vec<usize>> = BTreeMap::new();

    if n == 0 || text.len() < n {
        return sequences;
    }

    for i in 0..=text.len() - n {
        if let Some(sequence) = text.get(i..i + n) {
            sequences.entry(sequence).or_default().push(i);
        }
    }

    sequences.retain(|_, positions| positions.len() > 1);
    sequences
}

/// Divisors of `n` greater than 1, plus `n` itself, ascending.
pub fn divisors(n: usize) -> Vec<usize> {
    let mut divs: Vec<usize> = Vec::new();
    let mut i: usize = 2;

    while i * i <= n {
        if n % i == 0 {
            divs.push(i);
            if i * i != n {
                divs.push(n / i);
            }
        }
        i += 1;
    }

    divs.push(n);
    divs.sort_unstable();
    divs.dedup();
    divs
}

/// Kasiski votes per candidate key length.
///
/// Every distance between adjacent occurrences of a repeated 3-, 4- or
/// 5-letter sequence votes for each of its divisors up to `max_len`.
pub fn kasiski_votes(text: &str, max_len: usize) -> BTreeMap<usize, usize> {
    let mut votes: BTreeMap<usize, usize> = BTreeMap::new();

    for n in KASISKI_SEQUENCE_LENGTHS {
        for positions in repeated_sequences(text, n).values() {
            for pair in positions.windows(2) {
                let distance = pair[1] - pair[0];
                for divisor in divisors(distance) {
                    if divisor <= max_len {
                        *votes.entry(divisor).or_insert(0) += 1;
                    }
                }
            }
        }
    }

    trace!("Kasiski votes: {:?}", votes);
    votes
}

/// Mean index of coincidence of the `length` interleaved columns of `text`.
///
/// Columns with fewer than two letters add 0; the sum is divided by `length`.
pub fn average_ic(text: &str, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }

    let total: f64 = split_into_columns(text, length)
        .iter()
        .filter(|column| column.len() > 1)
        .map(|column| index_of_coincidence(column))
        .sum();

    total / length as f64
}

/// Ranks key lengths `1..=max_len` for a Vigenère ciphertext.
///
/// # Arguments
///
/// * `ciphertext` - The ciphertext; non-letters are ignored.
/// * `max_len` - Longest key length considered, capped at the letter count.
///
/// # Returns
///
/// The [`TOP_KEY_LENGTHS`] best estimates, best first. Without any repeated
/// sequence the ranking falls back to IC periodicity alone.
pub fn estimate_key_lengths(ciphertext: &str, max_len: usize) -> Vec<KeyLengthEstimate> {
    let cleaned: String = letters_only(ciphertext);
    // A period longer than the text leaves empty columns
    let max_len = max_len.min(cleaned.len());
    if max_len == 0 {
        return Vec::new();
    }

    // Step 1: Kasiski examination
    let votes = kasiski_votes(&cleaned, max_len);
    let max_votes: usize = votes.values().copied().max().unwrap_or(1).max(1);

    // Step 2: IC periodicity per length, then merge both signals
    let mut estimates: Vec<KeyLengthEstimate> = (1..=max_len)
        .into_par_iter()
        .map(|length| {
            let average_ic = average_ic(&cleaned, length);
            let kasiski_votes = votes.get(&length).copied().unwrap_or(0);

            let k_score = kasiski_votes as f64 / max_votes as f64;
            let ic_score = (1.0 - (average_ic - TARGET_IC).abs() / IC_SCALE).max(0.0);

            KeyLengthEstimate {
                length,
                score: KASISKI_WEIGHT * k_score + IC_WEIGHT * ic_score,
                average_ic,
                kasiski_votes,
            }
        })
        .collect();

    estimates.sort_by(|a, b| b.score.total_cmp(&a.score));
    estimates.truncate(TOP_KEY_LENGTHS);

    debug!(
        "Key length estimates: {:?}",
        estimates.iter().map(|e| (e.length, e.score)).collect::<Vec<_>>()
    );
    estimates
}
