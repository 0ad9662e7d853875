//! Decryption hypotheses produced by the solvers

use serde::Serialize;

use crate::analysis::KeyLengthEstimate;
use crate::cipher::{CipherFamily, CipherKey};
use crate::ciphers::{AffineKey, CaesarKey, VigenereKey};
use crate::scoring::{Metrics, Outcome};

/// One scored decryption hypothesis, tagged by cipher family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cipher", rename_all = "lowercase")]
pub enum Candidate {
    Caesar {
        key: CaesarKey,
        outcome: Outcome,
    },
    Affine {
        key: AffineKey,
        outcome: Outcome,
    },
    Vigenere {
        key: VigenereKey,
        /// The key-length hypothesis this key was solved for.
        estimate: KeyLengthEstimate,
        outcome: Outcome,
    },
}

impl Candidate {
    pub fn family(&self) -> CipherFamily {
        match self {
            Candidate::Caesar { .. } => CipherFamily::Caesar,
            Candidate::Affine { .. } => CipherFamily::Affine,
            Candidate::Vigenere { .. } => CipherFamily::Vigenere,
        }
    }

    pub fn key(&self) -> CipherKey {
        match self {
            Candidate::Caesar { key, .. } => CipherKey::Caesar(*key),
            Candidate::Affine { key, .. } => CipherKey::Affine(*key),
            Candidate::Vigenere { key, .. } => CipherKey::Vigenere(key.clone()),
        }
    }

    pub fn outcome(&self) -> &Outcome {
        match self {
            Candidate::Caesar { outcome, .. }
            | Candidate::Affine { outcome, .. }
            | Candidate::Vigenere { outcome, .. } => outcome,
        }
    }

    pub fn score(&self) -> f64 {
        self.outcome().score
    }

    pub fn plaintext(&self) -> &str {
        &self.outcome().plaintext
    }

    pub fn metrics(&self) -> &Metrics {
        &self.outcome().metrics
    }

    /// The first `max_chars` characters of the plaintext.
    pub fn excerpt(&self, max_chars: usize) -> &str {
        let plaintext = self.plaintext();
        match plaintext.char_indices().nth(max_chars) {
            Some((end, _)) => &plaintext[..end],
            None => plaintext,
        }
    }
}

/// Sorts candidates by descending score.
///
/// The sort is stable: equal scores keep the order they were produced in.
pub fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score().total_cmp(&a.score()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn outcome(plaintext: &str, score: f64) -> Outcome {
        Outcome {
            plaintext: plaintext.to_string(),
            score,
            metrics: Metrics {
                entropy: 0.0,
                ic: 0.0,
                valid_ratio: 0.0,
                stop_ratio: 0.0,
                chi_squared: f64::INFINITY,
                language: Language::French,
            },
        }
    }

    fn caesar(shift: u8, score: f64) -> Candidate {
        Candidate::Caesar {
            key: CaesarKey::new(shift).unwrap(),
            outcome: outcome("texte", score),
        }
    }

    #[test]
    fn test_rank_is_descending_and_stable() {
        let mut candidates = vec![caesar(1, 10.0), caesar(2, 50.0), caesar(3, 10.0), caesar(4, 75.0)];
        rank(&mut candidates);

        let shifts: Vec<String> = candidates.iter().map(|c| c.key().to_string()).collect();
        assert_eq!(shifts, vec!["shift=4", "shift=2", "shift=1", "shift=3"]);
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let candidate = Candidate::Affine {
            key: AffineKey::new(5, 8).unwrap(),
            outcome: outcome("été chaud", 0.0),
        };
        assert_eq!(candidate.excerpt(3), "été");
        assert_eq!(candidate.excerpt(100), "été chaud");
        assert_eq!(candidate.family(), CipherFamily::Affine);
    }

    #[test]
    fn test_json_keys_are_flat() {
        let value = serde_json::to_value(caesar(3, 10.0)).unwrap();
        assert_eq!(value["cipher"], "caesar");
        assert_eq!(value["key"], 3);

        let vigenere = Candidate::Vigenere {
            key: VigenereKey::new("SOLEIL").unwrap(),
            estimate: KeyLengthEstimate {
                length: 6,
                score: 0.9,
                average_ic: 0.07,
                kasiski_votes: 4,
            },
            outcome: outcome("texte", 10.0),
        };
        let value = serde_json::to_value(&vigenere).unwrap();
        assert_eq!(value["cipher"], "vigenere");
        assert_eq!(value["key"], "SOLEIL");
        assert_eq!(value["estimate"]["length"], 6);
    }
}
