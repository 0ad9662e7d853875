//! Plausibility scoring of candidate plaintexts

use serde::Serialize;

use crate::language::{FrequencyTable, Language, Lexicon};
use crate::stats;
use crate::text;

/// Weight of the dictionary-word ratio in the composite score.
pub const WORD_WEIGHT: f64 = 50.0;

/// Weight of the stop-word ratio in the composite score.
pub const STOPWORD_WEIGHT: f64 = 100.0;

/// Share of dictionary words above which a decryption is considered credible.
pub const CONFIDENT_WORD_RATIO: f64 = 0.4;

/// Per-candidate metric breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub entropy: f64,
    pub ic: f64,
    pub valid_ratio: f64,
    pub stop_ratio: f64,
    pub chi_squared: f64,
    pub language: Language,
}

impl Metrics {
    /// Raw features for an external classifier: `[ic, entropy, valid_ratio, stop_ratio]`.
    pub fn features(&self) -> [f64; 4] {
        [self.ic, self.entropy, self.valid_ratio, self.stop_ratio]
    }
}

/// A plaintext together with its composite score and metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub plaintext: String,
    pub score: f64,
    pub metrics: Metrics,
}

impl Outcome {
    /// True when more than [`CONFIDENT_WORD_RATIO`] of the tokens are known words.
    pub fn is_confident(&self) -> bool {
        self.metrics.valid_ratio > CONFIDENT_WORD_RATIO
    }
}

/// Scores plaintexts against a [`Lexicon`] and a reference letter distribution.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    lexicon: &'a Lexicon,
    reference: &'a FrequencyTable,
}

impl<'a> Scorer<'a> {
    pub fn new(lexicon: &'a Lexicon, reference: &'a FrequencyTable) -> Self {
        Self { lexicon, reference }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn reference(&self) -> &'a FrequencyTable {
        self.reference
    }

    /// Computes the metric breakdown of `plaintext` for `language`.
    ///
    /// `None` detects the language from the plaintext itself.
    pub fn metrics(&self, plaintext: &str, language: Option<Language>) -> Metrics {
        let language = language.unwrap_or_else(|| self.lexicon.detect_language(plaintext));
        let sets = self.lexicon.sets(language);

        let tokens: Vec<String> = text::words(plaintext).map(str::to_uppercase).collect();
        let total = tokens.len();

        let (valid_ratio, stop_ratio) = if total == 0 {
            (0.0, 0.0)
        } else {
            let valid = tokens.iter().filter(|t| sets.is_word(t)).count();
            let stop = tokens
                .iter()
                .filter(|t| sets.is_stopword(&t.to_lowercase()))
                .count();
            (valid as f64 / total as f64, stop as f64 / total as f64)
        };

        Metrics {
            entropy: stats::entropy(plaintext),
            ic: stats::index_of_coincidence(plaintext),
            valid_ratio,
            stop_ratio,
            chi_squared: stats::chi_squared(plaintext, self.reference),
            language,
        }
    }

    /// Scores a plaintext: `50 * valid_ratio + 100 * stop_ratio`.
    pub fn score(&self, plaintext: String, language: Option<Language>) -> Outcome {
        let metrics = self.metrics(&plaintext, language);
        let score = composite(&metrics);
        Outcome { plaintext, score, metrics }
    }
}

/// Composite rank of a metric breakdown. Entropy, IC and chi-squared are
/// informational and do not contribute.
pub fn composite(metrics: &Metrics) -> f64 {
    WORD_WEIGHT * metrics.valid_ratio + STOPWORD_WEIGHT * metrics.stop_ratio
}
