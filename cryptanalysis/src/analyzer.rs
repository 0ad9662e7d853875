//! Runs every attack on a ciphertext and ranks the results

use log::info;

use crate::analysis::bruteforce::{crack_affine, crack_caesar, crack_vigenere, VigenereOptions};
use crate::candidate::{rank, Candidate};
use crate::cipher::CipherFamily;
use crate::error::{CryptanalysisError, Result};
use crate::language::{Language, Lexicon};
use crate::scoring::Scorer;

/// Default number of candidates shown by front ends.
pub const DEFAULT_TOP: usize = 5;

/// Analysis configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Language to score against; `None` detects it per candidate.
    pub language: Option<Language>,
    /// Maximum number of candidates returned; `None` returns all.
    pub limit: Option<usize>,
    /// Letter distribution used by chi-squared.
    pub reference: Language,
    /// Families attacked, in this order.
    pub families: Vec<CipherFamily>,
    pub vigenere: VigenereOptions,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            language: None,
            limit: None,
            // Chi-squared uses the French table even when scoring English
            reference: Language::French,
            families: CipherFamily::ALL.to_vec(),
            vigenere: VigenereOptions::default(),
        }
    }
}

impl AnalysisOptions {
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_reference(mut self, reference: Language) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_families(mut self, families: &[CipherFamily]) -> Self {
        self.families = families.to_vec();
        self
    }

    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.vigenere.max_key_length = max_key_length;
        self
    }
}

/// Ciphertext-only analysis over a shared [`Lexicon`].
#[derive(Debug, Clone)]
pub struct Analyzer<'a> {
    lexicon: &'a Lexicon,
    options: AnalysisOptions,
}

impl<'a> Analyzer<'a> {
    pub fn new(lexicon: &'a Lexicon, options: AnalysisOptions) -> Self {
        Self { lexicon, options }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Attacks `ciphertext` with every configured family.
    ///
    /// # Returns
    ///
    /// Candidates by descending score; equal scores keep production order
    /// (family order, then trial order). Truncated to `options.limit`.
    ///
    /// # Errors
    ///
    /// [`CryptanalysisError::EmptyInput`] if the ciphertext is empty. Blank text
    /// is still analysed.
    pub fn analyze(&self, ciphertext: &str) -> Result<Vec<Candidate>> {
        if ciphertext.is_empty() {
            return Err(CryptanalysisError::EmptyInput);
        }

        info!(
            "Analysing {} characters ({})",
            ciphertext.chars().count(),
            self.options
                .language
                .map(|l| l.to_string())
                .unwrap_or_else(|| "language auto-detected".to_string())
        );

        let scorer = Scorer::new(self.lexicon, self.options.reference.letter_frequencies());
        let language = self.options.language;
        let mut candidates: Vec<Candidate> = Vec::new();

        for family in &self.options.families {
            let found = match family {
                CipherFamily::Caesar => crack_caesar(ciphertext, &scorer, language),
                CipherFamily::Affine => crack_affine(ciphertext, &scorer, language),
                CipherFamily::Vigenere => crack_vigenere(ciphertext, &scorer, language, &self.options.vigenere),
            };
            info!("{} candidates: {}", family, found.len());
            candidates.extend(found);
        }

        rank(&mut candidates);

        if let Some(limit) = self.options.limit {
            candidates.truncate(limit);
        }

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ciphers::{affine, vigenere};
    use crate::test_fixtures::LONG_FRENCH_TEXT;

    #[test]
    fn test_empty_input_fails_fast() {
        let lexicon = Lexicon::builtin();
        let analyzer = Analyzer::new(&lexicon, AnalysisOptions::default());
        assert_eq!(analyzer.analyze(""), Err(CryptanalysisError::EmptyInput));
    }

    #[test]
    fn test_blank_input_is_analysed() {
        let lexicon = Lexicon::empty();
        let analyzer = Analyzer::new(&lexicon, AnalysisOptions::default());
        let candidates = analyzer.analyze("  \n\t").unwrap();

        // Too short for Vigenere
        assert_eq!(candidates.len(), 25 + 312);
        assert!(candidates.iter().all(|c| c.plaintext() == "  \n\t"));
    }

    #[test]
    fn test_caesar_message_ranks_first() {
        let lexicon = Lexicon::builtin();
        let analyzer = Analyzer::new(&lexicon, AnalysisOptions::default().with_language(Language::French));
        let candidates = analyzer.analyze("DFDJ FTU VO UFTU TFDSFU").unwrap();

        // Affine a=1, b=1 decrypts identically; Caesar was produced first
        assert_eq!(candidates[0].family(), CipherFamily::Caesar);
        assert_eq!(candidates[0].plaintext(), "CECI EST UN TEST SECRET");
        assert_eq!(candidates[1].plaintext(), "CECI EST UN TEST SECRET");
    }

    #[test]
    fn test_all_families_are_searched() {
        let lexicon = Lexicon::empty();
        let analyzer = Analyzer::new(&lexicon, AnalysisOptions::default());
        let candidates = analyzer.analyze("Wkh txlfn eurzq ira mxpsv").unwrap();

        // 25 Caesar + 312 affine + 3 Vigenere hypotheses
        assert_eq!(candidates.len(), 25 + 312 + 3);
    }

    #[test]
    fn test_limit_and_families() {
        let lexicon = Lexicon::builtin();
        let ciphertext = affine::encrypt("LA SECURITE EST IMPORTANTE", 5, 8);
        let options = AnalysisOptions::default()
            .with_language(Language::French)
            .with_families(&[CipherFamily::Affine])
            .with_limit(3);

        let candidates = Analyzer::new(&lexicon, options).analyze(&ciphertext).unwrap();
        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|c| c.family() == CipherFamily::Affine));
        assert_eq!(candidates[0].plaintext(), "LA SECURITE EST IMPORTANTE");
    }

    #[test]
    fn test_vigenere_ranks_first_on_long_text() {
        let lexicon = Lexicon::builtin();
        let ciphertext = vigenere::encrypt(LONG_FRENCH_TEXT, "SOLEIL");
        let analyzer = Analyzer::new(&lexicon, AnalysisOptions::default().with_limit(DEFAULT_TOP));

        let candidates = analyzer.analyze(&ciphertext).unwrap();
        assert_eq!(candidates.len(), DEFAULT_TOP);
        assert_eq!(candidates[0].family(), CipherFamily::Vigenere);
        assert_eq!(candidates[0].plaintext(), LONG_FRENCH_TEXT);
        assert_eq!(candidates[0].metrics().language, Language::French);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let lexicon = Lexicon::builtin();
        let analyzer = Analyzer::new(&lexicon, AnalysisOptions::default());
        let ciphertext = "Oh ghfubswdjh hvw xq vxffhv";

        let first = analyzer.analyze(ciphertext).unwrap();
        let second = analyzer.analyze(ciphertext).unwrap();
        assert_eq!(first, second);
    }
}
