//! Language reference data: letter frequencies, dictionaries and stop-words

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;

use crate::error::{CryptanalysisError, Result};
use crate::text;

/// Languages with reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::French, Language::English];

    /// Language used when detection has nothing to go on.
    pub const FALLBACK: Language = Language::French;

    /// Two-letter tag (`fr`, `en`), also used in data file names.
    pub fn code(&self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
        }
    }

    /// Expected letter frequencies (percentages) for this language.
    pub fn letter_frequencies(&self) -> &'static FrequencyTable {
        match self {
            Language::French => &FRENCH_FREQUENCIES,
            Language::English => &ENGLISH_FREQUENCIES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = CryptanalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" | "french" | "francais" => Ok(Language::French),
            "en" | "english" | "anglais" => Ok(Language::English),
            other => Err(CryptanalysisError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Expected relative frequency of each letter A-Z, in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable([f64; 26]);

impl FrequencyTable {
    pub const fn new(percentages: [f64; 26]) -> Self {
        Self(percentages)
    }

    /// Percentage for the letter at alphabet position `index` (A = 0).
    pub fn percent(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(0.0)
    }
}

/// French letter frequencies for frequency analysis
pub static FRENCH_FREQUENCIES: FrequencyTable = FrequencyTable::new([
    7.6, 0.9, 3.3, 3.7, 14.7, 1.1, 0.9, 0.7,
    7.5, 0.5, 0.05, 5.5, 3.0, 7.1, 5.4, 3.0,
    1.4, 6.6, 7.9, 7.2, 6.3, 1.6, 0.1, 0.4,
    0.3, 0.1,
]);

/// English letter frequencies for frequency analysis
pub static ENGLISH_FREQUENCIES: FrequencyTable = FrequencyTable::new([
    8.17, 1.49, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09,
    6.97, 0.15, 0.77, 4.03, 2.41, 6.75, 7.51, 1.93,
    0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15,
    1.97, 0.07,
]);

/// Dictionary (uppercase) and stop-words (lowercase) of one language.
#[derive(Debug, Clone, Default)]
pub struct WordSets {
    words: HashSet<String>,
    stopwords: HashSet<String>,
}

impl WordSets {
    pub fn new<W, S>(words: W, stopwords: S) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().trim().to_uppercase()).collect(),
            stopwords: stopwords.into_iter().map(|w| w.as_ref().trim().to_lowercase()).collect(),
        }
    }

    /// Whether an uppercase token is a known word.
    pub fn is_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Whether a lowercase token is a stop-word.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}

/// Read-only word lists for every supported language.
///
/// Built once, then shared by reference with the scorer and the solvers.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    french: WordSets,
    english: WordSets,
}

impl Lexicon {
    /// A lexicon without any words; every ratio scores 0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Word lists compiled into the library.
    pub fn builtin() -> Self {
        Self {
            french: WordSets::new(
                include_str!("../data/words_fr.txt").lines().filter(|l| !l.trim().is_empty()),
                include_str!("../data/stopwords_fr.txt").lines().filter(|l| !l.trim().is_empty()),
            ),
            english: WordSets::new(
                include_str!("../data/words_en.txt").lines().filter(|l| !l.trim().is_empty()),
                include_str!("../data/stopwords_en.txt").lines().filter(|l| !l.trim().is_empty()),
            ),
        }
    }

    /// Loads `words_<lang>.txt` and `stopwords_<lang>.txt` from `dir`.
    ///
    /// Missing or unreadable files yield empty sets.
    pub fn from_dir(dir: &Path) -> Self {
        let mut lexicon = Self::empty();
        for language in Language::ALL {
            let sets = WordSets {
                words: load_words(dir, language),
                stopwords: load_stopwords(dir, language),
            };
            lexicon = lexicon.with(language, sets);
        }
        lexicon
    }

    /// Replaces the word sets of one language.
    pub fn with(mut self, language: Language, sets: WordSets) -> Self {
        match language {
            Language::French => self.french = sets,
            Language::English => self.english = sets,
        }
        self
    }

    pub fn sets(&self, language: Language) -> &WordSets {
        match language {
            Language::French => &self.french,
            Language::English => &self.english,
        }
    }

    /// Guesses the language of a plaintext from stop-word hits.
    ///
    /// French wins ties, including texts without any token.
    pub fn detect_language(&self, text: &str) -> Language {
        let tokens: Vec<String> = text::words(text).map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return Language::FALLBACK;
        }

        let hits = |language: Language| -> usize {
            let sets = self.sets(language);
            tokens.iter().filter(|t| sets.is_stopword(t)).count()
        };

        let french = hits(Language::French);
        let english = hits(Language::English);

        if french >= english {
            Language::French
        } else {
            Language::English
        }
    }
}

/// Reads one word per line; a missing file is an empty list.
fn read_word_file(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let words: Vec<String> = content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();
            debug!("Loaded {} entries from {}", words.len(), path.display());
            words
        }
        Err(e) => {
            warn!("Cannot read word list {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Uppercase dictionary words from `<dir>/words_<lang>.txt`.
pub fn load_words(dir: &Path, language: Language) -> HashSet<String> {
    read_word_file(&dir.join(format!("words_{}.txt", language.code())))
        .into_iter()
        .map(|w| w.to_uppercase())
        .collect()
}

/// Lowercase stop-words from `<dir>/stopwords_<lang>.txt`.
pub fn load_stopwords(dir: &Path, language: Language) -> HashSet<String> {
    read_word_file(&dir.join(format!("stopwords_{}.txt", language.code())))
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect()
}
