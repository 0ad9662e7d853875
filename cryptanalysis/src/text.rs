//! Text normalization: strip everything but letters, and put it back afterwards

use serde::Serialize;

use crate::error::{CryptanalysisError, Result};

/// A character removed by [`clean`] together with its original position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Removed {
    pub index: usize,
    pub ch: char,
}

/// Uppercase letters of a text plus the positions of everything that was stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    letters: String,
    removed: Vec<Removed>,
}

impl CleanedText {
    /// The uppercase letters, in order.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Number of letters kept.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Removed characters in ascending index order.
    pub fn position_index(&self) -> &[Removed] {
        &self.removed
    }

    /// Reinserts the removed characters into `letters`, which must be a
    /// same-length substitution of [`CleanedText::letters`].
    pub fn restore(&self, letters: &str) -> Result<String> {
        restore(letters, &self.removed)
    }
}

/// Removes every non-letter and uppercases the rest.
///
/// Indices in the position index count `char`s of the original text, so
/// `letters + removed` always equals the original character count.
pub fn clean(text: &str) -> CleanedText {
    let mut letters: String = String::with_capacity(text.len());
    let mut removed: Vec<Removed> = Vec::new();

    for (index, ch) in text.chars().enumerate() {
        if ch.is_ascii_alphabetic() {
            letters.push(ch.to_ascii_uppercase());
        } else {
            removed.push(Removed { index, ch });
        }
    }

    CleanedText { letters, removed }
}

/// Uppercase ASCII letters only, without recording what was dropped.
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Splits text into word tokens: maximal runs of alphanumeric characters or `_`.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
}

/// Rebuilds a text by inserting each removed character at its recorded index.
///
/// Letters left over after the last recorded index are appended. Fails with
/// [`CryptanalysisError::Reconstruction`] when `letters` is too short to reach
/// a recorded index, or when the index is not strictly ascending.
pub fn restore(letters: &str, removed: &[Removed]) -> Result<String> {
    let mut result: String = String::with_capacity(letters.len() + removed.len());
    let mut remaining = letters.chars();
    let mut written: usize = 0;

    for entry in removed {
        while written < entry.index {
            match remaining.next() {
                Some(c) => {
                    result.push(c);
                    written += 1;
                }
                None => {
                    return Err(CryptanalysisError::Reconstruction {
                        index: entry.index,
                        available: written,
                    })
                }
            }
        }

        if written != entry.index {
            return Err(CryptanalysisError::Reconstruction {
                index: entry.index,
                available: written,
            });
        }

        result.push(entry.ch);
        written += 1;
    }

    result.extend(remaining);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_records_removed_positions() {
        let cleaned = clean("Le chat, noir!");
        assert_eq!(cleaned.letters(), "LECHATNOIR");

        let indices: Vec<usize> = cleaned.position_index().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![2, 7, 8, 13]);
        assert_eq!(cleaned.position_index()[1].ch, ',');
    }

    #[test]
    fn test_clean_length_invariant() {
        let original = "Été: 42 jours, à Paris.";
        let cleaned = clean(original);
        assert_eq!(
            cleaned.len() + cleaned.position_index().len(),
            original.chars().count()
        );
    }

    #[test]
    fn test_restore_round_trip() {
        let original = "Hello, World! 2024";
        let cleaned = clean(original);
        let restored = cleaned.restore(cleaned.letters()).unwrap();
        assert_eq!(restored, "HELLO, WORLD! 2024");
    }

    #[test]
    fn test_restore_substituted_letters() {
        let cleaned = clean("ab cd");
        assert_eq!(cleaned.restore("WXYZ").unwrap(), "WX YZ");
    }

    #[test]
    fn test_restore_appends_extra_letters() {
        let removed = [Removed { index: 1, ch: ' ' }];
        assert_eq!(restore("ABC", &removed).unwrap(), "A BC");
    }

    #[test]
    fn test_restore_overrun_is_an_error() {
        let cleaned = clean("abc def");
        let err = cleaned.restore("AB").unwrap_err();
        assert_eq!(
            err,
            CryptanalysisError::Reconstruction { index: 3, available: 2 }
        );
    }

    #[test]
    fn test_restore_rejects_unsorted_index() {
        let removed = [Removed { index: 2, ch: ' ' }, Removed { index: 1, ch: ' ' }];
        assert!(matches!(
            restore("ABCD", &removed),
            Err(CryptanalysisError::Reconstruction { index: 1, .. })
        ));
    }

    #[test]
    fn test_words_split_on_boundaries() {
        let tokens: Vec<&str> = words("l'homme, 2 chats_noirs!  -- fin").collect();
        assert_eq!(tokens, vec!["l", "homme", "2", "chats_noirs", "fin"]);
        assert_eq!(words(" ,;! ").count(), 0);
    }

    #[test]
    fn test_letters_only() {
        assert_eq!(letters_only("a-b C!"), "ABC");
        assert_eq!(letters_only(""), "");
    }
}
