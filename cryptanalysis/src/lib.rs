//! # Cryptanalysis Library
//!
//! Ciphertext-only attacks on classical substitution ciphers. Every hypothesis
//! is decrypted, scored for plausibility and ranked; nothing is assumed certain.
//!
//! ## Supported Ciphers
//!
//! - **Caesar** - exhaustive search over the 25 non-zero shifts
//! - **Affine** - exhaustive search over the 312 invertible `(a, b)` keys
//! - **Vigenère** - Kasiski + index-of-coincidence key-length estimation,
//!   then chi-squared solving of every key column
//!
//! ## Usage
//!
//! ```rust
//! use cryptanalysis::{AnalysisOptions, Analyzer, Language, Lexicon};
//!
//! // Word lists are loaded once and shared by reference
//! let lexicon = Lexicon::builtin();
//! let options = AnalysisOptions::default().with_language(Language::French).with_limit(3);
//! let analyzer = Analyzer::new(&lexicon, options);
//!
//! let candidates = analyzer.analyze("DFDJ FTU VO UFTU TFDSFU")?;
//! assert_eq!(candidates[0].plaintext(), "CECI EST UN TEST SECRET");
//! # Ok::<(), cryptanalysis::CryptanalysisError>(())
//! ```

// Public modules
pub mod analysis;
pub mod analyzer;
pub mod candidate;
pub mod cipher;
pub mod ciphers;
pub mod error;
pub mod language;
pub mod scoring;
pub mod stats;
pub mod text;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_fixtures;

// Re-exports for easy access
pub use analysis::KeyLengthEstimate;
pub use analyzer::{AnalysisOptions, Analyzer};
pub use candidate::Candidate;
pub use cipher::{CipherFamily, CipherKey, SubstitutionCipher};
pub use ciphers::{AffineKey, CaesarKey, VigenereKey};
pub use error::{CryptanalysisError, Result};
pub use language::{FrequencyTable, Language, Lexicon};
pub use scoring::{Metrics, Outcome, Scorer};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
