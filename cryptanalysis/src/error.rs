//! Error types for cipher and analysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptanalysisError {
    #[error("Empty input (nothing to analyse)")]
    EmptyInput,

    #[error("No modular inverse for a = {a} modulo 26")]
    NoModularInverse { a: u32 },

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Cannot restore removed character at index {index}: only {available} characters available")]
    Reconstruction { index: usize, available: usize },

    #[error("Unknown language tag: {0}")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, CryptanalysisError>;
