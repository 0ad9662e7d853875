//! Attacks: key-length estimation, column solving and exhaustive search

pub mod bruteforce;
pub mod column;
pub mod key_length;

pub use bruteforce::{crack_affine, crack_caesar, crack_vigenere, VigenereOptions};
pub use column::{solve_column, solve_key};
pub use key_length::{estimate_key_lengths, KeyLengthEstimate};
