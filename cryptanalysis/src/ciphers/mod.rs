//! Classical cipher implementations

pub mod affine;
pub mod caesar;
pub mod vigenere;

pub use affine::AffineKey;
pub use caesar::CaesarKey;
pub use vigenere::VigenereKey;
