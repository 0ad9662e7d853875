//! Letter arithmetic shared by the ciphers and the statistics

/// Size of the Latin alphabet every cipher in this crate works over.
pub const ALPHABET_SIZE: u32 = 26;

/// Counts the frequency of each letter in the given text.
///
/// # Arguments
///
/// * `content` - The input text to analyze.
///
/// # Returns
///
/// An array of 26 frequencies for letters A-Z, case-insensitive.
pub fn count_frequencies(content: &str) -> [u32; 26] {
    let mut frequencies: [u32; 26] = [0; 26];

    for c in content.chars() {
        if c.is_ascii_alphabetic() {
            // Convert to uppercase and calculate array index (A=0, B=1, etc.)
            let index: usize = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            frequencies[index] += 1;
        }
    }

    frequencies
}

/// Applies `map` to the alphabet position of an ASCII letter, keeping its case.
///
/// Anything that is not an ASCII letter is returned unchanged.
pub fn map_letter<F>(c: char, map: F) -> char
where
    F: Fn(u32) -> u32,
{
    if !c.is_ascii_alphabetic() {
        return c;
    }

    // Determine base character ('A' or 'a') to preserve case
    let base: u8 = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    let position: u32 = (c as u8 - base) as u32;
    let mapped: u32 = map(position) % ALPHABET_SIZE;

    (base + mapped as u8) as char
}

/// Shifts an ASCII letter by `shift` positions, wrapping around the alphabet.
pub fn shift_letter(c: char, shift: i32) -> char {
    let shift: u32 = shift.rem_euclid(ALPHABET_SIZE as i32) as u32;
    map_letter(c, |x| x + shift)
}

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Multiplicative inverse of `a` modulo `m` via the extended Euclidean algorithm.
///
/// Returns `None` when `gcd(a, m) != 1`.
pub fn mod_inverse(a: u32, m: u32) -> Option<u32> {
    if m == 0 {
        return None;
    }

    let (mut old_r, mut r) = (a as i64 % m as i64, m as i64);
    let (mut old_s, mut s) = (1i64, 0i64);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }

    if old_r != 1 {
        return None;
    }

    Some(old_s.rem_euclid(m as i64) as u32)
}

/// Splits text into `key_length` interleaved columns.
///
/// Column `i` holds the characters at positions `≡ i (mod key_length)`.
pub fn split_into_columns(text: &str, key_length: usize) -> Vec<String> {
    if key_length == 0 {
        return Vec::new();
    }

    let mut columns: Vec<String> = vec![String::new(); key_length];

    for (i, c) in text.chars().enumerate() {
        columns[i % key_length].push(c);
    }

    columns
}
