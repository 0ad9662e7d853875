use std::error::Error;

use clap::{Parser, ValueEnum};
use cryptanalysis::{AffineKey, CaesarKey, CipherKey, SubstitutionCipher, VigenereKey};

/// Command-line arguments for the classical cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Cipher family
    #[arg(short, long, value_enum, help = "Cipher to use")]
    cipher: CipherArg,

    /// Key: a shift for Caesar, "a,b" for affine, a word for Vigenère
    #[arg(short, long, help = "Key for the cipher (e.g. 3, 5,8 or LEMON)")]
    key: String,

    /// Path to the output file where result will be saved (stdout if absent)
    #[arg(short, long, help = "Path to the output file")]
    output: Option<String>,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, value_enum, default_value_t = OperationMode::Encrypt)]
    mode: OperationMode,
}

/// Enum representing the cipher family.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CipherArg {
    Caesar,
    Affine,
    Vigenere,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the classical cipher program.
fn main() -> Result<(), Box<dyn Error>> {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    let key: CipherKey = parse_key(cli.cipher, &cli.key)?;

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)
        .map_err(|e| format!("Failed to read {}: {}", cli.file, e))?;

    // Process based on selected mode
    let result: String = match cli.mode {
        OperationMode::Encrypt => key.encrypt(&content),
        OperationMode::Decrypt => key.decrypt(&content)?,
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &result).map_err(|e| format!("Failed to write {}: {}", path, e))?;
            println!("Operation completed successfully! Output saved to: {}", path);
        }
        None => println!("{}", result),
    }

    Ok(())
}

/// Parses the `--key` argument for the selected cipher.
///
/// # Arguments
///
/// * `cipher` - The cipher family the key belongs to.
/// * `raw` - The key as typed: `3`, `5,8` or `LEMON`.
///
/// # Returns
///
/// A validated [`CipherKey`], or an error describing why the key is unusable.
fn parse_key(cipher: CipherArg, raw: &str) -> Result<CipherKey, Box<dyn Error>> {
    let key = match cipher {
        CipherArg::Caesar => {
            let shift: u8 = raw.trim().parse()?;
            CipherKey::Caesar(CaesarKey::new(shift % 26)?)
        }
        CipherArg::Affine => {
            let (a, b) = raw
                .split_once(',')
                .ok_or_else(|| format!("Affine key must look like a,b (got {:?})", raw))?;
            CipherKey::Affine(AffineKey::new(a.trim().parse()?, b.trim().parse()?)?)
        }
        CipherArg::Vigenere => CipherKey::Vigenere(VigenereKey::new(raw)?),
    };

    Ok(key)
}
