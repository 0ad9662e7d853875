use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cryptanalysis::analysis::key_length::MAX_KEY_LENGTH;
use cryptanalysis::analyzer::DEFAULT_TOP;
use cryptanalysis::{AnalysisOptions, Analyzer, Candidate, CipherFamily, Language, Lexicon};
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;

/// Length of the plaintext excerpt printed for each candidate.
const EXCERPT_LENGTH: usize = 100;

/// Upper bound accepted by `--max-key-length`.
const KEY_LENGTH_LIMIT: u64 = 100;

/// Command-line arguments for the ciphertext-only analysis tool.
#[derive(Parser, Debug)]
#[command(
    name = "crack",
    version,
    about = "Ciphertext-only cryptanalysis of Caesar, affine and Vigenere ciphers"
)]
struct Cli {
    /// Ciphertext to analyse
    #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
    input: Option<String>,

    /// Path to a file containing the ciphertext
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: Option<PathBuf>,

    /// Number of best solutions to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Plaintext language (detected per candidate if absent)
    #[arg(short, long, value_enum)]
    lang: Option<LanguageArg>,

    /// Letter frequencies used for chi-squared
    #[arg(long, value_enum, default_value_t = LanguageArg::Fr)]
    reference: LanguageArg,

    /// Restrict the attack to these cipher families (repeatable)
    #[arg(short, long, value_enum)]
    cipher: Vec<FamilyArg>,

    /// Longest Vigenere key length considered
    #[arg(
        long,
        default_value_t = MAX_KEY_LENGTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=KEY_LENGTH_LIMIT)
    )]
    max_key_length: usize,

    /// Directory with words_<lang>.txt and stopwords_<lang>.txt (built-in lists otherwise)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Strict JSON output
    #[arg(long)]
    json: bool,

    /// Verbose logs
    #[arg(short, long)]
    verbose: bool,
}

/// Supported plaintext languages.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LanguageArg {
    /// French
    Fr,
    /// English
    En,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Fr => Language::French,
            LanguageArg::En => Language::English,
        }
    }
}

/// Cipher families that can be attacked.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum FamilyArg {
    Caesar,
    Affine,
    Vigenere,
}

impl From<FamilyArg> for CipherFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Caesar => CipherFamily::Caesar,
            FamilyArg::Affine => CipherFamily::Affine,
            FamilyArg::Vigenere => CipherFamily::Vigenere,
        }
    }
}

/// Main entry point for the analysis tool.
fn main() -> Result<(), Box<dyn Error>> {
    let cli: Cli = Cli::parse();

    // Logs would corrupt JSON output
    let level = match (cli.json, cli.verbose) {
        (true, _) => LevelFilter::Off,
        (false, true) => LevelFilter::Info,
        (false, false) => LevelFilter::Warn,
    };
    SimpleLogger::new().with_level(level).init()?;
    info!("cryptanalysis {}", cryptanalysis::VERSION);

    let ciphertext: String = match (&cli.input, &cli.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
        (None, None) => String::new(),
    };

    let lexicon: Lexicon = match &cli.data_dir {
        Some(dir) => Lexicon::from_dir(dir),
        None => Lexicon::builtin(),
    };

    let options: AnalysisOptions = build_options(&cli);
    let analyzer = Analyzer::new(&lexicon, options);

    let candidates: Vec<Candidate> = match analyzer.analyze(&ciphertext) {
        Ok(candidates) => candidates,
        Err(e) => {
            if cli.json {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
            } else {
                eprintln!("Error: {}", e);
            }
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        print_report(&candidates, cli.top);
    }

    Ok(())
}

/// Translates command-line flags into analysis options.
fn build_options(cli: &Cli) -> AnalysisOptions {
    let mut options = AnalysisOptions::default()
        .with_limit(cli.top)
        .with_reference(cli.reference.into())
        .with_max_key_length(cli.max_key_length);

    if let Some(lang) = cli.lang {
        options = options.with_language(lang.into());
    }

    if !cli.cipher.is_empty() {
        let families: Vec<CipherFamily> = cli.cipher.iter().map(|&f| f.into()).collect();
        options = options.with_families(&families);
    }

    options
}

/// Prints the ranked candidates and a verdict on the best one.
fn print_report(candidates: &[Candidate], top: usize) {
    println!("--- Top {} Solutions ---", top);

    for (rank, candidate) in candidates.iter().enumerate() {
        println!("#{} [{}] Key: {}", rank + 1, candidate.family(), candidate.key());
        println!("   Score: {:.2}", candidate.score());
        println!(
            "   Words: {:.1}%  Stop-words: {:.1}%  IC: {:.4}",
            candidate.metrics().valid_ratio * 100.0,
            candidate.metrics().stop_ratio * 100.0,
            candidate.metrics().ic
        );
        println!("   Excerpt: {}...", candidate.excerpt(EXCERPT_LENGTH));
        println!();
    }

    match candidates.first() {
        Some(best) if best.outcome().is_confident() => {
            println!(
                "Confident: the message looks like {} with key {} (words found in the '{}' dictionary).",
                best.family(),
                best.key(),
                best.metrics().language
            );
        }
        _ => {
            println!("Uncertain: few words were recognised. The text may be too short, in another language, or use another cipher.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "crack", "-i", "DFDJ FTU", "-n", "3", "-l", "en", "-c", "caesar", "-c", "vigenere",
        ])
        .unwrap();
        let options = build_options(&cli);

        assert_eq!(options.limit, Some(3));
        assert_eq!(options.language, Some(Language::English));
        assert_eq!(options.reference, Language::French);
        assert_eq!(options.families, vec![CipherFamily::Caesar, CipherFamily::Vigenere]);
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["crack"]).is_err());
        assert!(Cli::try_parse_from(["crack", "-i", "abc", "-f", "x.txt"]).is_err());
    }

    #[test]
    fn test_max_key_length_is_bounded() {
        let cli = Cli::try_parse_from(["crack", "-i", "abc", "--max-key-length", "100"]).unwrap();
        assert_eq!(build_options(&cli).vigenere.max_key_length, 100);

        assert!(Cli::try_parse_from(["crack", "-i", "abc", "--max-key-length", "101"]).is_err());
        assert!(Cli::try_parse_from(["crack", "-i", "abc", "--max-key-length", "0"]).is_err());
    }

    #[test]
    fn test_defaults_run_every_family() {
        let cli = Cli::try_parse_from(["crack", "--input", "abc"]).unwrap();
        let options = build_options(&cli);
        assert_eq!(options.families, CipherFamily::ALL.to_vec());
        assert_eq!(options.vigenere.max_key_length, MAX_KEY_LENGTH);
        assert_eq!(options.language, None);
    }
}
