//! Command-line interface for imposter_word.

use clap::Parser;
use std::path::PathBuf;

/// Imposter Word - pass the device, find the imposter
#[derive(Parser, Debug)]
#[command(name = "imposter_word")]
#[command(about = "Pass-the-device party game: one player never sees the secret word", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "imposter_word.toml")]
    pub config: PathBuf,

    /// Seed for the imposter draw and word suggestions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs (the terminal belongs to the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["imposter_word"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("imposter_word.toml"));
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "imposter_word",
            "-c",
            "party.toml",
            "--seed",
            "42",
            "--log-file",
            "game.log",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("party.toml"));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_bad_seed_rejected() {
        assert!(Cli::try_parse_from(["imposter_word", "--seed", "lots"]).is_err());
    }
}
