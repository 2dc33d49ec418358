use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_STRATEGY: &str = "wordCount";
pub const DEFAULT_DECORATOR: &str = "none";

/// Settings for a single run, built once at startup.
///
/// `strategy` and `decorator` are kept as the raw names the user gave; they
/// are only resolved by the runner, after the input file has been loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub strategy: String,
    pub decorator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            strategy: DEFAULT_STRATEGY.to_string(),
            decorator: DEFAULT_DECORATOR.to_string(),
        }
    }
}
