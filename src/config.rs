//! Session configuration read from the environment.
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const SEED_VAR: &str = "ENDGAME_SEED";
pub const WORDS_FILE_VAR: &str = "ENDGAME_WORDS_FILE";
pub const LOG_DIR_VAR: &str = "ENDGAME_LOG_DIR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError
{
    #[error("{key} must be {expected}, got '{value}'")]
    InvalidValue
    {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig
{
    /// Fixed seed for reproducible rounds; OS entropy when absent.
    pub seed: Option<u64>,
    /// Word list to play with instead of the built-in bank.
    pub words_file: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl GameConfig
{
    /// Environment variables:
    /// - `ENDGAME_SEED` - u64 seed for word and farewell selection
    /// - `ENDGAME_WORDS_FILE` - path to a word list, one word per line
    /// - `ENDGAME_LOG_DIR` - directory for the log file (default: platform cache dir)
    pub fn from_env() -> Result<Self, ConfigError>
    {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SEED_VAR) {
            let seed = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: SEED_VAR,
                value: value.clone(),
                expected: "an unsigned 64-bit integer",
            })?;
            config.seed = Some(seed);
        }

        config.words_file = non_empty(lookup(WORDS_FILE_VAR)).map(PathBuf::from);
        config.log_dir = non_empty(lookup(LOG_DIR_VAR)).map(PathBuf::from);

        Ok(config)
    }

    /// Command-line values win over the environment.
    pub fn with_overrides(mut self, seed: Option<u64>, words_file: Option<PathBuf>) -> Self
    {
        if seed.is_some() {
            self.seed = seed;
        }
        if words_file.is_some() {
            self.words_file = words_file;
        }
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String>
{
    value.filter(|value| !value.trim().is_empty())
}
