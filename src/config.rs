//! Command-line configuration for the `boolexpr` binary.

use std::path::PathBuf;

use thiserror::Error;

/// File read when no path is given.
pub const DEFAULT_INPUT: &str = "input.txt";

pub const USAGE: &str = "usage: boolexpr [--timings] [PATH]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source file holding one assignment statement
    pub input: PathBuf,
    /// Print how long each phase took
    pub timings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            timings: false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown option {0:?}")]
    UnknownOption(String),
    #[error("expected at most one input path, got {0:?} and {1:?}")]
    TooManyInputs(String, String),
}

impl Config {
    /// Builds a config from the arguments after the program name.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut input: Option<String> = None;

        for arg in args {
            match arg.as_str() {
                "--timings" => config.timings = true,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownOption(arg));
                }
                _ => {
                    if let Some(previous) = input {
                        return Err(ConfigError::TooManyInputs(previous, arg));
                    }
                    input = Some(arg);
                }
            }
        }

        if let Some(input) = input {
            config.input = PathBuf::from(input);
        }

        Ok(config)
    }
}
