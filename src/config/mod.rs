use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sudoku-audit")]
#[command(about = "Validates a solved 9x9 Sudoku grid concurrently")]
pub struct CliConfig {
    /// Path to a file holding at least 81 digit characters, row-major.
    pub input: String,

    #[arg(long, default_value = "4", help = "Number of scan workers")]
    pub workers: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process stats at phase boundaries")]
    pub monitor: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input", &self.input)?;
        validate_positive_number("workers", self.workers, 1)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn workers(&self) -> usize {
        self.workers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(input: &str, workers: usize) -> CliConfig {
        CliConfig {
            input: input.to_string(),
            workers,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn accepts_sane_defaults() {
        assert!(config("grid.txt", 4).validate().is_ok());
    }

    #[test]
    fn rejects_empty_input_path() {
        assert!(config("", 4).validate().is_err());
    }

    #[test]
    fn rejects_zero_workers() {
        assert!(config("grid.txt", 0).validate().is_err());
    }
}
