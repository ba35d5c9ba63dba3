//! Configuration management for gridfill.
//!
//! This module handles the layered configuration system with the following
//! precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{GridfillError, Result};

/// Largest supported `decimals` setting; an f64 carries no more precision
const MAX_DECIMALS: u32 = 17;

/// Command-line arguments for gridfill
#[derive(Parser, Debug)]
#[command(name = "gridfill")]
#[command(author, version, long_about = None)]
#[command(
    about = "Replaces missing values in a CSV table with the average of their neighboring values"
)]
pub struct Args {
    /// Input CSV file: comma-delimited numeric data, newline-separated rows,
    /// `nan` denoting missing values
    pub input_file: PathBuf,

    /// Output CSV file name
    pub output_file: PathBuf,

    /// Allow overwriting the output file if it already exists
    #[arg(long, env = "GRIDFILL_OVERWRITE")]
    pub overwrite: bool,

    /// Number of decimal places to which output is rounded [default: 7]
    #[arg(long, env = "GRIDFILL_DECIMALS")]
    pub decimals: Option<u32>,

    /// Include diagonal neighbors when averaging
    #[arg(long, env = "GRIDFILL_DIAGONALS")]
    pub diagonals: bool,

    /// Interpolation method [default: neighbor-mean]
    #[arg(long, env = "GRIDFILL_METHOD")]
    pub method: Option<String>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "GRIDFILL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error) [default: info]
    #[arg(long, env = "GRIDFILL_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Number of decimal places in exported values
    #[serde(default = "default_decimals")]
    pub decimals: u32,

    /// Whether an existing output file may be replaced
    #[serde(default)]
    pub overwrite: bool,
}

/// Interpolation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpolationConfig {
    /// Interpolation method
    #[serde(default = "default_method")]
    pub method: String,

    /// Whether diagonal neighbors participate in the mean
    #[serde(default)]
    pub use_diagonals: bool,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Interpolation configuration
    #[serde(default)]
    pub interpolation: InterpolationConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Returns the merged config plus the input and output paths, which only
    /// ever come from the command line.
    pub fn load() -> Result<(Self, PathBuf, PathBuf)> {
        let args = Args::parse();
        Self::from_args(args)
    }

    /// Build the configuration from already-parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments, but only those actually
        // given: an absent flag must not clobber the file layer
        if let Some(decimals) = args.decimals {
            config.output.decimals = decimals;
        }
        if args.overwrite {
            config.output.overwrite = true;
        }
        if args.diagonals {
            config.interpolation.use_diagonals = true;
        }
        if let Some(method) = args.method {
            config.interpolation.method = method;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        Ok((config, args.input_file, args.output_file))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.output = other.output;
        self.interpolation = other.interpolation;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate decimals: beyond f64 precision the rounding factor
        // overflows and every exported value degrades
        if self.output.decimals > MAX_DECIMALS {
            return Err(GridfillError::Config {
                message: format!(
                    "Invalid decimals: {}. Must be at most {}",
                    self.output.decimals, MAX_DECIMALS
                ),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(GridfillError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        // Validate interpolation method
        match self.interpolation.method.as_str() {
            "neighbor-mean" => {}
            _ => {
                return Err(GridfillError::Config {
                    message: format!(
                        "Invalid interpolation method: {}. Must be: neighbor-mean",
                        self.interpolation.method
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            interpolation: InterpolationConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            overwrite: false,
        }
    }
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            use_diagonals: false,
        }
    }
}

// Default value functions for serde
fn default_decimals() -> u32 {
    7
}

fn default_method() -> String {
    "neighbor-mean".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
