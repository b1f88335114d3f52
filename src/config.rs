use std::env;
use std::path::PathBuf;
use reqwest::Url;
use crate::error::{AppError, Result};

pub const DEFAULT_INPUT_PATH: &str = "COMET_markiert_merged.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";
pub const DEFAULT_BASE_URL: &str = "http://localhost:9696";

#[derive(Clone, Debug)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub base_url: Url,
    pub check_status: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        // A missing .env is fine; plain environment variables still apply
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to the fixed defaults
    /// for keys that are absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input_path = lookup("INPUT_PATH").unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string());
        let output_path = lookup("OUTPUT_PATH").unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

        let base_url = lookup("COMPLETENESS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid base URL '{}': {}", base_url, e)))?;

        let check_status = match lookup("CHECK_STATUS") {
            Some(value) => parse_flag(&value)?,
            None => false,
        };

        Ok(Config {
            input_path: PathBuf::from(input_path),
            output_path: PathBuf::from(output_path),
            base_url,
            check_status,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            check_status: false,
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(AppError::ConfigError(format!("Invalid boolean flag: {}", other))),
    }
}
