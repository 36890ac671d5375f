//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the dataset is read.
//!
//! ## Locating the movie file
//!
//! ### Method 1: Full path
//!
//! ```bash
//! export MOVIES_CSV="/srv/newsreel/Data1000Movies.csv"
//! ```
//!
//! ### Method 2: Directory and file name
//!
//! ```bash
//! export DATA_PATH="data"
//! export MOVIES_FILE="Data1000Movies.csv"
//! ```
//!
//! If `MOVIES_CSV` is not set, the path is built from `DATA_PATH` (default: `data`) and
//! `MOVIES_FILE` (default: `Data1000Movies.csv`).
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SIGNING_SECRET` - HMAC key for password hashes (default: a development key)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_PATH: &str = "data";
const DEFAULT_MOVIES_FILE: &str = "Data1000Movies.csv";
const DEFAULT_SIGNING_SECRET: &str = "newsreel-development-secret";

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file the catalogue is loaded from.
    pub movies_path: PathBuf,
    pub log_level: String,
    pub log_format: String,
    /// HMAC key used to hash user passwords. Never printed.
    pub signing_secret: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// All variables are optional; unset or non-UTF-8 values fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let movies_path = Self::load_movies_path();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let signing_secret =
            env::var("SIGNING_SECRET").unwrap_or_else(|_| DEFAULT_SIGNING_SECRET.to_string());

        Ok(Self {
            movies_path,
            log_level,
            log_format,
            signing_secret,
        })
    }

    /// Resolves the movie file path.
    ///
    /// Priority:
    /// 1. `MOVIES_CSV` environment variable
    /// 2. `DATA_PATH` joined with `MOVIES_FILE`
    fn load_movies_path() -> PathBuf {
        if let Ok(path) = env::var("MOVIES_CSV") {
            return PathBuf::from(path);
        }

        let dir = env::var("DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
        let file = env::var("MOVIES_FILE").unwrap_or_else(|_| DEFAULT_MOVIES_FILE.to_string());

        PathBuf::from(dir).join(file)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - the movie file does not have a `.csv` extension
    /// - `signing_secret` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let is_csv = self
            .movies_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            anyhow::bail!(
                "Movie file must have a .csv extension, got '{}'",
                self.movies_path.display()
            );
        }

        if self.signing_secret.is_empty() {
            anyhow::bail!("SIGNING_SECRET must not be empty");
        }

        Ok(())
    }

    /// Returns whether the built-in development signing secret is in use.
    pub fn uses_default_secret(&self) -> bool {
        self.signing_secret == DEFAULT_SIGNING_SECRET
    }

    /// Prints configuration summary (without the signing secret).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Movie file: {}", self.movies_path.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.uses_default_secret() {
            tracing::warn!("  Signing secret: development default");
        } else {
            tracing::info!("  Signing secret: configured");
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: only called from #[serial] tests
        unsafe {
            env::remove_var("MOVIES_CSV");
            env::remove_var("DATA_PATH");
            env::remove_var("MOVIES_FILE");
            env::remove_var("LOG_FORMAT");
            env::remove_var("SIGNING_SECRET");
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            movies_path: PathBuf::from("data/Data1000Movies.csv"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            signing_secret: "test-secret".to_string(),
        };

        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.movies_path = PathBuf::from("data/movies.txt");
        assert!(config.validate().is_err());

        config.movies_path = PathBuf::from("data/MOVIES.CSV");
        assert!(config.validate().is_ok());

        config.signing_secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(
            config.movies_path,
            PathBuf::from("data").join("Data1000Movies.csv")
        );
        assert_eq!(config.log_format, "text");
        assert!(config.uses_default_secret());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_movies_path_from_components() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATA_PATH", "/srv/newsreel");
            env::set_var("MOVIES_FILE", "movies.csv");
        }

        let path = Config::load_movies_path();

        assert_eq!(path, PathBuf::from("/srv/newsreel/movies.csv"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_movies_csv_priority() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("MOVIES_CSV", "/tmp/from-full-path.csv");
            env::set_var("DATA_PATH", "from-components");
        }

        let path = Config::load_movies_path();

        assert_eq!(path, PathBuf::from("/tmp/from-full-path.csv"));

        clear_env();
    }
}
