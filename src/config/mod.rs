//! Configuration management for the moodtrack application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODTRACK_DIR`: Directory holding the mood table (defaults to ~/.local/share/moodtrack)
//! - `MOODTRACK_OLLAMA_URL`: Ollama endpoint for suggestions (defaults to http://127.0.0.1:11434)
//! - `MOODTRACK_CHAT_MODEL`: Chat model for suggestions (defaults to llama3.2:3b)
//! - `MOODTRACK_SAMPLE_ENTRIES`: Number of entries created by seeding (defaults to 20)
//! - `MOODTRACK_AUTO_SEED`: Seed sample data at startup when set to `1` or `true`
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DATA_FILE_NAME, DEFAULT_CHAT_MODEL, DEFAULT_DATA_SUBDIR, DEFAULT_OLLAMA_URL,
    DEFAULT_SAMPLE_ENTRIES, ENV_VAR_AUTO_SEED, ENV_VAR_CHAT_MODEL, ENV_VAR_HOME,
    ENV_VAR_MOODTRACK_DIR, ENV_VAR_OLLAMA_URL, ENV_VAR_SAMPLE_ENTRIES, EXPORT_FILE_NAME,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the moodtrack application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodtrack::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
///     ..Config::default()
/// };
/// assert!(config.data_file().ends_with("mood_data.csv"));
/// ```
#[derive(Clone)]
pub struct Config {
    /// Directory where the mood table and exports are stored.
    pub data_dir: PathBuf,

    /// Base URL of the Ollama API used for suggestions.
    pub ollama_url: String,

    /// Chat model used for suggestions.
    pub chat_model: String,

    /// Number of synthetic entries written by sample seeding.
    pub sample_entries: usize,

    /// Whether to seed sample data into an empty table at startup.
    pub auto_seed: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .field("ollama_url", &self.ollama_url)
            .field("chat_model", &self.chat_model)
            .field("sample_entries", &self.sample_entries)
            .field("auto_seed", &self.auto_seed)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(""),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            sample_entries: DEFAULT_SAMPLE_ENTRIES,
            auto_seed: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory is expanded with `shellexpand`, so `~` and
    /// environment variable references are allowed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - `MOODTRACK_SAMPLE_ENTRIES` is not a non-negative integer
    /// - `MOODTRACK_AUTO_SEED` is not a recognized boolean
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_MOODTRACK_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let ollama_url = env::var(ENV_VAR_OLLAMA_URL)
            .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());
        let chat_model = env::var(ENV_VAR_CHAT_MODEL)
            .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());

        let sample_entries = match env::var(ENV_VAR_SAMPLE_ENTRIES) {
            Ok(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_VAR_SAMPLE_ENTRIES, raw
                ))
            })?,
            Err(_) => DEFAULT_SAMPLE_ENTRIES,
        };

        let auto_seed = match env::var(ENV_VAR_AUTO_SEED) {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!(
                    "{} must be true/false or 1/0, got '{}'",
                    ENV_VAR_AUTO_SEED, raw
                ))
            })?,
            Err(_) => false,
        };

        Ok(Config {
            data_dir,
            ollama_url,
            chat_model,
            sample_entries,
            auto_seed,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path is empty or relative
    /// - The Ollama URL is not an http(s) URL
    /// - The chat model is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use moodtrack::Config;
    /// use std::path::PathBuf;
    ///
    /// let config = Config {
    ///     data_dir: PathBuf::from("/absolute/path"),
    ///     ..Config::default()
    /// };
    /// assert!(config.validate().is_ok());
    ///
    /// let relative = Config {
    ///     data_dir: PathBuf::from("relative/path"),
    ///     ..Config::default()
    /// };
    /// assert!(relative.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if !(self.ollama_url.starts_with("http://") || self.ollama_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "Ollama URL must start with http:// or https://, got '{}'",
                self.ollama_url
            )));
        }

        if self.chat_model.trim().is_empty() {
            return Err(AppError::Config("Chat model is empty".to_string()));
        }

        Ok(())
    }

    /// Path of the persisted mood table.
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE_NAME)
    }

    /// Default export target.
    pub fn export_file(&self) -> PathBuf {
        self.data_dir.join(EXPORT_FILE_NAME)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    const VARS: [&str; 6] = [
        ENV_VAR_MOODTRACK_DIR,
        ENV_VAR_OLLAMA_URL,
        ENV_VAR_CHAT_MODEL,
        ENV_VAR_SAMPLE_ENTRIES,
        ENV_VAR_AUTO_SEED,
        ENV_VAR_HOME,
    ];

    /// Runs `f` with the given variables set and every other config variable
    /// cleared, restoring the original environment afterwards.
    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let saved: Vec<(&str, Option<String>)> =
            VARS.iter().map(|k| (*k, env::var(k).ok())).collect();
        for key in VARS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }

        f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_debug_impl_redacts_path() {
        let config = Config {
            data_dir: PathBuf::from("/home/user/secret/moods"),
            ..Config::default()
        };
        let debug_output = format!("{:?}", config);
        assert!(!debug_output.contains("secret"));
        assert!(debug_output.contains("[REDACTED_PATH]"));
    }

    #[test]
    #[serial]
    fn test_load_defaults_from_home() {
        let home = tempdir().unwrap();
        let home_str = home.path().to_string_lossy().to_string();

        with_env(&[(ENV_VAR_HOME, &home_str)], || {
            let config = Config::load().unwrap();
            assert_eq!(
                config.data_dir,
                PathBuf::from(&home_str).join(".local/share/moodtrack")
            );
            assert_eq!(config.ollama_url, DEFAULT_OLLAMA_URL);
            assert_eq!(config.chat_model, DEFAULT_CHAT_MODEL);
            assert_eq!(config.sample_entries, DEFAULT_SAMPLE_ENTRIES);
            assert!(!config.auto_seed);
        });
    }

    #[test]
    #[serial]
    fn test_load_reads_overrides() {
        with_env(
            &[
                (ENV_VAR_MOODTRACK_DIR, "/tmp/moods"),
                (ENV_VAR_OLLAMA_URL, "http://ollama:11434"),
                (ENV_VAR_CHAT_MODEL, "mistral"),
                (ENV_VAR_SAMPLE_ENTRIES, "5"),
                (ENV_VAR_AUTO_SEED, "true"),
            ],
            || {
                let config = Config::load().unwrap();
                assert_eq!(config.data_dir, PathBuf::from("/tmp/moods"));
                assert_eq!(config.data_file(), PathBuf::from("/tmp/moods/mood_data.csv"));
                assert_eq!(
                    config.export_file(),
                    PathBuf::from("/tmp/moods/mood_data_export.csv")
                );
                assert_eq!(config.ollama_url, "http://ollama:11434");
                assert_eq!(config.chat_model, "mistral");
                assert_eq!(config.sample_entries, 5);
                assert!(config.auto_seed);
            },
        );
    }

    #[test]
    #[serial]
    fn test_load_rejects_bad_sample_count() {
        with_env(
            &[
                (ENV_VAR_MOODTRACK_DIR, "/tmp/moods"),
                (ENV_VAR_SAMPLE_ENTRIES, "many"),
            ],
            || match Config::load() {
                Err(AppError::Config(msg)) => assert!(msg.contains(ENV_VAR_SAMPLE_ENTRIES)),
                other => panic!("Expected config error, got {:?}", other),
            },
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let valid = Config {
            data_dir: PathBuf::from("/absolute/path"),
            ..Config::default()
        };
        assert!(valid.validate().is_ok());

        let empty_dir = Config::default();
        assert!(empty_dir.validate().is_err());

        let bad_url = Config {
            ollama_url: "127.0.0.1:11434".to_string(),
            ..valid.clone()
        };
        assert!(bad_url.validate().is_err());

        let empty_model = Config {
            chat_model: "  ".to_string(),
            ..valid
        };
        assert!(empty_model.validate().is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool(" TRUE "), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
