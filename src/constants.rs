//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodtrack application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodtrack";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A personal mood journal with sentiment and streak analytics";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration Keys & Environment Variables
/// Environment variable for the directory holding the mood table.
pub const ENV_VAR_MOODTRACK_DIR: &str = "MOODTRACK_DIR";
/// Environment variable for the Ollama base URL.
pub const ENV_VAR_OLLAMA_URL: &str = "MOODTRACK_OLLAMA_URL";
/// Environment variable for the chat model used for suggestions.
pub const ENV_VAR_CHAT_MODEL: &str = "MOODTRACK_CHAT_MODEL";
/// Environment variable for the number of synthetic entries to seed.
pub const ENV_VAR_SAMPLE_ENTRIES: &str = "MOODTRACK_SAMPLE_ENTRIES";
/// Environment variable that enables seeding sample data at startup.
pub const ENV_VAR_AUTO_SEED: &str = "MOODTRACK_AUTO_SEED";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for the data files within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/moodtrack";

// AI
/// Default Ollama endpoint.
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
/// Default chat model for mood suggestions.
pub const DEFAULT_CHAT_MODEL: &str = "llama3.2:3b";

// File System Parameters
/// File name of the persisted entry table.
pub const DATA_FILE_NAME: &str = "mood_data.csv";
/// File name of the default export target.
pub const EXPORT_FILE_NAME: &str = "mood_data_export.csv";
/// Suffix appended to the table path for the advisory lock file.
pub const LOCK_FILE_SUFFIX: &str = ".lock";
/// Column headers of the entry table, in order.
pub const TABLE_COLUMNS: [&str; 5] = ["Date", "Mood", "Activities", "Notes", "Sentiment"];
/// Separator used when joining activities for storage.
pub const ACTIVITY_SEPARATOR: &str = ", ";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";

// Sentiment
/// Polarity above which notes are classified as positive.
pub const POSITIVE_THRESHOLD: f32 = 0.1;
/// Polarity below which notes are classified as negative.
pub const NEGATIVE_THRESHOLD: f32 = -0.1;

// Sample Data
/// Default number of synthetic entries created by seeding.
pub const DEFAULT_SAMPLE_ENTRIES: usize = 20;
/// Activities drawn from when seeding sample data.
pub const SAMPLE_ACTIVITIES: [&str; 10] = [
    "reading",
    "jogging",
    "coding",
    "cooking",
    "meditation",
    "gaming",
    "studying",
    "yoga",
    "painting",
    "cycling",
];

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodtrack";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
