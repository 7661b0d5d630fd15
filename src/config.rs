//! Runtime configuration from environment variables.
//!
//! Every value is optional; unparseable values fall back to the default and
//! leave a warning in [`AppConfig::warnings`] for the caller to log once
//! tracing is up.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `QUIZ_SEED` | clock-derived | RNG seed for question generation |
//! | `QUIZ_DIFFICULTY` | `easy` | Tier selected before the first start |
//! | `QUIZ_JOURNAL_PATH` | unset | Append JSON-lines event journal here |
//! | `QUIZ_LOG_PATH` | unset | Write tracing output to this file |
//! | `QUIZ_LOG` | `info` | Tracing filter directive |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::journal::JournalConfig;
use crate::types::Difficulty;

/// Tracing output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub path: Option<PathBuf>,
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub difficulty: Difficulty,
    pub journal: JournalConfig,
    pub log: LogConfig,
    /// Problems found while parsing, reported after logging starts.
    pub warnings: Vec<String>,
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();

        let seed = match lookup("QUIZ_SEED").map(|s| s.trim().to_string()) {
            Some(s) if !s.is_empty() => s.parse::<u32>().unwrap_or_else(|_| {
                warnings.push(format!("QUIZ_SEED={s:?} is not a u32, using clock seed"));
                clock_seed()
            }),
            _ => clock_seed(),
        };

        let difficulty = match lookup("QUIZ_DIFFICULTY") {
            Some(s) if !s.trim().is_empty() => Difficulty::from_str(&s).unwrap_or_else(|| {
                warnings.push(format!("QUIZ_DIFFICULTY={s:?} is not easy/medium/hard, using easy"));
                Difficulty::Easy
            }),
            _ => Difficulty::Easy,
        };

        let journal = JournalConfig::from_value(lookup("QUIZ_JOURNAL_PATH"));

        let log = LogConfig {
            path: lookup("QUIZ_LOG_PATH")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            filter: lookup("QUIZ_LOG")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "info".to_string()),
        };

        Self {
            seed,
            difficulty,
            journal,
            log,
            warnings,
        }
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    (nanos as u32) ^ ((nanos >> 32) as u32)
}
