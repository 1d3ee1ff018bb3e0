use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DaymarkError;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub storage: StorageConfig,
    pub calendar: CalendarConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `DAYMARK_PROFILE`. When set (e.g. `PHONE`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("DAYMARK_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            storage: StorageConfig::from_env_profiled(p),
            calendar: CalendarConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  storage:     data_dir={}", self.storage.data_dir.display());
        tracing::info!(
            "  keys:        recurring_tasks={}, schedules={}",
            self.storage.recurring_tasks_key,
            self.storage.schedules_key
        );
        tracing::info!("  calendar:    schedule_overlap={}", self.calendar.schedule_overlap);
    }
}

// ── Storage ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory of the file-backed key-value store.
    pub data_dir: PathBuf,
    pub recurring_tasks_key: String,
    pub schedules_key: String,
}

impl StorageConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            data_dir: PathBuf::from(profiled_env_or(p, "DATA_DIR", "data")),
            recurring_tasks_key: profiled_env_or(p, "RECURRING_TASKS_KEY", "recurring-tasks"),
            schedules_key: profiled_env_or(p, "SCHEDULES_KEY", "work-schedules"),
        }
    }
}

// ── Calendar ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// How icons from overlapping work/rest schedules are combined on one date.
    pub schedule_overlap: OverlapSetting,
}

impl CalendarConfig {
    fn from_env_profiled(p: &str) -> Self {
        let raw = profiled_env_or(p, "SCHEDULE_OVERLAP", "all");
        let schedule_overlap = raw.parse().unwrap_or_else(|e: DaymarkError| {
            tracing::warn!(value = %raw, error = %e, "falling back to schedule_overlap=all");
            OverlapSetting::All
        });
        Self { schedule_overlap }
    }
}

/// Configured precedence between schedules whose active ranges overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapSetting {
    First,
    Last,
    All,
}

impl fmt::Display for OverlapSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlapSetting::First => write!(f, "first"),
            OverlapSetting::Last => write!(f, "last"),
            OverlapSetting::All => write!(f, "all"),
        }
    }
}

impl FromStr for OverlapSetting {
    type Err = DaymarkError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(OverlapSetting::First),
            "last" => Ok(OverlapSetting::Last),
            "all" => Ok(OverlapSetting::All),
            other => Err(DaymarkError::Config(format!(
                "unknown schedule overlap '{}', expected first, last or all",
                other
            ))),
        }
    }
}
