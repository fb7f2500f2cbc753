//! Configuration for navigation, event history, and task queue settings.
//!
//! Load order: `.campus/config.toml` → environment variables → defaults.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level campus configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampusConfig {
    pub navigation: NavigationConfig,
    pub events: EventsConfig,
    pub tasks: TasksConfig,
    pub storage: StorageConfig,
}

/// Route search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Maximum number of alternative routes returned per query.
    pub max_paths: usize,
    /// Maximum number of partial paths expanded while enumerating routes.
    /// Dense campuses with many cycles otherwise blow up before `max_paths`
    /// routes are found. 0 disables the cap.
    pub max_explored_prefixes: usize,
}

/// Event list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Depth of the undo and redo stacks.
    pub history_limit: usize,
}

/// Task queue configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    /// Maximum number of pending tasks. Unbounded when absent.
    pub max_pending: Option<usize>,
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Campus map file, relative to the project root.
    pub campus_file: PathBuf,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            max_paths: 10,
            max_explored_prefixes: 100_000,
        }
    }
}

impl NavigationConfig {
    /// The explored-prefix cap as passed to path enumeration.
    pub fn explored_limit(&self) -> Option<usize> {
        (self.max_explored_prefixes > 0).then_some(self.max_explored_prefixes)
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { history_limit: 50 }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            campus_file: PathBuf::from("data").join("campus_data.json"),
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl CampusConfig {
    /// Load config from `.campus/config.toml` in the project root, with env var
    /// overrides. Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".campus").join("config.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| CoreError::io(&config_path, e))?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        // Environment variable overrides
        env_override("CAMPUS_MAX_PATHS", &mut config.navigation.max_paths);
        env_override(
            "CAMPUS_MAX_EXPLORED",
            &mut config.navigation.max_explored_prefixes,
        );
        env_override("CAMPUS_HISTORY_LIMIT", &mut config.events.history_limit);
        if let Ok(v) = std::env::var("CAMPUS_MAX_PENDING")
            && let Ok(n) = v.parse()
        {
            config.tasks.max_pending = Some(n);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.events.history_limit == 0 {
            return Err(CoreError::InvalidConfig(
                "events.history_limit must be at least 1".to_string(),
            ));
        }
        if self.navigation.max_paths == 0 {
            return Err(CoreError::InvalidConfig(
                "navigation.max_paths must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute path of the campus map for `project_root`.
    pub fn campus_file(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.storage.campus_file)
    }
}
