//! Configuration handling for the form front-end

use anyhow::Result;
use directories::ProjectDirs;
use job_form::state::DEFAULT_SKILLS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default tracing filter when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "job_form=info";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Skill checkboxes offered on the form
    pub skills: Option<Vec<String>>,
    /// Tracing filter directive
    pub log_filter: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "jobform", "job-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Whether a config file is present on disk
    pub fn exists() -> bool {
        Self::config_path().is_some_and(|path| path.exists())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Copy with every setting spelled out, used as the starter file
    pub fn resolved(&self) -> Self {
        Self {
            skills: Some(self.skill_names()),
            log_filter: Some(self.log_filter().to_string()),
        }
    }

    /// Skill names for a new session
    ///
    /// Blank names are ignored; a list with nothing left falls back to the defaults.
    pub fn skill_names(&self) -> Vec<String> {
        let configured: Vec<String> = self
            .skills
            .iter()
            .flatten()
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .collect();
        if configured.is_empty() {
            DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
        } else {
            configured
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
