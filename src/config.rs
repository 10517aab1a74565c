//! Configuration management for filegate
//!
//! Loads `config.toml` with `FILEGATE_*` environment overrides, checks it,
//! and turns the declared policies into a [`PolicyRegistry`].

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::storage::policy::{PolicyRegistry, USER_POLICY, UploadPolicy};
use crate::storage::validation::is_safe_segment;

const ENV_PREFIX: &str = "FILEGATE";

/// Gateway configuration, read once at startup
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Root directory every relative path resolves against
    /// Environment: FILEGATE_STORAGE_ROOT
    pub storage_root: String,

    /// Create the root directory at startup when missing
    #[serde(default = "default_true")]
    pub create_root: bool,

    /// Create every policy's destination folder at startup
    #[serde(default)]
    pub prepare_policy_folders: bool,

    /// Extra policies, keyed by name
    #[serde(default)]
    pub policies: HashMap<String, PolicyConfig>,
}

/// A policy declared in configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PolicyConfig {
    pub destination_folder: Vec<String>,
    pub permitted_extensions: Vec<String>,
    pub max_size_bytes: u64,
}

fn default_true() -> bool {
    true
}

impl StorageConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        // Installed layout first, then the working directory
        let config_paths = ["filegate/config", "config"];

        let mut last_error = None;

        for config_path in &config_paths {
            match Config::builder()
                .add_source(File::with_name(config_path))
                .add_source(Environment::with_prefix(ENV_PREFIX))
                .build()
            {
                Ok(settings) => return Self::from_settings(settings),
                Err(e) => {
                    last_error = Some(e);
                    continue;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ConfigError::Message(format!("no configuration found in {config_paths:?}"))
        }))
    }

    /// Load configuration from an explicit file with environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Self::from_settings(settings)
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let config: StorageConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_root.trim().is_empty() {
            return Err(ConfigError::Message(
                "storage_root cannot be empty".into(),
            ));
        }

        for (name, policy) in &self.policies {
            if name == USER_POLICY {
                return Err(ConfigError::Message(format!(
                    "policy name '{}' is reserved",
                    USER_POLICY
                )));
            }

            if policy.permitted_extensions.is_empty() {
                return Err(ConfigError::Message(format!(
                    "policy '{}' must permit at least one extension",
                    name
                )));
            }

            if policy.max_size_bytes == 0 {
                return Err(ConfigError::Message(format!(
                    "policy '{}': max_size_bytes must be greater than 0",
                    name
                )));
            }

            if let Some(segment) = policy
                .destination_folder
                .iter()
                .find(|segment| !is_safe_segment(segment))
            {
                return Err(ConfigError::Message(format!(
                    "policy '{}': unsafe folder segment {:?}",
                    name, segment
                )));
            }
        }

        Ok(())
    }

    /// Get storage root as PathBuf
    pub fn storage_root_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_root)
    }

    /// Built-in policies plus the ones declared here
    pub fn registry(&self) -> PolicyRegistry {
        let mut registry = PolicyRegistry::default();
        for (name, policy) in &self.policies {
            registry.register(policy.to_policy(name));
        }
        registry
    }
}

impl PolicyConfig {
    pub fn to_policy(&self, name: &str) -> UploadPolicy {
        UploadPolicy::new(
            name,
            self.destination_folder.iter().cloned(),
            &self.permitted_extensions,
            self.max_size_bytes,
        )
    }
}
