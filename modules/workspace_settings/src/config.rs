//! Configuration for workspace settings module

use crate::domain::{ServiceOptions, UnmatchedKeyPolicy};
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::Deserialize;
use std::path::Path;

/// Prefix for environment overrides, e.g. `WORKSPACE_SETTINGS_MODE=demo`
pub const ENV_PREFIX: &str = "WORKSPACE_SETTINGS_";

/// Deployment mode of the instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Prod,
    Dev,
    /// Public demo instance; workspace settings are read-only
    Demo,
}

/// Workspace settings module configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub mode: Mode,

    /// Handling of Set requests whose key has no matching payload
    #[serde(default)]
    pub unmatched_key_policy: UnmatchedKeyPolicy,

    /// Database connection URL (SQLite or Postgres)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Address the REST API listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            unmatched_key_policy: UnmatchedKeyPolicy::default(),
            database_url: default_database_url(),
            bind_addr: default_bind_addr(),
        }
    }
}

impl Config {
    /// Load from an optional YAML file, then `WORKSPACE_SETTINGS_*` env vars
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        Ok(figment.extract()?)
    }

    pub fn is_demo(&self) -> bool {
        self.mode == Mode::Demo
    }
}

impl From<&Config> for ServiceOptions {
    fn from(config: &Config) -> Self {
        Self {
            demo_mode: config.is_demo(),
            unmatched_key_policy: config.unmatched_key_policy,
        }
    }
}

fn default_database_url() -> String {
    "sqlite://workspace_settings.db?mode=rwc".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:8081".to_string()
}
