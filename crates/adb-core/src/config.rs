use std::collections::HashSet;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::plugin::CHANNEL_NAME;

/// Root configuration structure deserialized from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub channel: ChannelConfig,
    pub plugins: PluginsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    pub name: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: CHANNEL_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PluginsConfig {
    pub search_paths: Vec<String>,
}

impl Config {
    /// Validates structural invariants and provides actionable error messages.
    pub fn validate(&self) -> Result<()> {
        if self.channel.name.trim().is_empty() {
            bail!("channel name must not be empty");
        }
        let mut seen = HashSet::new();
        for path in &self.plugins.search_paths {
            if path.trim().is_empty() {
                bail!("plugin search paths must not be empty");
            }
            if !seen.insert(path.as_str()) {
                bail!("duplicate plugin search path `{path}`");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_the_adb_channel() {
        let config = Config::default();
        assert_eq!(config.channel.name, "adb");
        config.validate().unwrap();
    }

    #[test]
    fn empty_channel_name_is_rejected() {
        let mut config = Config::default();
        config.channel.name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn duplicate_search_paths_are_rejected() {
        let mut config = Config::default();
        config.plugins.search_paths = vec!["plugins".into(), "plugins".into()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }
}
