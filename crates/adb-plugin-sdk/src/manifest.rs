use serde::{Deserialize, Serialize};
use serde_json::Value;

/// On-disk JSON manifest located next to each plugin artifact, letting the
/// host enumerate plugins without loading them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PluginManifest {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    /// Channel the plugin registers under; defaults to its name.
    pub channel: Option<String>,
    /// Method names the plugin answers.
    pub capabilities: Vec<String>,
    pub config_schema: Option<Value>,
}

impl PluginManifest {
    pub fn channel(&self) -> &str {
        self.channel.as_deref().unwrap_or(&self.name)
    }

    pub fn handles_method(&self, method: &str) -> bool {
        self.capabilities.iter().any(|c| c == method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_with_defaults() {
        let manifest: PluginManifest = serde_json::from_str(
            r#"{ "name": "adb", "version": "0.1.0", "capabilities": ["getPlatformVersion"] }"#,
        )
        .unwrap();
        assert_eq!(manifest.channel(), "adb");
        assert!(manifest.handles_method("getPlatformVersion"));
        assert!(!manifest.handles_method("foo"));
    }

    #[test]
    fn explicit_channel_overrides_name() {
        let manifest = PluginManifest {
            name: "platform-tools".into(),
            channel: Some("adb".into()),
            ..Default::default()
        };
        assert_eq!(manifest.channel(), "adb");
    }
}
