pub mod manifest;

pub use manifest::PluginManifest;

use serde_json::Value;

/// Trait implemented by method-channel plugins, built-in or compiled outside
/// the core workspace. `capabilities` lists the method names the plugin
/// answers; everything else receives the host's not-implemented sentinel.
pub trait Plugin {
    fn name(&self) -> &'static str;
    fn version(&self) -> semver::Version;
    fn init(&mut self, config: Value) -> anyhow::Result<()>;
    fn capabilities(&self) -> &'static [&'static str];
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullPlugin;

    impl Plugin for NullPlugin {
        fn name(&self) -> &'static str {
            "null"
        }

        fn version(&self) -> semver::Version {
            semver::Version::new(0, 1, 0)
        }

        fn init(&mut self, _config: Value) -> anyhow::Result<()> {
            Ok(())
        }

        fn capabilities(&self) -> &'static [&'static str] {
            &[]
        }
    }

    #[test]
    fn trait_object_is_usable() {
        let mut plugin: Box<dyn Plugin> = Box::new(NullPlugin);
        plugin.init(Value::Null).unwrap();
        assert_eq!(plugin.name(), "null");
        assert!(plugin.capabilities().is_empty());
    }
}
