use adb_plugin_sdk::Plugin;
use serde_json::Value;

use crate::{
    call::{MethodCall, MethodResult},
    channel::{MethodCallHandler, MethodChannelRegistry},
    platform,
};

/// Channel the built-in plugin registers under.
pub const CHANNEL_NAME: &str = "adb";

/// The one method the plugin answers. Matching is exact and case-sensitive.
pub const METHOD_GET_PLATFORM_VERSION: &str = "getPlatformVersion";

/// Built-in platform query plugin: answers `getPlatformVersion` with the
/// host OS name and version, and every other method with the
/// not-implemented sentinel.
#[derive(Debug, Default)]
pub struct AdbPlugin;

impl AdbPlugin {
    /// Installs the plugin on its channel, the host-framework registration
    /// entry point rendered as a registry insert.
    pub fn register(registry: &mut MethodChannelRegistry) {
        registry.register(CHANNEL_NAME, Box::new(Self));
    }
}

impl MethodCallHandler for AdbPlugin {
    fn on_method_call(&self, call: &MethodCall) -> MethodResult {
        match call.method.as_str() {
            METHOD_GET_PLATFORM_VERSION => MethodResult::success(platform::platform_version()),
            _ => MethodResult::NotImplemented,
        }
    }
}

impl Plugin for AdbPlugin {
    fn name(&self) -> &'static str {
        CHANNEL_NAME
    }

    fn version(&self) -> semver::Version {
        semver::Version::parse(crate::version()).unwrap_or_else(|_| semver::Version::new(0, 0, 0))
    }

    fn init(&mut self, _config: Value) -> anyhow::Result<()> {
        Ok(())
    }

    fn capabilities(&self) -> &'static [&'static str] {
        &[METHOD_GET_PLATFORM_VERSION]
    }
}
