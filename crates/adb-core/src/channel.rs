use std::collections::HashMap;

use crate::call::{MethodCall, MethodResult};

/// Handler installed on a named channel. Every invocation is stateless and
/// independent; implementations must not assume any call ordering.
pub trait MethodCallHandler: Send + Sync + 'static {
    fn on_method_call(&self, call: &MethodCall) -> MethodResult;
}

/// String-keyed dispatch table standing in for the host framework's channel
/// registration mechanism.
#[derive(Default)]
pub struct MethodChannelRegistry {
    channels: HashMap<String, Box<dyn MethodCallHandler>>,
}

impl MethodChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a handler under `channel`. Registering a second handler on
    /// the same channel replaces the first, matching host semantics.
    pub fn register(&mut self, channel: impl Into<String>, handler: Box<dyn MethodCallHandler>) {
        let channel = channel.into();
        if self.channels.insert(channel.clone(), handler).is_some() {
            tracing::warn!(channel, "replacing existing channel handler");
        } else {
            tracing::debug!(channel, "channel handler registered");
        }
    }

    pub fn is_registered(&self, channel: &str) -> bool {
        self.channels.contains_key(channel)
    }

    /// Routes one call to the handler registered under `channel`.
    ///
    /// An unknown channel yields the same not-implemented sentinel as an
    /// unknown method: the host asked for handler logic that does not exist.
    pub fn invoke(&self, channel: &str, call: &MethodCall) -> MethodResult {
        let span = tracing::debug_span!(
            "method_call",
            channel,
            method = call.method.as_str(),
            outcome = tracing::field::Empty,
        );
        let _enter = span.enter();

        let result = match self.channels.get(channel) {
            Some(handler) => handler.on_method_call(call),
            None => MethodResult::NotImplemented,
        };
        span.record(
            "outcome",
            if result.is_not_implemented() {
                "not_implemented"
            } else {
                "success"
            },
        );
        result
    }
}
