pub mod call;
pub mod channel;
pub mod config;
pub mod platform;
pub mod plugin;

/// Returns the crate version baked in at compile time.
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
