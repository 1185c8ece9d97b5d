//! Read-only query of the host operating system's name and version.

use os_info::Version;

/// Substituted when the OS reports no usable version, so that the query
/// always succeeds with a digit-bearing string.
const UNKNOWN_VERSION: &str = "0.0";

/// Returns a human-readable `"<OS name> <version>"` string, e.g.
/// `"Linux 6.8.0"` or `"Mac OS 14.4.1"`.
pub fn platform_version() -> String {
    let info = os_info::get();
    match info.version() {
        Version::Unknown => format!("{} {UNKNOWN_VERSION}", info.os_type()),
        version => format!("{} {version}", info.os_type()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_names_an_os_and_a_number() {
        let version = platform_version();
        assert!(!version.is_empty());
        // "<OS name> <version>" with the version part carrying at least one
        // digit, either from the OS or from the fallback.
        assert!(version.contains(' '), "missing separator in {version:?}");
        assert!(
            version.chars().any(|c| c.is_ascii_digit()),
            "no version digits in {version:?}"
        );
    }

    #[test]
    fn repeated_queries_agree() {
        assert_eq!(platform_version(), platform_version());
    }
}
