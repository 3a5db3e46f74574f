//! Build-time information
//!
//! Build metadata captured at compile time by vergen.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., aarch64-apple-ios, x86_64-unknown-linux-gnu)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.85.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Git commit SHA, when built from a git checkout
pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

/// Returns a formatted build version string
///
/// Format: `{version}+{short_sha} {target_triple}-opt{opt_level}`
pub fn version_string() -> String {
    format!(
        "{}+{} {}-opt{}",
        env!("CARGO_PKG_VERSION"),
        git_sha_short(),
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL
    )
}

/// First seven characters of the git SHA, or "unknown"
pub fn git_sha_short() -> &'static str {
    GIT_SHA.map(|sha| sha.get(..7).unwrap_or(sha)).unwrap_or("unknown")
}

/// Returns a detailed build info string
pub fn detailed_info() -> String {
    format!(
        "Version: {}\nBuilt: {}\nRustc: {}",
        version_string(),
        BUILD_TIMESTAMP,
        RUSTC_SEMVER
    )
}
