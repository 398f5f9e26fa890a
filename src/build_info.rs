//! Compile-time build metadata for the demo binary's `--version` output.

/// Package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short commit hash, or `unknown` outside a git checkout.
pub const GIT_COMMIT: &str = env!("KLI_BUILD_GIT_HASH");

/// Build time, `unix:<seconds>` unless pinned through the environment.
pub const BUILD_TIMESTAMP: &str = env!("KLI_BUILD_TIMESTAMP");

/// Version string with whatever build metadata is known.
pub fn app_version() -> String {
    describe(VERSION, GIT_COMMIT, BUILD_TIMESTAMP)
}

fn describe(version: &str, commit: &str, timestamp: &str) -> String {
    let known: Vec<&str> = [commit, timestamp]
        .into_iter()
        .filter(|value| *value != "unknown")
        .collect();
    if known.is_empty() {
        version.to_string()
    } else {
        format!("{version} ({})", known.join(", "))
    }
}
