//! Embeds the commit hash and build time for `kli --version`.
//!
//! Both values can be pinned through the environment for reproducible
//! builds; otherwise they are probed from git and the system clock.

use std::env;
use std::path::Path;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "KLI_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "KLI_BUILD_TIMESTAMP";
const UNKNOWN: &str = "unknown";

fn main() {
    for var in [GIT_HASH_VAR, TIMESTAMP_VAR] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    watch_git_head(Path::new(".git"));

    let git_hash = pinned(GIT_HASH_VAR).unwrap_or_else(|| {
        git(&["rev-parse", "--short=12", "HEAD"]).unwrap_or_else(|| UNKNOWN.to_string())
    });
    let timestamp = pinned(TIMESTAMP_VAR).unwrap_or_else(unix_timestamp);

    println!("cargo:rustc-env={GIT_HASH_VAR}={git_hash}");
    println!("cargo:rustc-env={TIMESTAMP_VAR}={timestamp}");
}

fn pinned(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.trim().is_empty())
}

/// Rebuild when HEAD moves, including commits on the checked-out branch.
fn watch_git_head(git_dir: &Path) {
    let head = git_dir.join("HEAD");
    println!("cargo:rerun-if-changed={}", head.display());
    if let Some(branch) = std::fs::read_to_string(&head)
        .ok()
        .and_then(|text| text.trim().strip_prefix("ref: ").map(str::to_string))
    {
        println!("cargo:rerun-if-changed={}", git_dir.join(branch).display());
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string()).filter(|text| !text.is_empty())
}

fn unix_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| format!("unix:{}", elapsed.as_secs()))
        .unwrap_or_else(|_| UNKNOWN.to_string())
}
