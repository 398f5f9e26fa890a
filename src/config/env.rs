//! Environment overrides applied on top of the file configuration.
//!
//! Env vars have the highest precedence so a single invocation can be
//! adjusted without editing `kli.toml`.

use crate::error::ConfigError;

use super::AppConfig;

/// Toggles whether an empty invocation enters interactive mode.
pub const ENV_INTERACTIVE: &str = "KLI_INTERACTIVE";
/// Toggles the interactive prompt.
pub const ENV_SHOW_PROMPT: &str = "KLI_SHOW_PROMPT";
/// Any non-empty value disables colored output (<https://no-color.org>).
pub const ENV_NO_COLOR: &str = "NO_COLOR";

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut AppConfig,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(raw) = env_lookup(ENV_INTERACTIVE) {
        config.interactive.enabled = parse_bool_var(ENV_INTERACTIVE, &raw)?;
    }
    if let Some(raw) = env_lookup(ENV_SHOW_PROMPT) {
        config.show_prompt = parse_bool_var(ENV_SHOW_PROMPT, &raw)?;
    }
    if env_lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
        config.color = false;
    }
    Ok(())
}

fn parse_bool_var(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "invalid {name} value `{raw}`: expected true/false"
        ))),
    }
}
