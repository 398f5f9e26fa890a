//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::tui::style::AnsiColor;

use super::env::apply_env_overrides;
use super::sources::{config_root_dir, read_config_text_with_sources};
use super::types::{FileBanner, FileColors, FileConfig};
use super::{AppConfig, Banner, LoadedConfig};

/// Load configuration from disk and environment onto the built-in defaults.
///
/// `path_override` is an explicit config file path.
pub fn load_config(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_with_base(AppConfig::default(), path_override)
}

/// Load configuration from disk and environment onto `base`.
///
/// Embedding applications pass their own name/version as `base`; the file
/// and environment only override what they mention.
pub fn load_config_with_base(
    base: AppConfig,
    path_override: Option<&str>,
) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        base,
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    base: AppConfig,
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_file_config(parsed, base)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    tracing::debug!(?source, "configuration loaded");

    Ok(LoadedConfig { config, source })
}

fn resolve_file_config(file: FileConfig, mut config: AppConfig) -> Result<AppConfig, ConfigError> {
    if let Some(name) = file.app.name {
        config.name = name;
    }
    if let Some(version) = file.app.version {
        config.version = version;
    }
    if let Some(description) = file.app.description {
        config.description = description;
    }

    let interactive = file.interactive;
    if let Some(enabled) = interactive.enabled {
        config.interactive.enabled = enabled;
    }
    if let Some(show_prompt) = interactive.show_prompt {
        config.show_prompt = show_prompt;
    }
    if let Some(show_usage) = interactive.show_usage_on_error {
        config.show_usage_on_error = show_usage;
    }
    if let Some(greet) = interactive.greet {
        config.interactive.greet = Some(resolve_banner(greet, config.interactive.greet.take(), "greet")?);
    }
    if let Some(goodbye) = interactive.goodbye {
        config.interactive.goodbye = Some(resolve_banner(
            goodbye,
            config.interactive.goodbye.take(),
            "goodbye",
        )?);
    }

    if let Some(color) = file.display.color {
        config.color = color;
    }
    apply_file_colors(file.colors, &mut config)?;
    Ok(config)
}

fn resolve_banner(
    file: FileBanner,
    current: Option<Banner>,
    section: &str,
) -> Result<Banner, ConfigError> {
    let mut banner = current.unwrap_or_else(|| Banner::new(String::new()));
    if let Some(show) = file.show {
        banner.show = show;
    }
    if let Some(color) = file.color {
        banner.color = parse_color(&format!("interactive.{section}.color"), &color)?;
    }
    if let Some(message) = file.message {
        banner.message = message;
    }
    Ok(banner)
}

fn apply_file_colors(colors: FileColors, config: &mut AppConfig) -> Result<(), ConfigError> {
    let palette = &mut config.colors;
    let slots = [
        ("primary", colors.primary, &mut palette.primary),
        ("secondary", colors.secondary, &mut palette.secondary),
        ("error", colors.error, &mut palette.error),
        ("warning", colors.warning, &mut palette.warning),
        ("success", colors.success, &mut palette.success),
        ("info", colors.info, &mut palette.info),
        ("input_prompt", colors.input_prompt, &mut palette.input_prompt),
        ("user_input", colors.user_input, &mut palette.user_input),
        ("debug", colors.debug, &mut palette.debug),
    ];
    for (key, value, slot) in slots {
        if let Some(value) = value {
            *slot = parse_color(&format!("colors.{key}"), &value)?;
        }
    }
    Ok(())
}

fn parse_color(key: &str, value: &str) -> Result<AnsiColor, ConfigError> {
    value
        .parse()
        .map_err(|err| ConfigError::Invalid(format!("{key}: {err}")))
}
