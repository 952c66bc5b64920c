mod types;

pub use types::*;

use anyhow::{Context, Result};
use mediatitle_parser::config::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};
use std::path::Path;

/// Default locations probed when no config path is given, in order.
pub const DEFAULT_CONFIG_PATHS: [&str; 3] = [
    "./mediatitle.toml",
    "~/.config/mediatitle/config.toml",
    "/etc/mediatitle/config.toml",
];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    for path_str in DEFAULT_CONFIG_PATHS {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Write the config to a TOML file, replacing any existing content
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let parser = &config.parser;
    if parser.min_year < DEFAULT_MIN_YEAR {
        anyhow::bail!(
            "parser.min_year ({}) must be at least {}",
            parser.min_year,
            DEFAULT_MIN_YEAR
        );
    }
    if parser.max_year > DEFAULT_MAX_YEAR {
        anyhow::bail!(
            "parser.max_year ({}) must be at most {}",
            parser.max_year,
            DEFAULT_MAX_YEAR
        );
    }
    if parser.min_year > parser.max_year {
        anyhow::bail!(
            "parser.min_year ({}) is greater than parser.max_year ({})",
            parser.min_year,
            parser.max_year
        );
    }

    if config.scan.max_depth == 0 {
        anyhow::bail!("scan.max_depth must be at least 1");
    }

    for ext in &config.scan.extensions {
        if ext.is_empty() {
            anyhow::bail!("scan.extensions contains an empty entry");
        }
        if ext.starts_with('.') {
            anyhow::bail!("scan.extensions entry {:?} must not start with a dot", ext);
        }
    }

    if !config.scan.extensions.is_empty() && !config.scan.include_files {
        tracing::warn!("scan.extensions is set but scan.include_files is false; it has no effect");
    }

    Ok(())
}
