use crate::models::Config;
use anyhow::{Context, Result, bail};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".todoauditrc";

/// Load configuration from file or use defaults
///
/// Search order:
/// 1. Custom path if provided via --config
/// 2. .todoauditrc in current directory
/// 3. ~/.todoauditrc in home directory
/// 4. Built-in defaults
pub fn load_config(custom_path: Option<&Path>) -> Result<Config> {
    // If custom path provided, use it exclusively
    if let Some(path) = custom_path {
        return load_config_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    // An existing config file that fails to load is an error
    let candidates = [Some(PathBuf::from(CONFIG_FILE_NAME)), get_home_config_path()];
    for path in candidates.into_iter().flatten() {
        if path.exists() {
            let config = load_config_from_file(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            debug!("Loaded config from {}", path.display());
            return Ok(config);
        }
    }

    debug!("No config file found, using defaults");
    Ok(Config::default())
}

/// Load config from a specific file
fn load_config_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

fn get_home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Save a config to a file as TOML (used by --init-config)
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

impl Config {
    /// Check the config is usable and drop duplicate markers, keeping first occurrence
    pub fn validate(mut self) -> Result<Self> {
        if self.markers.is_empty() {
            bail!("At least one marker must be configured");
        }
        if self.markers.iter().any(|m| m.is_empty()) {
            bail!("Markers must not be empty strings");
        }
        if self.delimiter.is_empty() {
            bail!("Comment delimiter must not be empty");
        }

        let mut seen = Vec::with_capacity(self.markers.len());
        self.markers.retain(|marker| {
            if seen.contains(marker) {
                false
            } else {
                seen.push(marker.clone());
                true
            }
        });

        Ok(self)
    }
}
