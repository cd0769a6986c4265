//! Configuration loading and data folder resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the data folder
pub const DATA_DIR_ENV: &str = "OPTIMUS_DATA_DIR";

/// Optional TOML configuration file
///
/// Every field is optional; absent fields fall back to compiled defaults.
///
/// ```toml
/// data_dir = "/var/lib/optimus"
/// port = 5000
/// bind = "127.0.0.1"
/// max_constitutional_complexity = 7
/// daily_case_count = 5
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TomlConfig {
    pub data_dir: Option<PathBuf>,
    pub port: Option<u16>,
    pub bind: Option<String>,
    /// Highest complexity a norm may have and still pass a constitutionality check
    pub max_constitutional_complexity: Option<u8>,
    /// Cases produced per citizen pressure round
    pub daily_case_count: Option<usize>,
}

impl TomlConfig {
    /// Parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
    }

    /// Load configuration, never failing
    ///
    /// An explicit path is tried first, then the platform config file.
    /// Missing or unreadable files produce a warning and the defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        let path = match explicit.map(Path::to_path_buf).or_else(default_config_path) {
            Some(path) => path,
            None => {
                info!("No config file found, using defaults");
                return Self::default();
            }
        };

        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded config file {}", path.display());
                config
            }
            Err(e) => {
                warn!("{} - using defaults", e);
                Self::default()
            }
        }
    }
}

/// Platform configuration file, if one exists
///
/// Linux: `~/.config/optimus/config.toml`, then `/etc/optimus/config.toml`.
/// Other platforms: the user config directory only.
pub fn default_config_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("optimus").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/optimus/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Data folder resolution, in priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent default (fallback)
pub fn resolve_data_dir(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    config: &TomlConfig,
) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &config.data_dir {
        return path.clone();
    }

    // Priority 4: OS-dependent default
    default_data_dir()
}

/// OS-dependent default data folder
///
/// `~/.local/share/optimus` on Linux, the platform equivalent elsewhere,
/// `./data` when no home directory is known.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("optimus"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Create the data folder (and parents) if absent
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
        info!("Created data folder {}", path.display());
    }
    Ok(())
}
