//! optimus-server specific configuration

use optimus_common::config::{resolve_data_dir, TomlConfig, DATA_DIR_ENV};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::society::SocietySettings;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub society: SocietySettings,
}

/// Values given on the command line (or their environment variables)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub bind: Option<IpAddr>,
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Merge command-line overrides over the TOML file over defaults
    pub fn resolve(overrides: &Overrides, toml: &TomlConfig) -> Self {
        let port = overrides.port.or(toml.port).unwrap_or(DEFAULT_PORT);
        let ip = overrides
            .bind
            .or_else(|| toml.bind.as_deref().and_then(|b| b.parse().ok()))
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        let defaults = SocietySettings::default();
        let society = SocietySettings {
            max_constitutional_complexity: toml
                .max_constitutional_complexity
                .unwrap_or(defaults.max_constitutional_complexity),
            daily_case_count: toml.daily_case_count.unwrap_or(defaults.daily_case_count),
        };

        Self {
            data_dir: resolve_data_dir(overrides.data_dir.as_deref(), DATA_DIR_ENV, toml),
            bind_addr: SocketAddr::new(ip, port),
            society,
        }
    }
}
