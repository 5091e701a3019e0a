use std::error::Error;
use std::net::{AddrParseError, IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::configs::normalize_path;

const DEFAULT_SETTINGS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../",
    "configs/default.toml"
));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dashboard {
    /// Serve the page from this file instead of the embedded document.
    #[serde(default)]
    pub template_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    #[serde(default)]
    pub dashboard: Dashboard,
}

impl Settings {
    /// Loads the settings compiled into the binary.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Self::from_toml(DEFAULT_SETTINGS)
    }

    pub fn from_toml(source: &str) -> Result<Self, Box<dyn Error>> {
        let mut settings: Settings = toml::from_str(source)?;

        if let Some(template_path) = &settings.dashboard.template_path {
            let template_path = normalize_path(template_path)?
                .to_string_lossy()
                .to_string();

            settings.dashboard.template_path = Some(template_path);
        }

        Ok(settings)
    }

    pub fn address(&self) -> Result<SocketAddr, AddrParseError> {
        let ip_addr = self.server.host.parse::<IpAddr>()?;

        Ok(SocketAddr::from((ip_addr, self.server.port)))
    }
}
