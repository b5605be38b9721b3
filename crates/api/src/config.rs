//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the server listens on.
pub const PORT: u16 = 8080;

/// Listener and logging settings.
///
/// The process always runs with [`Config::default`]; no environment
/// variables or files are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Settings for a listener on `127.0.0.1`. Port `0` picks a free port.
    pub fn loopback(port: u16) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
            ..Self::default()
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: PORT,
            log_level: "info".to_string(),
        }
    }
}
