use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Endpoint and timing knobs shared by the three roles.
///
/// The addresses are configuration, not protocol: every role takes
/// them as injected parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address the local resolver listens on; the client targets it.
    #[serde(default = "default_resolver_addr")]
    pub resolver_addr: String,

    /// Address the authoritative server listens on; the resolver
    /// forwards cache misses to it.
    #[serde(default = "default_authoritative_addr")]
    pub authoritative_addr: String,

    /// Receive timeout. Turns blocking receives into periodic
    /// wake-ups; a timeout is never a failure.
    #[serde(default = "default_recv_timeout_secs")]
    pub recv_timeout_secs: u64,

    /// Interval between eviction sweeps of a record table.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl ServerConfig {
    pub fn resolver(&self) -> Result<SocketAddr, ConfigError> {
        parse_addr(&self.resolver_addr)
    }

    pub fn authoritative(&self) -> Result<SocketAddr, ConfigError> {
        parse_addr(&self.authoritative_addr)
    }

    pub fn recv_timeout(&self) -> Duration {
        Duration::from_secs(self.recv_timeout_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            resolver_addr: default_resolver_addr(),
            authoritative_addr: default_authoritative_addr(),
            recv_timeout_secs: default_recv_timeout_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn parse_addr(addr: &str) -> Result<SocketAddr, ConfigError> {
    addr.parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddress(addr.to_string(), e.to_string()))
}

fn default_resolver_addr() -> String {
    "127.0.0.1:21000".to_string()
}

fn default_authoritative_addr() -> String {
    "127.0.0.1:22000".to_string()
}

fn default_recv_timeout_secs() -> u64 {
    1
}

fn default_sweep_interval_secs() -> u64 {
    1
}
