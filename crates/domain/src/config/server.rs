use crate::mdns::MDNS_PORT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address of the interface to join the group on. Detected when unset.
    #[serde(default)]
    pub interface: Option<String>,

    /// Join `ff02::fb` instead of `224.0.0.251`.
    #[serde(default)]
    pub ipv6: bool,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            interface: None,
            ipv6: false,
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    MDNS_PORT
}
