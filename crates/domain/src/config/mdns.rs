use crate::mdns::DEFAULT_RECORD_TTL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MdnsConfig {
    /// TTL in seconds written into every answer.
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Multicast every alias once before serving queries.
    #[serde(default = "default_true")]
    pub announce_on_startup: bool,

    /// Receive buffer size; larger datagrams are truncated by the kernel.
    #[serde(default = "default_max_datagram_size")]
    pub max_datagram_size: usize,
}

impl Default for MdnsConfig {
    fn default() -> Self {
        Self {
            ttl: default_ttl(),
            announce_on_startup: true,
            max_datagram_size: default_max_datagram_size(),
        }
    }
}

fn default_ttl() -> u32 {
    DEFAULT_RECORD_TTL
}

fn default_true() -> bool {
    true
}

fn default_max_datagram_size() -> usize {
    9000
}
