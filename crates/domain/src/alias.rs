use crate::errors::MdnsError;
use std::net::IpAddr;
use std::sync::Arc;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_WIRE_LEN: usize = 255;

/// A hostname this responder is authoritative for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    hostname: Arc<str>,
    addresses: Vec<IpAddr>,
}

impl Alias {
    /// Normalizes the hostname and drops duplicate addresses, keeping the
    /// first occurrence of each.
    pub fn new(hostname: &str, addresses: Vec<IpAddr>) -> Result<Self, MdnsError> {
        let hostname = normalize_name(hostname);
        if hostname.is_empty() {
            return Err(MdnsError::InvalidName("empty alias hostname".to_string()));
        }
        if hostname.split('.').any(|label| label.is_empty() || label.len() > MAX_LABEL_LEN) {
            return Err(MdnsError::InvalidName(hostname));
        }
        // Length octets plus the root label.
        if hostname.len() + 2 > MAX_NAME_WIRE_LEN {
            return Err(MdnsError::InvalidName(format!(
                "{} exceeds {} bytes on the wire",
                hostname, MAX_NAME_WIRE_LEN
            )));
        }

        let mut unique = Vec::with_capacity(addresses.len());
        for addr in addresses {
            if !unique.contains(&addr) {
                unique.push(addr);
            }
        }

        Ok(Self {
            hostname: hostname.into(),
            addresses: unique,
        })
    }

    pub fn parse(hostname: &str, addresses: &[impl AsRef<str>]) -> Result<Self, MdnsError> {
        let parsed = addresses
            .iter()
            .map(|a| {
                a.as_ref()
                    .trim()
                    .parse::<IpAddr>()
                    .map_err(|_| MdnsError::InvalidIpAddress(a.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(hostname, parsed)
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn hostname_arc(&self) -> Arc<str> {
        Arc::clone(&self.hostname)
    }

    pub fn addresses(&self) -> &[IpAddr] {
        &self.addresses
    }

    pub fn merge(&mut self, other: Alias) {
        for addr in other.addresses {
            if !self.addresses.contains(&addr) {
                self.addresses.push(addr);
            }
        }
    }
}

/// Canonical form used for every alias comparison: ASCII-lowercase,
/// surrounding whitespace and trailing dots removed.
pub fn normalize_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// Appends `.local` to single-label names.
pub fn qualify_local(name: &str) -> String {
    let name = name.trim().trim_end_matches('.');
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{}.local", name)
    }
}
