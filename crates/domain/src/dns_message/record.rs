use super::RecordType;
use crate::mdns::{CACHE_FLUSH_BIT, CLASS_IN};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Arc<str>,
    pub rtype: u16,
    /// Raw class, cache-flush bit included.
    pub class: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    /// A or AAAA record for `addr` in class IN.
    pub fn address(name: impl Into<Arc<str>>, addr: IpAddr, ttl: u32) -> Self {
        let rdata = match addr {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        };
        Self {
            name: name.into(),
            rtype: RecordType::for_address(&addr).to_u16(),
            class: CLASS_IN,
            ttl,
            rdata,
        }
    }

    pub fn record_type(&self) -> RecordType {
        RecordType::from_u16(self.rtype)
    }

    pub fn cache_flush(&self) -> bool {
        self.class & CACHE_FLUSH_BIT != 0
    }

    /// Address carried by an A/AAAA record; `None` for other types or
    /// rdata of the wrong length.
    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self.record_type() {
            RecordType::A => {
                let octets: [u8; 4] = self.rdata.as_slice().try_into().ok()?;
                Some(IpAddr::V4(Ipv4Addr::from(octets)))
            }
            RecordType::AAAA => {
                let octets: [u8; 16] = self.rdata.as_slice().try_into().ok()?;
                Some(IpAddr::V6(Ipv6Addr::from(octets)))
            }
            _ => None,
        }
    }
}
