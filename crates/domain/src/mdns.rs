//! mDNS protocol constants (RFC 6762).
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

pub const MDNS_PORT: u16 = 5353;
pub const MDNS_IPV4_GROUP: Ipv4Addr = Ipv4Addr::new(224, 0, 0, 251);
pub const MDNS_IPV6_GROUP: Ipv6Addr = Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0, 0xfb);

/// TTL for address records. Kept short because no goodbye packets are sent.
pub const DEFAULT_RECORD_TTL: u32 = 120;

pub const CLASS_IN: u16 = 1;
pub const CLASS_ANY: u16 = 255;

/// Top bit of a question's class: the querier asks for a unicast reply.
pub const UNICAST_RESPONSE_BIT: u16 = 0x8000;
/// Top bit of a record's class in responses.
pub const CACHE_FLUSH_BIT: u16 = 0x8000;

pub fn ipv4_group_addr() -> SocketAddr {
    SocketAddr::new(MDNS_IPV4_GROUP.into(), MDNS_PORT)
}

pub fn ipv6_group_addr() -> SocketAddr {
    SocketAddr::new(MDNS_IPV6_GROUP.into(), MDNS_PORT)
}

/// Queries from a source port other than the mDNS port in use (5353 unless
/// configured otherwise) come from legacy resolvers that only listen for a
/// unicast answer.
pub fn is_legacy_unicast_source(source: &SocketAddr, mdns_port: u16) -> bool {
    source.port() != mdns_port
}
