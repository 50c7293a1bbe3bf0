use ferrous_mdns_domain::{DnsMessage, Question, RecordType};
use ferrous_mdns_infrastructure::mdns::wire;
use std::net::SocketAddr;

pub fn encoded_query(id: u16, name: &str, record_type: RecordType) -> Vec<u8> {
    wire::encode(&DnsMessage::query(id, vec![Question::new(name, record_type)])).unwrap()
}

pub fn source_from(addr: &str) -> SocketAddr {
    addr.parse().unwrap()
}
