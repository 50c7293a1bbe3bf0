mod alias_repository;
mod alias_source;
mod mdns_transport;

pub use alias_repository::AliasRepository;
pub use alias_source::AliasSource;
pub use mdns_transport::MdnsTransport;
