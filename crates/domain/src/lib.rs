//! Ferrous mDNS Domain Layer
pub mod alias;
pub mod config;
pub mod dns_message;
pub mod errors;
pub mod mdns;

pub use alias::{normalize_name, qualify_local, Alias};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{DnsMessage, MessageFlags, Question, RecordType, ResourceRecord};
pub use errors::MdnsError;
