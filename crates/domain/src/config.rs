pub mod aliases;
pub mod errors;
pub mod logging;
pub mod mdns;
pub mod root;
pub mod server;

pub use aliases::{AliasConfig, AliasEntry};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use mdns::MdnsConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
