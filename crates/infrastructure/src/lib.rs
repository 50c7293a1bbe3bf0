pub mod aliases;
pub mod mdns;
