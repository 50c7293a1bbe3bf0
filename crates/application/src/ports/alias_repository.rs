use ferrous_mdns_domain::Alias;
use std::net::IpAddr;

/// Read-mostly alias table. Implementations must make `reload` atomic with
/// respect to concurrent lookups.
pub trait AliasRepository: Send + Sync {
    /// Addresses for `name` (case- and trailing-dot-insensitive); empty on miss.
    fn lookup(&self, name: &str) -> Vec<IpAddr>;

    fn contains(&self, name: &str) -> bool;

    /// Snapshot of every alias, sorted by hostname.
    fn aliases(&self) -> Vec<Alias>;

    fn reload(&self, aliases: Vec<Alias>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
