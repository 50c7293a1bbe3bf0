use arc_swap::ArcSwap;
use ferrous_mdns_application::ports::AliasRepository;
use ferrous_mdns_domain::{normalize_name, Alias};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;

#[derive(Default)]
struct AliasSnapshot {
    by_name: HashMap<Arc<str>, Alias>,
}

impl AliasSnapshot {
    fn build(aliases: Vec<Alias>) -> Self {
        let mut by_name: HashMap<Arc<str>, Alias> = HashMap::with_capacity(aliases.len());
        for alias in aliases {
            match by_name.get_mut(alias.hostname()) {
                Some(existing) => existing.merge(alias),
                None => {
                    by_name.insert(alias.hostname_arc(), alias);
                }
            }
        }
        Self { by_name }
    }
}

/// Alias table backed by an immutable snapshot behind an `ArcSwap`.
///
/// Lookups load the current snapshot without locking; `reload` builds a new
/// snapshot and swaps it in, so readers see either the old or the new table
/// and never a mix.
pub struct AliasTable {
    snapshot: ArcSwap<AliasSnapshot>,
}

impl AliasTable {
    pub fn new(aliases: Vec<Alias>) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(AliasSnapshot::build(aliases)),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl AliasRepository for AliasTable {
    fn lookup(&self, name: &str) -> Vec<IpAddr> {
        let key = normalize_name(name);
        self.snapshot
            .load()
            .by_name
            .get(key.as_str())
            .map(|alias| alias.addresses().to_vec())
            .unwrap_or_default()
    }

    fn contains(&self, name: &str) -> bool {
        let key = normalize_name(name);
        self.snapshot.load().by_name.contains_key(key.as_str())
    }

    fn aliases(&self) -> Vec<Alias> {
        let mut aliases: Vec<Alias> = self.snapshot.load().by_name.values().cloned().collect();
        aliases.sort_by(|a, b| a.hostname().cmp(b.hostname()));
        aliases
    }

    fn reload(&self, aliases: Vec<Alias>) {
        self.snapshot.store(Arc::new(AliasSnapshot::build(aliases)));
    }

    fn len(&self) -> usize {
        self.snapshot.load().by_name.len()
    }
}

impl std::fmt::Debug for AliasTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliasTable")
            .field("aliases", &self.len())
            .finish()
    }
}
