#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_mdns_application::ports::{AliasRepository, AliasSource};
use ferrous_mdns_domain::{normalize_name, Alias, MdnsError};
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockAliasRepository {
    entries: Arc<RwLock<BTreeMap<String, Alias>>>,
}

impl MockAliasRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(entries: &[(&str, &[&str])]) -> Self {
        let repo = Self::new();
        let aliases = entries
            .iter()
            .map(|(host, addrs)| Alias::parse(host, *addrs).unwrap())
            .collect();
        repo.reload(aliases);
        repo
    }
}

impl AliasRepository for MockAliasRepository {
    fn lookup(&self, name: &str) -> Vec<IpAddr> {
        self.entries
            .read()
            .unwrap()
            .get(&normalize_name(name))
            .map(|a| a.addresses().to_vec())
            .unwrap_or_default()
    }

    fn contains(&self, name: &str) -> bool {
        self.entries
            .read()
            .unwrap()
            .contains_key(&normalize_name(name))
    }

    fn aliases(&self) -> Vec<Alias> {
        self.entries.read().unwrap().values().cloned().collect()
    }

    fn reload(&self, aliases: Vec<Alias>) {
        let mut map = BTreeMap::new();
        for alias in aliases {
            map.insert(alias.hostname().to_string(), alias);
        }
        *self.entries.write().unwrap() = map;
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}

#[derive(Clone, Default)]
pub struct MockAliasSource {
    aliases: Arc<RwLock<Vec<Alias>>>,
    should_fail: Arc<RwLock<bool>>,
    load_calls: Arc<AtomicUsize>,
}

impl MockAliasSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_aliases(&self, aliases: Vec<Alias>) {
        *self.aliases.write().unwrap() = aliases;
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }

    pub fn load_call_count(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AliasSource for MockAliasSource {
    async fn load(&self) -> Result<Vec<Alias>, MdnsError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().unwrap() {
            return Err(MdnsError::AliasSource("mock failure".to_string()));
        }
        Ok(self.aliases.read().unwrap().clone())
    }
}
