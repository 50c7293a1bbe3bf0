use async_trait::async_trait;
use ferrous_mdns_application::ports::{AliasRepository, AliasSource};
use ferrous_mdns_domain::{normalize_name, Alias, MdnsError};
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

pub struct MockAliasSource {
    aliases: Arc<RwLock<Vec<Alias>>>,
    should_fail: Arc<RwLock<bool>>,
    load_count: Arc<AtomicU64>,
}

impl MockAliasSource {
    pub fn new() -> Self {
        Self {
            aliases: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
            load_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_hosts(hosts: &[(&str, &str)]) -> Self {
        let source = Self::new();
        source.set_hosts(hosts);
        source
    }

    pub fn set_hosts(&self, hosts: &[(&str, &str)]) {
        *self.aliases.write().unwrap() = hosts
            .iter()
            .map(|(host, addr)| Alias::parse(host, &[*addr]).unwrap())
            .collect();
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().unwrap() = fail;
    }

    pub fn load_count(&self) -> u64 {
        self.load_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl AliasSource for MockAliasSource {
    async fn load(&self) -> Result<Vec<Alias>, MdnsError> {
        self.load_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().unwrap() {
            return Err(MdnsError::AliasSource("mock failure".to_string()));
        }
        Ok(self.aliases.read().unwrap().clone())
    }
}

pub struct MockAliasRepository {
    aliases: RwLock<Vec<Alias>>,
}

impl MockAliasRepository {
    pub fn new() -> Self {
        Self {
            aliases: RwLock::new(Vec::new()),
        }
    }
}

impl AliasRepository for MockAliasRepository {
    fn lookup(&self, name: &str) -> Vec<IpAddr> {
        let name = normalize_name(name);
        self.aliases
            .read()
            .unwrap()
            .iter()
            .find(|a| a.hostname() == name)
            .map(|a| a.addresses().to_vec())
            .unwrap_or_default()
    }

    fn contains(&self, name: &str) -> bool {
        !self.lookup(name).is_empty()
    }

    fn aliases(&self) -> Vec<Alias> {
        self.aliases.read().unwrap().clone()
    }

    fn reload(&self, aliases: Vec<Alias>) {
        *self.aliases.write().unwrap() = aliases;
    }

    fn len(&self) -> usize {
        self.aliases.read().unwrap().len()
    }
}
