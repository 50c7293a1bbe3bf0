use crate::alias::Alias;
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AliasConfig {
    /// Plain-text alias file, one alias per line.
    #[serde(default)]
    pub file: Option<String>,

    /// Seconds between alias file re-reads; 0 disables the reload job.
    #[serde(default)]
    pub reload_interval_secs: u64,

    #[serde(default)]
    pub hosts: Vec<AliasEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AliasEntry {
    pub hostname: String,

    /// Empty means "the address of the joined interface".
    #[serde(default)]
    pub addresses: Vec<String>,
}

impl AliasEntry {
    pub fn to_alias(&self) -> Result<Alias, ConfigError> {
        Alias::parse(&self.hostname, self.addresses.as_slice())
            .map_err(|e| ConfigError::InvalidAlias(self.hostname.clone(), e.to_string()))
    }
}
