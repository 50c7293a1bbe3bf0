use async_trait::async_trait;
use ferrous_mdns_application::ports::AliasSource;
use ferrous_mdns_domain::config::AliasConfig;
use ferrous_mdns_domain::{qualify_local, Alias, MdnsError};
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Aliases from the `[aliases]` config section plus an optional alias file.
///
/// Entries without explicit addresses resolve to `default_addresses`,
/// normally the address of the interface the socket joined on.
pub struct FileAliasSource {
    file: Option<PathBuf>,
    hosts: Vec<(String, Vec<String>)>,
    default_addresses: Vec<IpAddr>,
}

impl FileAliasSource {
    pub fn new(config: &AliasConfig, default_addresses: Vec<IpAddr>) -> Self {
        Self {
            file: config.file.as_ref().map(PathBuf::from),
            hosts: config
                .hosts
                .iter()
                .map(|h| (h.hostname.clone(), h.addresses.clone()))
                .collect(),
            default_addresses,
        }
    }

    fn alias_with_defaults(
        &self,
        hostname: &str,
        addresses: &[String],
    ) -> Result<Alias, MdnsError> {
        if addresses.is_empty() {
            Alias::new(&qualify_local(hostname), self.default_addresses.clone())
        } else {
            Alias::parse(&qualify_local(hostname), addresses)
        }
    }
}

#[async_trait]
impl AliasSource for FileAliasSource {
    async fn load(&self) -> Result<Vec<Alias>, MdnsError> {
        let mut aliases = Vec::new();

        for (hostname, addresses) in &self.hosts {
            aliases.push(self.alias_with_defaults(hostname, addresses)?);
        }

        if let Some(path) = &self.file {
            match tokio::fs::read_to_string(path).await {
                Ok(contents) => {
                    for (line_no, hostname, addresses) in parse_alias_file(&contents) {
                        match self.alias_with_defaults(&hostname, &addresses) {
                            Ok(alias) => aliases.push(alias),
                            Err(e) => {
                                warn!(file = %path.display(), line = line_no, error = %e, "Skipping invalid alias")
                            }
                        }
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    warn!(file = %path.display(), "Alias file not found");
                }
                Err(e) => {
                    return Err(MdnsError::AliasSource(format!(
                        "failed to read {}: {}",
                        path.display(),
                        e
                    )));
                }
            }
        }

        let aliases: Vec<Alias> = aliases
            .into_iter()
            .filter(|alias| !alias.addresses().is_empty())
            .collect();
        debug!(count = aliases.len(), "Aliases loaded");
        Ok(aliases)
    }
}

/// Splits an alias file into `(line number, hostname, addresses)` entries.
///
/// One alias per line: a hostname optionally followed by whitespace
/// separated addresses. Blank lines and `#` comments are skipped.
pub fn parse_alias_file(contents: &str) -> Vec<(usize, String, Vec<String>)> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.split('#').next().unwrap_or_default().trim();
            let mut fields = line.split_whitespace();
            let hostname = fields.next()?;
            Some((
                idx + 1,
                hostname.to_string(),
                fields.map(str::to_string).collect(),
            ))
        })
        .collect()
}
