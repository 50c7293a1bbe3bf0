use crate::ports::AliasRepository;
use ferrous_mdns_domain::{DnsMessage, ResourceRecord};
use std::sync::Arc;

/// Builds the unsolicited response that advertises every alias at startup.
pub struct AnnounceAliasesUseCase {
    aliases: Arc<dyn AliasRepository>,
    ttl: u32,
}

impl AnnounceAliasesUseCase {
    pub fn new(aliases: Arc<dyn AliasRepository>, ttl: u32) -> Self {
        Self { aliases, ttl }
    }

    /// `None` when there is nothing to announce.
    pub fn execute(&self) -> Option<DnsMessage> {
        let answers: Vec<ResourceRecord> = self
            .aliases
            .aliases()
            .iter()
            .flat_map(|alias| {
                alias
                    .addresses()
                    .iter()
                    .map(|addr| ResourceRecord::address(alias.hostname_arc(), *addr, self.ttl))
                    .collect::<Vec<_>>()
            })
            .collect();

        if answers.is_empty() {
            return None;
        }

        Some(DnsMessage::announcement(answers))
    }
}
