use crate::ports::AliasRepository;
use ferrous_mdns_domain::mdns::{is_legacy_unicast_source, MDNS_PORT};
use ferrous_mdns_domain::{DnsMessage, MdnsError, Question, ResourceRecord};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyDestination {
    /// Back to the group so every listener learns the answer.
    Multicast,
    /// Straight to the querier.
    Unicast(SocketAddr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdnsReply {
    pub message: DnsMessage,
    pub destination: ReplyDestination,
}

/// Resolves the questions of an mDNS query against the alias table.
pub struct AnswerQueryUseCase {
    aliases: Arc<dyn AliasRepository>,
    ttl: u32,
    mdns_port: u16,
}

impl AnswerQueryUseCase {
    pub fn new(aliases: Arc<dyn AliasRepository>, ttl: u32) -> Self {
        Self {
            aliases,
            ttl,
            mdns_port: MDNS_PORT,
        }
    }

    /// Port peers use for mDNS; queries from any other port are legacy.
    pub fn with_mdns_port(mut self, mdns_port: u16) -> Self {
        self.mdns_port = mdns_port;
        self
    }

    /// True when at least one question names a configured alias.
    pub fn is_relevant(&self, query: &DnsMessage) -> bool {
        query
            .questions
            .iter()
            .any(|q| self.aliases.contains(&q.name))
    }

    /// Builds the reply for `query`. `LookupMiss` when no question produced
    /// an answer.
    ///
    /// The reply goes unicast when the query came from a legacy resolver
    /// (source port other than the mDNS port) or when every answered question set
    /// the unicast-response bit. A mixed query is answered on the group.
    pub fn execute(&self, query: &DnsMessage, source: SocketAddr) -> Result<MdnsReply, MdnsError> {
        let mut answers = Vec::new();
        let mut all_unicast = true;

        for question in &query.questions {
            let before = answers.len();
            self.answer_question(question, &mut answers);
            if answers.len() > before && !question.unicast_response {
                all_unicast = false;
            }
        }

        if answers.is_empty() {
            debug!(id = query.id, source = %source, "No alias answers for query");
            let names: Vec<&str> = query.questions.iter().map(|q| &*q.name).collect();
            return Err(MdnsError::LookupMiss(names.join(", ")));
        }

        let destination = if is_legacy_unicast_source(&source, self.mdns_port) || all_unicast {
            ReplyDestination::Unicast(source)
        } else {
            ReplyDestination::Multicast
        };

        Ok(MdnsReply {
            message: DnsMessage::authoritative_response(query, answers),
            destination,
        })
    }

    fn answer_question(&self, question: &Question, answers: &mut Vec<ResourceRecord>) {
        if !question.is_internet_class() {
            return;
        }

        let record_type = question.record_type();
        for addr in self.aliases.lookup(&question.name) {
            if record_type.accepts_address(&addr) {
                answers.push(ResourceRecord::address(
                    question.name.clone(),
                    addr,
                    self.ttl,
                ));
            }
        }
    }
}
