use ferrous_mdns_application::ports::{AliasRepository, AliasSource, MdnsTransport};
use ferrous_mdns_application::use_cases::{
    AnnounceAliasesUseCase, AnswerQueryUseCase, ReloadAliasesUseCase,
};
use ferrous_mdns_domain::Config;
use ferrous_mdns_infrastructure::aliases::{AliasTable, FileAliasSource};
use ferrous_mdns_infrastructure::mdns::{Listener, MdnsService, Responder, SharedContext};
use ferrous_mdns_jobs::AliasReloadJob;
use std::net::IpAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Everything the binary wires together around one multicast transport.
pub struct MdnsServices {
    pub ctx: Arc<SharedContext>,
    pub aliases: Arc<AliasTable>,
    pub reload_aliases: Arc<ReloadAliasesUseCase>,
    answer_query: Arc<AnswerQueryUseCase>,
    announce: Option<Arc<AnnounceAliasesUseCase>>,
    max_datagram_size: usize,
    reload_interval_secs: u64,
}

impl MdnsServices {
    pub fn new(
        config: &Config,
        transport: Arc<dyn MdnsTransport>,
        interface_addr: IpAddr,
        shutdown: CancellationToken,
    ) -> Self {
        let aliases = Arc::new(AliasTable::empty());
        let repository: Arc<dyn AliasRepository> = aliases.clone();
        let source: Arc<dyn AliasSource> =
            Arc::new(FileAliasSource::new(&config.aliases, vec![interface_addr]));

        let announce = config
            .mdns
            .announce_on_startup
            .then(|| Arc::new(AnnounceAliasesUseCase::new(repository.clone(), config.mdns.ttl)));

        Self {
            ctx: Arc::new(SharedContext::with_shutdown(transport, shutdown)),
            reload_aliases: Arc::new(ReloadAliasesUseCase::new(source, repository.clone())),
            answer_query: Arc::new(
                AnswerQueryUseCase::new(repository, config.mdns.ttl)
                    .with_mdns_port(config.server.port),
            ),
            aliases,
            announce,
            max_datagram_size: config.mdns.max_datagram_size,
            reload_interval_secs: config.aliases.reload_interval_secs,
        }
    }

    pub fn reload_job(&self) -> AliasReloadJob {
        AliasReloadJob::new(self.reload_aliases.clone()).with_interval(self.reload_interval_secs)
    }

    pub fn service(&self) -> MdnsService {
        let listener = Listener::new(self.ctx.clone(), self.answer_query.clone())
            .with_buffer_size(self.max_datagram_size);
        let mut responder = Responder::new(self.ctx.clone(), self.answer_query.clone());
        if let Some(announce) = &self.announce {
            responder = responder.with_announcement(announce.clone());
        }
        MdnsService::new(self.ctx.clone(), listener, responder)
    }
}
