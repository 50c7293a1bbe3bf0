use super::context::SharedContext;
use super::queue::QueueItem;
use super::wire;
use ferrous_mdns_application::use_cases::{
    AnnounceAliasesUseCase, AnswerQueryUseCase, MdnsReply, ReplyDestination,
};
use ferrous_mdns_domain::{DnsMessage, MdnsError};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Send side of the pipeline: answers queued queries.
pub struct Responder {
    ctx: Arc<SharedContext>,
    answer: Arc<AnswerQueryUseCase>,
    announce: Option<Arc<AnnounceAliasesUseCase>>,
}

impl Responder {
    pub fn new(ctx: Arc<SharedContext>, answer: Arc<AnswerQueryUseCase>) -> Self {
        Self {
            ctx,
            answer,
            announce: None,
        }
    }

    /// Multicast one unsolicited response for every alias before serving.
    pub fn with_announcement(mut self, announce: Arc<AnnounceAliasesUseCase>) -> Self {
        self.announce = Some(announce);
        self
    }

    pub async fn run(self) -> Result<(), MdnsError> {
        info!("mDNS responder started");

        if let Some(announce) = &self.announce {
            if let Some(message) = announce.execute() {
                let group = self.ctx.group_addr();
                info!(records = message.answers.len(), "Announcing aliases");
                self.send(&message, group).await.or_else(survive)?;
            }
        }

        let shutdown = self.ctx.shutdown_token().clone();
        while let Some(item) = self.ctx.queue().pop(&shutdown).await {
            self.respond(item).await.or_else(survive)?;
        }

        info!("mDNS responder stopped");
        Ok(())
    }

    /// Answers one queued query.
    ///
    /// `LookupMiss` and `SendFailure` only cost this reply; a lost socket is
    /// `SocketFailure`.
    pub async fn respond(&self, item: QueueItem) -> Result<(), MdnsError> {
        let MdnsReply {
            message,
            destination,
        } = self.answer.execute(&item.message, item.source)?;

        let target = match destination {
            ReplyDestination::Multicast => self.ctx.group_addr(),
            ReplyDestination::Unicast(addr) => addr,
        };

        debug!(
            id = message.id,
            source = %item.source,
            destination = %target,
            answers = message.answers.len(),
            "Sending mDNS reply"
        );
        self.send(&message, target).await
    }

    async fn send(&self, message: &DnsMessage, target: SocketAddr) -> Result<(), MdnsError> {
        let bytes = wire::encode(message)?;

        match self.ctx.transport().send_to(&bytes, target).await {
            Ok(_) => Ok(()),
            Err(e) if is_socket_lost(&e) => {
                error!(destination = %target, error = %e, "mDNS socket lost");
                Err(MdnsError::SocketFailure(e.to_string()))
            }
            Err(e) => Err(MdnsError::SendFailure {
                destination: target.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Logs an error the loop carries on after and swallows it.
fn survive(e: MdnsError) -> Result<(), MdnsError> {
    if !e.is_recoverable() {
        return Err(e);
    }
    match e {
        MdnsError::LookupMiss(_) => debug!(error = %e, "Dropping query"),
        _ => warn!(error = %e, "Dropping reply"),
    }
    Ok(())
}

fn is_socket_lost(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotConnected | io::ErrorKind::BrokenPipe | io::ErrorKind::ConnectionAborted
    )
}
